// what a single edit did to the mapping
use crate::core::types::{ColumnId, FieldId};

/// Outcome of one `set_mapping` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingChange {
    /// The requested state was already in place.
    Unchanged,
    /// `column` now maps to `field`.
    Assigned {
        column: ColumnId,
        field: FieldId,
        /// Field `column` was mapped to before, if any.
        replaced: Option<FieldId>,
        /// Column that owned `field` before and is now unmapped, if any.
        displaced: Option<ColumnId>,
    },
    /// `column` no longer maps to `field`.
    Unassigned { column: ColumnId, field: FieldId },
}

impl MappingChange {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, MappingChange::Unchanged)
    }

    /// The column that lost its field to this edit.
    pub fn displaced(&self) -> Option<&str> {
        match self {
            MappingChange::Assigned { displaced, .. } => displaced.as_deref(),
            _ => None,
        }
    }
}
