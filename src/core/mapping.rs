// column -> field assignment, kept a partial bijection
use tracing::{debug, trace, warn};

use crate::core::delta::MappingChange;
use crate::core::session::{MappingError, MappingSession};

impl MappingSession {
    //store/overwrite the mapping of a source column
    //1. column must be in the column set.
    //2. a non-empty field must be in the catalog.
    //3. each column maps to at most one field (overwrite on reassign).
    //4. each field is mapped by at most one column (the old owner is displaced).
    //5. nothing is touched until both references are validated.

    fn expect_column(&self, column: &str) -> Result<(), MappingError> {
        if !self.columns.contains(column) {
            warn!(column, "rejected mapping for unknown column");
            return Err(MappingError::UnknownColumn(column.to_string()));
        }
        Ok(())
    }

    fn expect_field(&self, field: &str) -> Result<(), MappingError> {
        if !self.catalog.contains(field) {
            warn!(field, "rejected mapping to unknown field");
            return Err(MappingError::UnknownField(field.to_string()));
        }
        Ok(())
    }

    /// Map `column` to `field_id`, or unmap it when `field_id` is `None` or empty.
    ///
    /// If another column currently owns `field_id` it is unmapped first, then
    /// `column`'s previous assignment is overwritten. Both steps happen under
    /// the same `&mut self`, so no caller can observe one without the other.
    /// Reapplying the same arguments is a no-op.
    pub fn set_mapping(
        &mut self,
        column: &str,
        field_id: Option<&str>,
    ) -> Result<MappingChange, MappingError> {
        self.expect_column(column)?;

        let Some(field) = field_id.filter(|f| !f.is_empty()) else {
            return Ok(self.unassign(column));
        };
        self.expect_field(field)?;

        if self.maps_to.get(column).map(String::as_str) == Some(field) {
            trace!(column, field, "mapping already in place");
            return Ok(MappingChange::Unchanged);
        }

        // steal the field from its current owner
        let displaced = self.mapped_by.remove(field);
        if let Some(prev) = &displaced {
            self.maps_to.shift_remove(prev);
        }

        let replaced = self.maps_to.insert(column.to_string(), field.to_string());
        if let Some(old) = &replaced {
            self.mapped_by.remove(old);
        }
        self.mapped_by.insert(field.to_string(), column.to_string());

        debug!(
            column,
            field,
            replaced = replaced.as_deref(),
            displaced = displaced.as_deref(),
            "column mapped"
        );

        Ok(MappingChange::Assigned {
            column: column.to_string(),
            field: field.to_string(),
            replaced,
            displaced,
        })
    }

    // caller has validated `column`
    fn unassign(&mut self, column: &str) -> MappingChange {
        match self.maps_to.shift_remove(column) {
            Some(field) => {
                self.mapped_by.remove(&field);
                debug!(column, field = field.as_str(), "column unmapped");
                MappingChange::Unassigned {
                    column: column.to_string(),
                    field,
                }
            }
            None => {
                trace!(column, "column already unmapped");
                MappingChange::Unchanged
            }
        }
    }

    /// Pick `column` for `field_id` (or clear the field when `column` is `None`).
    ///
    /// This is the field-centric edit a per-field selector performs; clearing
    /// unmaps whichever column currently owns the field.
    pub fn select_for_field(
        &mut self,
        field_id: &str,
        column: Option<&str>,
    ) -> Result<MappingChange, MappingError> {
        self.expect_field(field_id)?;
        match column.filter(|c| !c.is_empty()) {
            Some(column) => self.set_mapping(column, Some(field_id)),
            None => self.unassign_field(field_id),
        }
    }

    /// Unmap whichever column currently maps to `field_id`.
    pub fn unassign_field(&mut self, field_id: &str) -> Result<MappingChange, MappingError> {
        self.expect_field(field_id)?;
        match self.mapped_by.get(field_id).cloned() {
            Some(column) => Ok(self.unassign(&column)),
            None => Ok(MappingChange::Unchanged),
        }
    }

    /// The column currently mapped to `field_id`, if any.
    pub fn column_for_field(&self, field_id: &str) -> Option<&str> {
        self.mapped_by.get(field_id).map(String::as_str)
    }

    /// The field `column` currently maps to, if any.
    pub fn field_for_column(&self, column: &str) -> Option<&str> {
        self.maps_to.get(column).map(String::as_str)
    }

    pub fn is_mapped(&self, field_id: &str) -> bool {
        self.column_for_field(field_id).is_some()
    }

    /// True when `column` is mapped to some field other than `excluding_field`.
    ///
    /// A column stays available for the field it already owns so that field
    /// can show and clear it.
    pub fn is_column_consumed(&self, column: &str, excluding_field: &str) -> bool {
        self.maps_to
            .get(column)
            .is_some_and(|field| field != excluding_field)
    }

    pub fn reset(&mut self) {
        self.maps_to.clear();
        self.mapped_by.clear();
    }

    /// Number of mapped pairs (equal to the number of mapped fields).
    pub fn len(&self) -> usize {
        self.maps_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps_to.is_empty()
    }

    //for export, in the order columns were first mapped
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.maps_to.iter().map(|(c, f)| (c.as_str(), f.as_str()))
    }

    /// Catalog fields with no column, in catalog order.
    pub fn unmapped_fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.catalog
            .iter()
            .map(|f| f.id.as_str())
            .filter(|id| !self.mapped_by.contains_key(*id))
    }

    /// Columns with no field, in sheet order.
    pub fn unmapped_columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns
            .iter()
            .map(|c| c.id.as_str())
            .filter(|id| !self.maps_to.contains_key(*id))
    }

    /// Check that every pair references known ids and that the forward and
    /// reverse indexes describe the same partial bijection.
    pub fn validate_all_mappings(&self) -> Result<(), MappingError> {
        for (column, field) in self.maps_to.iter() {
            self.expect_column(column)?;
            self.expect_field(field)?;
            if self.mapped_by.get(field) != Some(column) {
                return Err(MappingError::IndexOutOfSync(format!(
                    "{column} -> {field} has no matching reverse entry"
                )));
            }
        }
        if self.maps_to.len() != self.mapped_by.len() {
            return Err(MappingError::IndexOutOfSync(format!(
                "{} forward pairs, {} reverse pairs",
                self.maps_to.len(),
                self.mapped_by.len()
            )));
        }
        Ok(())
    }
}
