use std::collections::HashMap;
use std::io;

use indexmap::IndexMap;
use thiserror::Error;

use crate::core::catalog::FieldCatalog;
use crate::core::column::ColumnSet;
use crate::core::types::{ColumnId, FieldId};

/// Errors raised while building a session or editing its mapping.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("unknown source column '{0}'")]
    UnknownColumn(ColumnId),
    #[error("unknown target field '{0}'")]
    UnknownField(FieldId),
    #[error("field catalog contains an empty field id")]
    EmptyFieldId,
    #[error("field catalog defines '{0}' more than once")]
    DuplicateField(FieldId),
    #[error("column set contains an empty column id")]
    EmptyColumnId,
    #[error("column set lists '{0}' more than once")]
    DuplicateColumn(ColumnId),
    #[error("mapping index out of sync: {0}")]
    IndexOutOfSync(String),
    #[error("mapping session lock poisoned")]
    LockPoisoned,
    #[error("toon error: {0}")]
    Toon(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// One import's mapping state: the catalog and columns it was opened with,
/// and the partial bijection between them.
///
/// `maps_to` (column -> field) and `mapped_by` (field -> column) are always
/// exact inverses of each other; only `core::mapping` writes to them.
#[derive(Debug, Clone)]
pub struct MappingSession {
    pub(crate) catalog: FieldCatalog,
    pub(crate) columns: ColumnSet,
    pub(crate) maps_to: IndexMap<ColumnId, FieldId>,
    pub(crate) mapped_by: HashMap<FieldId, ColumnId>,
}

impl MappingSession {
    /// Open an empty session over `catalog` and `columns`.
    pub fn new(catalog: FieldCatalog, columns: ColumnSet) -> Self {
        Self {
            catalog,
            columns,
            maps_to: IndexMap::new(),
            mapped_by: HashMap::new(),
        }
    }

    /// Open a session pre-seeded with suggested `(column, field)` pairs.
    ///
    /// Pairs are applied in order through `set_mapping`, so later pairs
    /// displace earlier ones that name the same field.
    pub fn with_seed<I, C, F>(
        catalog: FieldCatalog,
        columns: ColumnSet,
        seed: I,
    ) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (C, F)>,
        C: AsRef<str>,
        F: AsRef<str>,
    {
        let mut session = Self::new(catalog, columns);
        for (column, field) in seed {
            session.set_mapping(column.as_ref(), Some(field.as_ref()))?;
        }
        Ok(session)
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }
}
