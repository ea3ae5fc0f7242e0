// source columns supplied by the imported sheet
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::session::MappingError;
use crate::core::types::ColumnId;

/// A source column plus an optional reference label (e.g. the sheet letter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    #[serde(default)]
    pub reference: Option<String>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            reference: None,
        }
    }

    pub fn with_reference(id: impl Into<ColumnId>, reference: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reference: Some(reference.into()),
        }
    }

    /// `"<ref> - <id>"` when a reference label is present, the bare id otherwise.
    pub fn display_label(&self) -> String {
        match self.reference.as_deref() {
            Some(r) if !r.is_empty() => format!("{r} - {}", self.id),
            _ => self.id.clone(),
        }
    }
}

/// Ordered, duplicate-free list of source columns, fixed for the session.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: Vec<Column>,
    index: HashMap<ColumnId, usize>,
}

impl ColumnSet {
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Result<Self, MappingError> {
        let columns: Vec<Column> = columns.into_iter().collect();
        let mut index = HashMap::with_capacity(columns.len());

        for (pos, column) in columns.iter().enumerate() {
            if column.id.is_empty() {
                return Err(MappingError::EmptyColumnId);
            }
            if index.insert(column.id.clone(), pos).is_some() {
                return Err(MappingError::DuplicateColumn(column.id.clone()));
            }
        }

        Ok(Self { columns, index })
    }

    /// Columns without reference labels, in the given order.
    pub fn from_ids<I, S>(ids: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnId>,
    {
        Self::new(ids.into_iter().map(Column::new))
    }

    pub fn get(&self, id: &str) -> Option<&Column> {
        self.index.get(id).map(|&pos| &self.columns[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter()
    }
}
