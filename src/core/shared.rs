use std::sync::{Arc, RwLock};

use crate::core::delta::MappingChange;
use crate::core::progress::Progress;
use crate::core::session::{MappingError, MappingSession};
use crate::core::types::ColumnId;

/// Thread-safe handle to a `MappingSession`.
///
/// Every edit holds the write lock for its whole duration, so readers always
/// see a complete partial bijection and never a half-applied displacement.
#[derive(Debug, Clone)]
pub struct SharedMappingSession {
    inner: Arc<RwLock<MappingSession>>,
}

impl SharedMappingSession {
    pub fn new(session: MappingSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// Run `f` against a consistent view of the session.
    pub fn read<R>(&self, f: impl FnOnce(&MappingSession) -> R) -> Result<R, MappingError> {
        let guard = self.inner.read().map_err(|_| MappingError::LockPoisoned)?;
        Ok(f(&*guard))
    }

    /// Run `f` with exclusive access to the session.
    pub fn write<R>(&self, f: impl FnOnce(&mut MappingSession) -> R) -> Result<R, MappingError> {
        let mut guard = self.inner.write().map_err(|_| MappingError::LockPoisoned)?;
        Ok(f(&mut *guard))
    }

    pub fn set_mapping(
        &self,
        column: &str,
        field_id: Option<&str>,
    ) -> Result<MappingChange, MappingError> {
        self.write(|s| s.set_mapping(column, field_id))?
    }

    pub fn select_for_field(
        &self,
        field_id: &str,
        column: Option<&str>,
    ) -> Result<MappingChange, MappingError> {
        self.write(|s| s.select_for_field(field_id, column))?
    }

    pub fn column_for_field(&self, field_id: &str) -> Result<Option<ColumnId>, MappingError> {
        self.read(|s| s.column_for_field(field_id).map(str::to_string))
    }

    pub fn is_mapped(&self, field_id: &str) -> Result<bool, MappingError> {
        self.read(|s| s.is_mapped(field_id))
    }

    pub fn is_column_consumed(
        &self,
        column: &str,
        excluding_field: &str,
    ) -> Result<bool, MappingError> {
        self.read(|s| s.is_column_consumed(column, excluding_field))
    }

    pub fn completion_ratio(&self, catalog_size: usize) -> Result<f64, MappingError> {
        self.read(|s| s.completion_ratio(catalog_size))
    }

    pub fn progress(&self) -> Result<Progress, MappingError> {
        self.read(MappingSession::progress)
    }

    /// Owned copy of the current state, e.g. for export.
    pub fn snapshot(&self) -> Result<MappingSession, MappingError> {
        self.read(MappingSession::clone)
    }
}
