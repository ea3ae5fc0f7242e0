/*
Inputs (one .toon file per import):

    fields   - target catalog (optional, defaults to the beneficiary schema)

    columns  - sheet header ids + optional reference letters

    mappings - optional suggested pairs to pre-seed the session

Output:

    MappingSession ready for operator edits
*/
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::catalog::{Field, FieldCatalog};
use crate::core::column::{Column, ColumnSet};
use crate::core::session::{MappingError, MappingSession};
use crate::core::types::{ColumnId, FieldId};

/// A single `column -> field` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub column: ColumnId,
    pub field: FieldId,
}

/// Everything needed to open a mapping session, as read from a TOON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub fields: Vec<Field>,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub mappings: Vec<MappingEntry>,
}

impl SessionConfig {
    pub fn from_toon(text: &str) -> Result<Self, MappingError> {
        toon_format::decode_default(text).map_err(|e| MappingError::Toon(e.to_string()))
    }

    pub fn to_toon(&self) -> Result<String, MappingError> {
        toon_format::encode_default(self).map_err(|e| MappingError::Toon(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MappingError> {
        let path = path.as_ref();
        let config = Self::from_toon(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            fields = config.fields.len(),
            columns = config.columns.len(),
            seeded = config.mappings.len(),
            "loaded mapping session config"
        );
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MappingError> {
        fs::write(path, self.to_toon()?)?;
        Ok(())
    }

    /// The catalog this config describes; no fields means the beneficiary schema.
    pub fn catalog(&self) -> Result<FieldCatalog, MappingError> {
        if self.fields.is_empty() {
            return Ok(FieldCatalog::beneficiary());
        }
        FieldCatalog::new(self.fields.iter().cloned())
    }

    /// Validate the catalog and columns and apply the seed pairs in order.
    pub fn into_session(self) -> Result<MappingSession, MappingError> {
        let catalog = self.catalog()?;
        let columns = ColumnSet::new(self.columns)?;
        MappingSession::with_seed(
            catalog,
            columns,
            self.mappings.into_iter().map(|m| (m.column, m.field)),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> SessionConfig {
        SessionConfig {
            fields: vec![
                Field::new("last_name", "Last Name"),
                Field::new("extension_name", "Extension Name").with_hint("Jr., Sr., III"),
            ],
            columns: vec![
                Column::with_reference("SURNAME", "A"),
                Column::with_reference("EXT", "B"),
            ],
            mappings: vec![MappingEntry {
                column: "SURNAME".into(),
                field: "last_name".into(),
            }],
        }
    }

    #[test]
    fn toon_text_reads_back_the_same_config() {
        let original = config();
        let text = original.to_toon().unwrap();
        assert_eq!(SessionConfig::from_toon(&text).unwrap(), original);
    }

    #[test]
    fn into_session_applies_seed() {
        let session = config().into_session().unwrap();
        assert_eq!(session.column_for_field("last_name"), Some("SURNAME"));
        assert!(!session.is_mapped("extension_name"));
        assert_eq!(session.catalog().len(), 2);
    }

    #[test]
    fn missing_fields_fall_back_to_beneficiary_catalog() {
        let mut cfg = config();
        cfg.fields.clear();
        let session = cfg.into_session().unwrap();
        assert_eq!(session.catalog().len(), 20);
        assert_eq!(session.column_for_field("last_name"), Some("SURNAME"));
    }

    #[test]
    fn seed_with_unknown_field_is_rejected() {
        let mut cfg = config();
        cfg.mappings.push(MappingEntry {
            column: "EXT".into(),
            field: "suffix".into(),
        });
        let err = cfg.into_session().unwrap_err();
        assert!(matches!(err, MappingError::UnknownField(f) if f == "suffix"));
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        let mut cfg = config();
        cfg.columns.push(Column::new("EXT"));
        assert!(matches!(
            cfg.into_session().unwrap_err(),
            MappingError::DuplicateColumn(c) if c == "EXT"
        ));
    }

    #[test]
    fn save_then_load_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "colmap-config-{}.toon",
            std::process::id()
        ));
        let original = config();
        original.save(&path).unwrap();

        let loaded = SessionConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, original);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SessionConfig::load("/nonexistent/colmap/session.toon").unwrap_err();
        assert!(matches!(err, MappingError::Io(_)));
    }
}
