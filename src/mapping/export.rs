// snapshot of a session handed to whoever persists the mapped records
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::progress::{Progress, completion_ratio};
use crate::core::session::{MappingError, MappingSession};
use crate::core::types::{ColumnId, FieldId};
use crate::mapping::config::MappingEntry;

/// Full read-out of a mapping, complete or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingReport {
    /// Mapped pairs in catalog order.
    pub mappings: Vec<MappingEntry>,
    pub unmapped_fields: Vec<FieldId>,
    pub unmapped_columns: Vec<ColumnId>,
    pub mapped: usize,
    pub total: usize,
}

impl MappingReport {
    pub fn from_session(session: &MappingSession) -> Self {
        let mappings = session
            .catalog()
            .iter()
            .filter_map(|field| {
                session.column_for_field(&field.id).map(|column| MappingEntry {
                    column: column.to_string(),
                    field: field.id.clone(),
                })
            })
            .collect();

        let Progress { mapped, total } = session.progress();
        Self {
            mappings,
            unmapped_fields: session.unmapped_fields().map(str::to_string).collect(),
            unmapped_columns: session.unmapped_columns().map(str::to_string).collect(),
            mapped,
            total,
        }
    }

    pub fn completion_ratio(&self) -> f64 {
        completion_ratio(self.mapped, self.total)
    }

    /// Field mapped from `column`, if any.
    pub fn field_for_column(&self, column: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.column == column)
            .map(|m| m.field.as_str())
    }

    pub fn to_toon(&self) -> Result<String, MappingError> {
        toon_format::encode_default(self).map_err(|e| MappingError::Toon(e.to_string()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MappingError> {
        let path = path.as_ref();
        fs::write(path, self.to_toon()?)?;
        info!(
            path = %path.display(),
            mapped = self.mapped,
            total = self.total,
            "exported mapping report"
        );
        Ok(())
    }
}

impl MappingSession {
    pub fn report(&self) -> MappingReport {
        MappingReport::from_session(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::catalog::{Field, FieldCatalog};
    use crate::core::column::ColumnSet;

    fn session() -> MappingSession {
        let catalog = FieldCatalog::new([
            Field::new("last_name", "Last Name"),
            Field::new("first_name", "First Name"),
            Field::new("sex", "Sex"),
        ])
        .unwrap();
        let columns = ColumnSet::from_ids(["Given", "Surname", "Notes"]).unwrap();
        MappingSession::new(catalog, columns)
    }

    #[test]
    fn partial_mapping_is_reported_in_catalog_order() {
        let mut s = session();
        s.set_mapping("Given", Some("first_name")).unwrap();
        s.set_mapping("Surname", Some("last_name")).unwrap();

        let report = s.report();

        assert_eq!(
            report.mappings,
            vec![
                MappingEntry {
                    column: "Surname".into(),
                    field: "last_name".into()
                },
                MappingEntry {
                    column: "Given".into(),
                    field: "first_name".into()
                },
            ]
        );
        assert_eq!(report.unmapped_fields, vec!["sex".to_string()]);
        assert_eq!(report.unmapped_columns, vec!["Notes".to_string()]);
        assert_eq!((report.mapped, report.total), (2, 3));
        assert_eq!(report.field_for_column("Given"), Some("first_name"));
        assert_eq!(report.field_for_column("Notes"), None);
    }

    #[test]
    fn empty_mapping_is_still_reportable() {
        let report = session().report();
        assert!(report.mappings.is_empty());
        assert_eq!(report.unmapped_fields.len(), 3);
        assert_eq!(report.completion_ratio(), 0.0);
    }

    #[test]
    fn report_encodes_to_toon() {
        let mut s = session();
        s.set_mapping("Notes", Some("sex")).unwrap();

        let text = s.report().to_toon().unwrap();

        assert!(text.contains("Notes"));
        assert!(text.contains("sex"));
    }
}
