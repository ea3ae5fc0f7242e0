// read-only rows handed to the presentation layer
use crate::core::catalog::Field;
use crate::core::column::Column;
use crate::core::session::MappingSession;

/// One catalog field as the mapping screen shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow<'a> {
    pub field: &'a Field,
    /// Column currently mapped to the field.
    pub column: Option<&'a str>,
}

impl FieldRow<'_> {
    pub fn is_mapped(&self) -> bool {
        self.column.is_some()
    }
}

/// One selectable column under a given field.
///
/// `disabled` only hints that the column is used by another field; picking it
/// anyway still goes through `set_mapping` and displaces correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOption<'a> {
    pub column: &'a Column,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

impl MappingSession {
    /// Fields matching `term` with their current column, in catalog order.
    pub fn field_rows(&self, term: &str) -> Vec<FieldRow<'_>> {
        self.catalog
            .search(term)
            .into_iter()
            .map(|field| FieldRow {
                field,
                column: self.column_for_field(&field.id),
            })
            .collect()
    }

    /// Every column, in sheet order, as an option for `field_id`.
    pub fn column_options(&self, field_id: &str) -> Vec<ColumnOption<'_>> {
        self.columns
            .iter()
            .map(|column| ColumnOption {
                column,
                label: column.display_label(),
                disabled: self.is_column_consumed(&column.id, field_id),
                selected: self.field_for_column(&column.id) == Some(field_id),
            })
            .collect()
    }
}
