// fixed catalog of target fields + search filter
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::session::MappingError;
use crate::core::types::FieldId;

/// A target field in the destination schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub label: String,
    /// Optional help text shown next to the field (e.g. accepted values).
    #[serde(default)]
    pub hint: Option<String>,
}

impl Field {
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    // `needle` is already lowercased by the caller
    fn matches(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle) || self.label.to_lowercase().contains(needle)
    }
}

/// Immutable, ordered list of target fields.
///
/// Field ids are non-empty and unique; the order is the definition order and
/// never changes for the lifetime of the catalog.
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    fields: Vec<Field>,
    index: HashMap<FieldId, usize>,
}

impl FieldCatalog {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Result<Self, MappingError> {
        let fields: Vec<Field> = fields.into_iter().collect();
        let mut index = HashMap::with_capacity(fields.len());

        for (pos, field) in fields.iter().enumerate() {
            if field.id.is_empty() {
                return Err(MappingError::EmptyFieldId);
            }
            if index.insert(field.id.clone(), pos).is_some() {
                return Err(MappingError::DuplicateField(field.id.clone()));
            }
        }

        Ok(Self { fields, index })
    }

    /// Beneficiary record schema used by the assistance payout import.
    pub fn beneficiary() -> Self {
        let fields = [
            ("last_name", "Last Name"),
            ("first_name", "First Name"),
            ("middle_name", "Middle Name"),
            ("extension_name", "Extension Name (Jr., Sr., III, etc.)"),
            ("birth_month", "Birth Month"),
            ("birth_day", "Birth Day"),
            ("birth_year", "Birth Year"),
            ("sex", "Sex"),
            ("barangay", "Barangay"),
            ("psgc_city", "PSGC City"),
            ("city", "City"),
            ("province", "Province"),
            ("type_of_assistance", "Type of Assistance"),
            ("amount", "Amount"),
            ("philsys_number", "PhilSys Number"),
            ("beneficiary_uniq", "Beneficiary ID"),
            ("contact_number", "Contact Number"),
            ("target_sector", "Target Sector"),
            ("sub_category", "Sub Category"),
            ("civil_status", "Civil Status"),
        ]
        .into_iter()
        .map(|(id, label)| {
            let field = Field::new(id, label);
            if id == "extension_name" {
                field.with_hint("Common values: Jr., Sr., III, IV, etc.")
            } else {
                field
            }
        });

        let fields: Vec<Field> = fields.collect();
        let index = fields
            .iter()
            .enumerate()
            .map(|(pos, f)| (f.id.clone(), pos))
            .collect();
        Self { fields, index }
    }

    /// All fields in definition order.
    pub fn list_fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fields whose id or label contains `term`, ignoring case, in catalog order.
    ///
    /// An empty term returns the whole catalog; a term nothing matches returns
    /// an empty vec.
    pub fn search(&self, term: &str) -> Vec<&Field> {
        let needle = term.to_lowercase();
        self.fields.iter().filter(|f| f.matches(&needle)).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Field> {
        self.index.get(id).map(|&pos| &self.fields[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Definition-order position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter()
    }
}
