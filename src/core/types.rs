// identifiers shared by the catalog, the column set and the mapping store

/// Source column identifier, as supplied by the imported sheet header.
pub type ColumnId = String;

/// Stable identifier of a target field in the catalog.
pub type FieldId = String;
