//! Column-to-field mapping engine for tabular imports.
//!
//! A [`MappingSession`] holds a partial bijection between the columns of an
//! imported sheet and the fields of a fixed [`FieldCatalog`]. Every edit goes
//! through [`MappingSession::set_mapping`], which displaces the previous owner
//! of a field so the bijection never breaks.

pub mod core;
pub mod mapping;

pub use crate::core::catalog::{Field, FieldCatalog};
pub use crate::core::column::{Column, ColumnSet};
pub use crate::core::delta::MappingChange;
pub use crate::core::progress::{Progress, completion_ratio};
pub use crate::core::session::{MappingError, MappingSession};
pub use crate::core::shared::SharedMappingSession;
pub use crate::core::types::{ColumnId, FieldId};
pub use crate::core::view::{ColumnOption, FieldRow};
pub use crate::mapping::config::{MappingEntry, SessionConfig};
pub use crate::mapping::export::MappingReport;
