// completion metric shown as the mapping progress bar
use std::fmt;

use crate::core::session::MappingSession;

/// Fraction of `catalog_size` fields covered by `mapped` columns.
///
/// An empty catalog yields 0 instead of dividing by zero.
pub fn completion_ratio(mapped: usize, catalog_size: usize) -> f64 {
    if catalog_size == 0 {
        return 0.0;
    }
    (mapped as f64 / catalog_size as f64).min(1.0)
}

/// Mapped-field count against the catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub mapped: usize,
    pub total: usize,
}

impl Progress {
    pub fn ratio(&self) -> f64 {
        completion_ratio(self.mapped, self.total)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.mapped >= self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.mapped, self.total)
    }
}

impl MappingSession {
    /// Mapped fields divided by `catalog_size`, in `[0, 1]`.
    pub fn completion_ratio(&self, catalog_size: usize) -> f64 {
        completion_ratio(self.len(), catalog_size)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            mapped: self.len(),
            total: self.catalog.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::FieldCatalog;
    use crate::core::column::ColumnSet;

    #[test]
    fn ratio_is_mapped_over_catalog_size() {
        assert_eq!(completion_ratio(5, 20), 0.25);
        assert_eq!(completion_ratio(0, 20), 0.0);
        assert_eq!(completion_ratio(2, 2), 1.0);
    }

    #[test]
    fn empty_catalog_yields_zero() {
        assert_eq!(completion_ratio(0, 0), 0.0);
        assert_eq!(completion_ratio(3, 0), 0.0);
    }

    #[test]
    fn session_progress_against_beneficiary_catalog() {
        let catalog = FieldCatalog::beneficiary();
        let columns = ColumnSet::from_ids(["c1", "c2", "c3", "c4", "c5", "c6"]).unwrap();
        let mut session = MappingSession::new(catalog, columns);

        let fields = ["last_name", "first_name", "sex", "city", "amount"];
        for (column, field) in ["c1", "c2", "c3", "c4", "c5"].into_iter().zip(fields) {
            session.set_mapping(column, Some(field)).unwrap();
        }

        assert_eq!(session.completion_ratio(20), 0.25);
        let progress = session.progress();
        assert_eq!(progress, Progress { mapped: 5, total: 20 });
        assert_eq!(progress.to_string(), "5 / 20");
        assert!(!progress.is_complete());
    }

    #[test]
    fn empty_session_progress() {
        let session = MappingSession::new(FieldCatalog::default(), ColumnSet::default());
        assert_eq!(session.progress().ratio(), 0.0);
        assert!(!session.progress().is_complete());
    }
}
