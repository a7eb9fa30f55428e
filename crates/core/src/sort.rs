//! Deterministic, stable reordering of a dataset.

use crate::record::Record;

/// The keys a dataset can be reordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    FirstName,
    LastName,
    Area,
    /// Composite key: enrollment marker first, then area.
    EnrolledArea,
}

impl SortKey {
    /// Parses the surface-level key names (`first`, `last`, `area`,
    /// `enrolled`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "first" => Some(SortKey::FirstName),
            "last" => Some(SortKey::LastName),
            "area" => Some(SortKey::Area),
            "enrolled" => Some(SortKey::EnrolledArea),
            _ => None,
        }
    }
}

/// Stable in-place sort; ties keep their prior relative order.
pub(crate) fn apply(records: &mut [Record], key: SortKey) {
    match key {
        SortKey::FirstName => records.sort_by(|a, b| a.first_name.cmp(&b.first_name)),
        SortKey::LastName => records.sort_by(|a, b| a.last_name.cmp(&b.last_name)),
        SortKey::Area => records.sort_by(|a, b| a.area.cmp(&b.area)),
        SortKey::EnrolledArea => {
            records.sort_by(|a, b| (&a.enrolled, &a.area).cmp(&(&b.enrolled, &b.area)))
        }
    }
}
