//! Error taxonomy for the dataset coordination layer.
//!
//! Two of these conditions are expected and recovered close to where they
//! arise: `EmptyResource` (a dataset with zero rows) and the locate
//! failures `NotFound`/`AmbiguousIdentity` (a mutation target that does
//! not resolve to exactly one record, handled as a silent no-op). The
//! I/O and codec variants are genuine failures and propagate to the
//! caller — swallowing a lost write would break the memory/disk
//! consistency invariant.

/// Errors raised by the dataset store and its codec.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The backing resource holds no data rows (header-only or fully
    /// empty). Expected and recoverable: callers treat it as a dataset
    /// with zero records.
    #[error("backing resource has no data rows")]
    EmptyResource,
    /// No record matches the requested identity. Recovered internally as
    /// a no-op mutation.
    #[error("no record with identity {0}")]
    NotFound(String),
    /// More than one record matches the requested identity. Treated the
    /// same as [`RosterError::NotFound`] — a silent no-op — but logged
    /// separately, since it marks a data-integrity violation.
    #[error("{count} records share identity {identity}")]
    AmbiguousIdentity { identity: String, count: usize },
    #[error("failed to read backing resource: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write backing resource: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to replace backing resource: {0}")]
    Persist(std::io::Error),
    #[error("failed to decode record row: {0}")]
    Decode(csv::Error),
    #[error("failed to encode record row: {0}")]
    Encode(csv::Error),
}

pub type RosterResult<T> = std::result::Result<T, RosterError>;
