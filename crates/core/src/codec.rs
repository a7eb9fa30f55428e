//! Flat-file codec for the dataset backing resources.
//!
//! Each dataset is one CSV resource whose header row is the six display
//! columns. Rewrites are staged in a `.tmp` sibling and renamed over the
//! target, so a reader never observes a partially written file.

use std::fs;
use std::path::Path;

use crate::error::{RosterError, RosterResult};
use crate::record::{Record, HEADERS};

/// Decodes every record row of the backing resource at `path`.
///
/// # Errors
///
/// Returns `RosterError::EmptyResource` when the resource holds no data
/// rows (header-only or fully empty) — an expected, recoverable
/// condition, not corruption. An unreadable resource surfaces as
/// `FileRead`, malformed rows as `Decode`.
pub fn decode_all(path: &Path) -> RosterResult<Vec<Record>> {
    let contents = fs::read_to_string(path).map_err(RosterError::FileRead)?;
    let mut reader = csv::Reader::from_reader(contents.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row.map_err(RosterError::Decode)?);
    }

    if records.is_empty() {
        return Err(RosterError::EmptyResource);
    }
    Ok(records)
}

/// Overwrites the resource at `path` with `records`, header included.
///
/// The rewrite is atomic from the caller's point of view: rows are
/// written to a temporary sibling which is then renamed over the target.
///
/// # Errors
///
/// Returns `Encode` for serialisation failures, `FileWrite` when flushing
/// the staged rows fails and `Persist` when the final rename fails.
pub fn encode_all(records: &[Record], path: &Path) -> RosterResult<()> {
    let staging = path.with_extension("tmp");

    let mut writer = csv::Writer::from_path(&staging).map_err(RosterError::Encode)?;
    if records.is_empty() {
        // Serialising zero records emits nothing, but an empty dataset
        // must still round-trip as a header-only resource.
        writer.write_record(HEADERS).map_err(RosterError::Encode)?;
    }
    for record in records {
        writer.serialize(record).map_err(RosterError::Encode)?;
    }
    writer.flush().map_err(RosterError::FileWrite)?;
    drop(writer);

    fs::rename(&staging, path).map_err(RosterError::Persist)
}

/// Creates a header-only resource at `path`.
///
/// Bootstrap helper for the surfaces that own file existence — the core
/// itself requires every backing resource to already exist.
pub fn write_header_only(path: &Path) -> RosterResult<()> {
    encode_all(&[], path)
}
