//! Set-difference reconciliation of a dataset against a target identity
//! list, used by the bulk-update flow.

use std::collections::HashSet;
use std::fmt;

use roster_types::Identity;

use crate::record::Record;

/// Identities removed from and added to a dataset by one reconciliation.
///
/// The `Display` form is the feedback string shown on the bulk-update
/// surface — the only user-visible feedback the core produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub removed: Vec<Identity>,
    pub added: Vec<Identity>,
}

impl ReconcileOutcome {
    /// Whether the reconciliation changed nothing.
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Removed: [{}]\nAdded: [{}]",
            join(&self.removed),
            join(&self.added)
        )
    }
}

fn join(identities: &[Identity]) -> String {
    identities
        .iter()
        .map(Identity::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a user-supplied, comma-delimited identity list.
///
/// Spaces are stripped wholesale before splitting. Every element must be
/// a well-formed identity or the whole list is rejected (`None`), which
/// makes the calling operation a no-op. Duplicates collapse to their
/// first occurrence.
pub fn parse_identity_list(raw: &str) -> Option<Vec<Identity>> {
    let cleaned = raw.replace(' ', "");
    let mut seen = HashSet::new();
    let mut identities = Vec::new();
    for element in cleaned.split(',') {
        let identity = Identity::parse(element).ok()?;
        if seen.insert(identity.clone()) {
            identities.push(identity);
        }
    }
    Some(identities)
}

/// Set differences between the existing rows and the target list:
/// removed = `E \ T` in existing read order, added = `T \ E` in target
/// order. Deterministic, but callers must not assume any sorted order.
pub(crate) fn diff(existing: &[Record], target: &[Identity]) -> (Vec<Identity>, Vec<Identity>) {
    let target_set: HashSet<&Identity> = target.iter().collect();
    let existing_set: HashSet<&Identity> = existing.iter().map(|r| &r.identity).collect();

    let removed = existing
        .iter()
        .map(|r| r.identity.clone())
        .filter(|identity| !target_set.contains(identity))
        .collect();
    let added = target
        .iter()
        .filter(|identity| !existing_set.contains(*identity))
        .cloned()
        .collect();

    (removed, added)
}
