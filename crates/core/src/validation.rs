//! Per-column acceptance rules applied before any mutation is committed.
//!
//! An edit that fails validation is discarded silently: prior state is
//! kept and no notification fires. Creation is the one asymmetric path —
//! there, empty optional text is coerced to `"-"` by the store instead of
//! being rejected here.

use std::str::FromStr;

use roster_types::{Area, Enrollment, Identity};

use crate::record::Column;

/// Returns whether `raw` is an acceptable stored value for `column`.
///
/// - identity: anchored `DDDDDD-DDDD` match, nothing more or less;
/// - area / enrolled: exact membership in their vocabularies;
/// - first name, last name, note: any non-empty text (no trimming).
pub fn is_valid(column: Column, raw: &str) -> bool {
    match column {
        Column::Identity => Identity::is_valid(raw),
        Column::Area => Area::from_str(raw).is_ok(),
        Column::Enrolled => Enrollment::from_str(raw).is_ok(),
        Column::FirstName | Column::LastName | Column::Note => !raw.is_empty(),
    }
}
