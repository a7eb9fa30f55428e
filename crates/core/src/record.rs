//! The stored record shape and its column addressing.

use roster_types::{Area, Enrollment, Identity};
use serde::{Deserialize, Serialize};

/// Placeholder stored for optional fields left empty at creation and for
/// every non-identity cell of reconciliation-created rows.
pub const PLACEHOLDER: &str = "-";

/// Header row of every backing resource, in display order. The category
/// is implicit in which file a row lives in and is not a stored column.
pub const HEADERS: [&str; 6] = [
    "Personnummer",
    "Förnamn",
    "Efternamn",
    "Område",
    "Inskriven",
    "Anteckning",
];

/// One stored row of a dataset.
///
/// Only the identity is a validated type; the remaining cells are plain
/// text because reconciliation writes `"-"` placeholders into columns
/// that otherwise carry enumerated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Personnummer")]
    pub identity: Identity,
    #[serde(rename = "Förnamn")]
    pub first_name: String,
    #[serde(rename = "Efternamn")]
    pub last_name: String,
    #[serde(rename = "Område")]
    pub area: String,
    #[serde(rename = "Inskriven")]
    pub enrolled: String,
    #[serde(rename = "Anteckning")]
    pub note: String,
}

impl Record {
    /// Builds the stored record for a validated create-flow draft. Empty
    /// optional text becomes [`PLACEHOLDER`]; creation never rejects on
    /// emptiness.
    pub(crate) fn from_draft(identity: Identity, draft: Draft) -> Self {
        Self {
            identity,
            first_name: or_placeholder(&draft.first_name),
            last_name: or_placeholder(&draft.last_name),
            area: draft.area.as_str().to_owned(),
            enrolled: draft.enrolled.as_str().to_owned(),
            note: or_placeholder(&draft.note),
        }
    }

    /// A reconciliation placeholder: a known identity with every other
    /// field set to [`PLACEHOLDER`].
    pub fn placeholder(identity: Identity) -> Self {
        Self {
            identity,
            first_name: PLACEHOLDER.to_owned(),
            last_name: PLACEHOLDER.to_owned(),
            area: PLACEHOLDER.to_owned(),
            enrolled: PLACEHOLDER.to_owned(),
            note: PLACEHOLDER.to_owned(),
        }
    }

    /// Label used by identity-listing surfaces: `"<identity> <first> <last>"`.
    /// The identity is recoverable as the first eleven characters.
    pub fn picker_label(&self) -> String {
        format!("{} {} {}", self.identity, self.first_name, self.last_name)
    }
}

/// Create-flow input: raw field values as a surface collects them.
///
/// Area and enrollment arrive as combo selections and are therefore
/// already members of their vocabularies; the chosen category is resolved
/// by the surface to the store's dataset parameter before this draft is
/// submitted.
#[derive(Debug, Clone)]
pub struct Draft {
    pub identity: String,
    pub first_name: String,
    pub last_name: String,
    pub area: Area,
    pub enrolled: Enrollment,
    pub note: String,
}

/// A stored column, addressed in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Identity,
    FirstName,
    LastName,
    Area,
    Enrolled,
    Note,
}

impl Column {
    /// Resolves a grid column position to its column, `None` when out of
    /// range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Column::Identity),
            1 => Some(Column::FirstName),
            2 => Some(Column::LastName),
            3 => Some(Column::Area),
            4 => Some(Column::Enrolled),
            5 => Some(Column::Note),
            _ => None,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Identity => HEADERS[0],
            Column::FirstName => HEADERS[1],
            Column::LastName => HEADERS[2],
            Column::Area => HEADERS[3],
            Column::Enrolled => HEADERS[4],
            Column::Note => HEADERS[5],
        }
    }
}

/// Empty optional text is stored as the placeholder.
pub(crate) fn or_placeholder(raw: &str) -> String {
    if raw.is_empty() {
        PLACEHOLDER.to_owned()
    } else {
        raw.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_coerces_empty_optional_text() {
        let identity = Identity::parse("010101-1234").expect("valid identity");
        let record = Record::from_draft(
            identity,
            Draft {
                identity: "010101-1234".into(),
                first_name: String::new(),
                last_name: "Lind".into(),
                area: Area::Norrmalm,
                enrolled: Enrollment::No,
                note: String::new(),
            },
        );
        assert_eq!(record.first_name, "-");
        assert_eq!(record.last_name, "Lind");
        assert_eq!(record.area, "Norrmalm");
        assert_eq!(record.enrolled, "Nej");
        assert_eq!(record.note, "-");
    }

    #[test]
    fn picker_label_leads_with_the_identity() {
        let identity = Identity::parse("020202-2345").expect("valid identity");
        let record = Record::placeholder(identity);
        let label = record.picker_label();
        assert_eq!(label, "020202-2345 - -");
        assert_eq!(&label[0..11], "020202-2345");
    }

    #[test]
    fn column_index_covers_the_display_order() {
        assert_eq!(Column::from_index(0), Some(Column::Identity));
        assert_eq!(Column::from_index(5), Some(Column::Note));
        assert_eq!(Column::from_index(6), None);
        assert_eq!(Column::Area.header(), "Område");
    }
}
