//! Validated field types shared across the roster workspace.
//!
//! Every value that crosses the store boundary travels as text; the types
//! here pin down which texts are acceptable where. [`Identity`] is a
//! validating newtype — a record can only ever hold a well-formed patient
//! number — while [`Area`], [`Enrollment`] and [`Category`] enumerate the
//! fixed vocabularies that raw cell text is checked against.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Errors that can occur when parsing validated roster field types.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The input did not match the `DDDDDD-DDDD` patient-number format.
    #[error("identity must be six digits, a hyphen and four digits")]
    IdentityFormat,
    /// The input is not one of the known care areas.
    #[error("unknown area: {0}")]
    UnknownArea(String),
    /// The input is not a known enrollment marker.
    #[error("unknown enrollment marker: {0}")]
    UnknownEnrollment(String),
    /// The input is not one of the dataset categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

static IDENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}-\d{4}$").expect("identity pattern compiles"));

/// A patient number in the fixed `DDDDDD-DDDD` format.
///
/// This type wraps a `String` and guarantees it matches the anchored
/// pattern exactly — no surrounding whitespace, no alternative lengths.
/// It is the unique key of a record within a dataset and is immutable
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Creates a new `Identity` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::IdentityFormat` if the input does not match
    /// the `DDDDDD-DDDD` pattern exactly.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let raw = input.as_ref();
        if !IDENTITY_PATTERN.is_match(raw) {
            return Err(FieldError::IdentityFormat);
        }
        Ok(Self(raw.to_owned()))
    }

    /// Returns whether `input` would be accepted by [`Identity::parse`].
    pub fn is_valid(input: &str) -> bool {
        IDENTITY_PATTERN.is_match(input)
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Identity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Identity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Identity::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// The fixed set of care areas a record can be assigned to.
///
/// The stored cell is plain text (reconciliation writes `"-"` placeholder
/// rows), so this enum exists for validation and surface combo boxes, not
/// as a record field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Centrum,
    Norrmalm,
    Osterlanggatan,
    Margaretagatan,
}

impl Area {
    /// Every area, in the order surfaces present them.
    pub const ALL: [Area; 4] = [
        Area::Centrum,
        Area::Norrmalm,
        Area::Osterlanggatan,
        Area::Margaretagatan,
    ];

    /// The exact stored spelling of the area.
    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Centrum => "Centrum",
            Area::Norrmalm => "Norrmalm",
            Area::Osterlanggatan => "Österlånggatan 4",
            Area::Margaretagatan => "Margaretagatan 9",
        }
    }
}

impl FromStr for Area {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::ALL
            .into_iter()
            .find(|area| area.as_str() == s)
            .ok_or_else(|| FieldError::UnknownArea(s.to_owned()))
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a patient is currently enrolled. Stored as `Ja`/`Nej`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrollment {
    Yes,
    No,
}

impl Enrollment {
    pub const ALL: [Enrollment; 2] = [Enrollment::Yes, Enrollment::No];

    /// The exact stored spelling of the marker.
    pub fn as_str(&self) -> &'static str {
        match self {
            Enrollment::Yes => "Ja",
            Enrollment::No => "Nej",
        }
    }
}

impl FromStr for Enrollment {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ja" => Ok(Enrollment::Yes),
            "Nej" => Ok(Enrollment::No),
            other => Err(FieldError::UnknownEnrollment(other.to_owned())),
        }
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three patient-record dataset categories.
///
/// A category selects which dataset (and which backing file) a record
/// belongs to; it is never a stored column of the per-category file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Samsa,
    Tes,
    Korttid,
}

impl Category {
    /// Every category, in dataset order.
    pub const ALL: [Category; 3] = [Category::Samsa, Category::Tes, Category::Korttid];

    /// The display tag of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Samsa => "SAMSA",
            Category::Tes => "TES",
            Category::Korttid => "KORTTID",
        }
    }

    /// The backing-file stem of the category (`samsa.csv` etc.).
    pub fn file_stem(&self) -> &'static str {
        match self {
            Category::Samsa => "samsa",
            Category::Tes => "tes",
            Category::Korttid => "korttid",
        }
    }

    /// Positional index of the category within [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Samsa => 0,
            Category::Tes => 1,
            Category::Korttid => 2,
        }
    }
}

impl FromStr for Category {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldError::UnknownCategory(s.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
