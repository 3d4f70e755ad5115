#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field names retained in an [`Entry`]; every other field name found in a
/// record is accepted syntactically but dropped.
pub(crate) const TRACKED_FIELDS: [&str; 5] = ["author", "title", "year", "journal", "file"];

/// One parsed entry of a `.bib` file, reduced to the fields relevant
/// for searching a personal bibliography.
///
/// Fields missing from the source record are the empty string, or `None`
/// for `year`. An `Entry` is plain owned data; it keeps no reference to
/// the text it was parsed from and is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    /// raw author list, e.g. “Last, F. and Last2, F2.” (not split on “and”)
    pub author: String,
    /// title, with one outer layer of braces removed
    pub title: String,
    /// publication year, `None` if absent or not an integer
    pub year: Option<i32>,
    /// journal name
    pub journal: String,
    /// attachment reference, e.g. a local path to a PDF
    pub file: String,
}

impl Entry {
    /// Generate a new, empty instance of Entry. Can also be called through
    /// the `Default` implementation.
    pub fn new() -> Entry {
        Entry {
            author: String::new(),
            title: String::new(),
            year: None,
            journal: String::new(),
            file: String::new(),
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

/// The value half of one parsed `name = value` field line.
///
/// This is the transient contract between the field-line parser and the
/// entry parser: recognized string fields carry their text and a numeric
/// `year` carries the integer. Unrecognized field names, as well as
/// non-numeric years, collapse to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Year(i32),
    None,
}

impl FieldValue {
    /// The textual content, or an empty string for `Year`/`None`.
    pub(crate) fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            _ => String::new(),
        }
    }

    /// The numeric year, if this value carries one.
    pub(crate) fn year(&self) -> Option<i32> {
        match self {
            FieldValue::Year(y) => Some(*y),
            _ => None,
        }
    }
}
