use crate::constants::tags;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The schema group a model's artifacts are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaTag(String);

impl SchemaTag {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn common() -> Self {
        Self::new(tags::COMMON)
    }

    pub fn view() -> Self {
        Self::new(tags::VIEW)
    }

    /// Views are read-derived: they get no writable repository/service contracts.
    pub fn is_view(&self) -> bool {
        self.0.eq_ignore_ascii_case(tags::VIEW)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SchemaTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SchemaTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Outcome of classifying one model name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Resolved(SchemaTag),
    /// No rule matched and the catalog has no such table. Terminal for the model.
    Unresolved { lookup_key: String },
}

impl Classification {
    pub fn tag(&self) -> Option<&SchemaTag> {
        match self {
            Classification::Resolved(tag) => Some(tag),
            Classification::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Classification::Resolved(_))
    }
}

/// Title-cases a catalog schema name: the first letter of every alphabetic
/// run is upper-cased, every other letter lower-cased.
///
/// ```
/// use tiergen::schema::title_case;
///
/// assert_eq!(title_case("sales"), "Sales");
/// assert_eq!(title_case("HR_data"), "Hr_Data");
/// ```
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_is_letter = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}
