use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a course entry (e.g., `CSCI200`).
///
/// Ids are compared byte-for-byte: no trimming, no case folding. Ordering is
/// the ordinal ordering of the underlying string, which is what listing sorts
/// by.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        CourseId(value.to_string())
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        CourseId(value)
    }
}

impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
