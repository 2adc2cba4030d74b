//! Course records as held by the catalog.
//!
//! Use `CourseCatalog` for loading and id lookup; these structs are what it
//! hands back to callers.

use crate::catalog::identity::CourseId;
use crate::course_file::CourseLine;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One course entry with its prerequisite ids in file order.
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub prerequisites: Vec<CourseId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Id and title pair returned by catalog listings.
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
}

impl Course {
    /// Build a record from a tokenized line.
    ///
    /// Missing fields become empty strings; structural checks belong to the
    /// validator.
    pub fn from_line(line: &CourseLine) -> Self {
        Course {
            id: CourseId::from(line.id().unwrap_or_default()),
            title: line.title().unwrap_or_default().to_string(),
            prerequisites: line.prerequisites().map(CourseId::from).collect(),
        }
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.id, self.title)?;
        write!(f, "Prerequisites: ")?;
        if self.prerequisites.is_empty() {
            return write!(f, "None.");
        }
        let joined = self
            .prerequisites
            .iter()
            .map(CourseId::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}")
    }
}

impl fmt::Display for CourseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}
