//! Loaded course catalog plus a derived index keyed by course id.
//!
//! Loading trusts the file: it does not repeat the structural or referential
//! checks performed by `validate_course_file`, so callers validate first.

use crate::catalog::{Course, CourseId, CourseSummary};
use crate::course_file::{CourseLine, read_course_file};
use crate::error::FileOpenError;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;
use tracing::{debug, info};

#[derive(Clone, Debug, Default)]
/// Course records in file order and an id index over them.
pub struct CourseCatalog {
    courses: Vec<Course>,
    by_id: BTreeMap<CourseId, usize>,
}

impl CourseCatalog {
    /// Read the course file at `path` and build a fresh catalog.
    ///
    /// Each call starts from scratch; nothing from a previous catalog is kept.
    pub fn load(path: &Path) -> Result<Self, FileOpenError> {
        let lines = read_course_file(path)?;
        let catalog = Self::from_lines(&lines);
        info!(
            path = %path.display(),
            courses = catalog.len(),
            "loaded course catalog"
        );
        Ok(catalog)
    }

    /// Build a catalog from tokenized lines, one record per line.
    pub fn from_lines(lines: &[CourseLine]) -> Self {
        let mut catalog = Self::default();
        for line in lines {
            catalog.push(Course::from_line(line));
        }
        catalog
    }

    fn push(&mut self, course: Course) {
        let position = self.courses.len();
        // First occurrence wins so lookups agree with a top-down scan.
        match self.by_id.entry(course.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
            Entry::Occupied(_) => {
                debug!(id = %course.id, "duplicate course id; keeping first entry for lookup");
            }
        }
        self.courses.push(course);
    }

    /// Id and title of every course, sorted ascending by id.
    pub fn list(&self) -> Vec<CourseSummary> {
        let mut summaries: Vec<CourseSummary> = self.courses.iter().map(Course::summary).collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        summaries
    }

    /// Exact, case-sensitive lookup by id.
    pub fn lookup(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id).map(|&idx| &self.courses[idx])
    }

    /// Records in the order they appeared in the file.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course_file::read_course_lines;
    use std::io::Cursor;

    fn catalog(input: &str) -> CourseCatalog {
        let lines = read_course_lines(Cursor::new(input.as_bytes().to_vec())).unwrap();
        CourseCatalog::from_lines(&lines)
    }

    fn ids(summaries: &[CourseSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn list_is_sorted_by_id() {
        let catalog = catalog(
            "MATH201,Discrete Mathematics\nCSCI300,Algorithms,CSCI200,MATH201\nCSCI200,Data Structures\nCSCI100,Intro\n",
        );
        assert_eq!(
            ids(&catalog.list()),
            vec!["CSCI100", "CSCI200", "CSCI300", "MATH201"]
        );
        let first_ids: Vec<&str> = catalog.courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(first_ids[0], "MATH201", "records keep file order");
    }

    #[test]
    fn list_uses_byte_order_not_case_folding() {
        let catalog = catalog("b100,Lower\nB100,Upper\nA200,First\n");
        assert_eq!(ids(&catalog.list()), vec!["A200", "B100", "b100"]);
    }

    #[test]
    fn lookup_returns_prerequisites_in_file_order() {
        let catalog = catalog("CSCI100,Intro\nMATH201,Discrete\nCSCI300,Algorithms,MATH201,,CSCI100\n");
        let course = catalog.lookup("CSCI300").unwrap();
        assert_eq!(course.id.as_str(), "CSCI300");
        let prereqs: Vec<&str> = course.prerequisites.iter().map(CourseId::as_str).collect();
        assert_eq!(prereqs, vec!["MATH201", "CSCI100"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = catalog("CS101,Intro to CS\n");
        assert!(catalog.lookup("CS101").is_some());
        assert!(catalog.lookup("cs101").is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_entry() {
        let catalog = catalog("CS101,First\nCS101,Second\n");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("CS101").unwrap().title, "First");
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        let catalog = catalog("");
        assert!(catalog.is_empty());
        assert!(catalog.list().is_empty());
        assert!(catalog.lookup("CS101").is_none());
    }
}
