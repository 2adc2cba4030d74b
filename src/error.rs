//! Error types for course file validation and catalog loading.
//!
//! Lookup misses are not errors: `CourseCatalog::lookup` returns `None` and
//! the caller renders "not found".

use crate::catalog::CourseId;
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

/// The course file could not be opened or read.
#[derive(Debug, Error)]
#[error("could not open input file {}: {source}", .path.display())]
pub struct FileOpenError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Reasons a course file fails validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    FileOpen(#[from] FileOpenError),

    /// A line carries fewer than the two required fields (id, title).
    #[error(
        "improper file format: line {line} has {field_count} field(s), expected at least 2 (course number and title)"
    )]
    MalformedLine { line: usize, field_count: usize },

    /// One or more prerequisites name a course that the file never defines.
    #[error(
        "improper file format: prerequisite(s) without a corresponding course in the file: {}",
        join_ids(.missing)
    )]
    DanglingPrerequisite { missing: BTreeSet<CourseId> },
}

/// Errors raised by `PlannerSession` when the shell skips a step.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no course file has been validated yet")]
    NoFileSelected,

    #[error(transparent)]
    FileOpen(#[from] FileOpenError),
}

fn join_ids(ids: &BTreeSet<CourseId>) -> String {
    ids.iter()
        .map(CourseId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
