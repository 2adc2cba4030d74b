//! Shared library for the course planner.
//!
//! The crate reads a comma-delimited course file (`id,title,prereq,...`),
//! validates it, and loads it into a `CourseCatalog` that answers sorted
//! listing and exact id lookup. Validation and loading are separate passes
//! over the file: callers validate a path first and only then load it.
//! `PlannerSession` packages that ordering for the interactive shell.
//!
//! Prerequisite cycles, including a course listing itself, are not detected.

pub mod catalog;
pub mod course_file;
pub mod error;
pub mod logging;
pub mod session;
pub mod shell;
pub mod validation;

pub use catalog::{Course, CourseCatalog, CourseId, CourseSummary};
pub use course_file::{CourseLine, read_course_file, read_course_lines, split_fields};
pub use error::{FileOpenError, SessionError, ValidationError};
pub use session::PlannerSession;
pub use shell::{ShellOptions, run_shell};
pub use validation::{ValidationReport, validate_course_file, validate_course_lines};

use std::path::Path;

/// Validate `path` and, when it passes, load it.
///
/// The file is read twice, once per pass; both passes see the same bytes only
/// if nothing rewrites the file in between.
pub fn load_validated(path: &Path) -> Result<CourseCatalog, ValidationError> {
    validate_course_file(path)?;
    Ok(CourseCatalog::load(path)?)
}
