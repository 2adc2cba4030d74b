//! Per-run planner state owned by the shell.
//!
//! The session remembers which file passed validation and holds the catalog
//! loaded from it, so the shell never loads a file it has not validated.

use crate::catalog::CourseCatalog;
use crate::error::{SessionError, ValidationError};
use crate::validation::{ValidationReport, validate_course_file};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
/// Validated course file path plus the catalog loaded from it, if any.
pub struct PlannerSession {
    path: Option<PathBuf>,
    catalog: Option<CourseCatalog>,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `path` and make it the session's course file.
    ///
    /// A failed validation leaves the session untouched. A successful one
    /// discards any catalog loaded from the previous file.
    pub fn select_file(&mut self, path: &Path) -> Result<ValidationReport, ValidationError> {
        let report = validate_course_file(path)?;
        self.path = Some(path.to_path_buf());
        self.catalog = None;
        Ok(report)
    }

    /// Load (or reload) the catalog from the selected file.
    pub fn load(&mut self) -> Result<&CourseCatalog, SessionError> {
        let path = self.path.as_deref().ok_or(SessionError::NoFileSelected)?;
        let catalog = CourseCatalog::load(path)?;
        Ok(self.catalog.insert(catalog))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn catalog(&self) -> Option<&CourseCatalog> {
        self.catalog.as_ref()
    }
}
