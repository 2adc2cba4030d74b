//! Course catalog.
//!
//! `CourseCatalog` owns the records loaded from one course file and answers
//! sorted listing and exact id lookup. `Course`/`CourseSummary` are the views
//! handed back to callers; `CourseId` is the shared key type.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::CourseId;
pub use index::CourseCatalog;
pub use model::{Course, CourseSummary};
