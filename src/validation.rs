//! Structural and referential checks for a course file.
//!
//! The structural pass stops at the first line with fewer than two fields.
//! Only when every line passes does the referential pass run, and it reports
//! every dangling prerequisite at once so the user can fix the file in one go.

use crate::catalog::CourseId;
use crate::course_file::{CourseLine, read_course_file};
use crate::error::ValidationError;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, warn};

const MIN_FIELDS: usize = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Counts gathered by a successful validation pass.
pub struct ValidationReport {
    pub lines: usize,
    pub courses: usize,
    pub referenced_prerequisites: usize,
}

/// Validate the course file at `path` without building any records.
pub fn validate_course_file(path: &Path) -> Result<ValidationReport, ValidationError> {
    let lines = read_course_file(path)?;
    let report = validate_course_lines(&lines)?;
    debug!(
        path = %path.display(),
        lines = report.lines,
        courses = report.courses,
        prerequisites = report.referenced_prerequisites,
        "course file passed validation"
    );
    Ok(report)
}

/// Run the structural then referential checks over tokenized lines.
pub fn validate_course_lines(lines: &[CourseLine]) -> Result<ValidationReport, ValidationError> {
    for line in lines {
        if line.fields.len() < MIN_FIELDS {
            return Err(ValidationError::MalformedLine {
                line: line.number,
                field_count: line.fields.len(),
            });
        }
    }

    // id -> first line defining it
    let mut known: BTreeMap<&str, usize> = BTreeMap::new();
    let mut referenced: BTreeSet<&str> = BTreeSet::new();
    for line in lines {
        let id = line.fields[0].as_str();
        if let Some(first) = known.get(id) {
            warn!(
                id,
                first_line = *first,
                duplicate_line = line.number,
                "course id defined more than once"
            );
        } else {
            known.insert(id, line.number);
        }
        referenced.extend(line.prerequisites());
    }

    let missing: BTreeSet<CourseId> = referenced
        .iter()
        .filter(|id| !known.contains_key(*id))
        .map(|id| CourseId::from(*id))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::DanglingPrerequisite { missing });
    }

    Ok(ValidationReport {
        lines: lines.len(),
        courses: known.len(),
        referenced_prerequisites: referenced.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course_file::read_course_lines;
    use std::io::Cursor;

    fn validate(input: &str) -> Result<ValidationReport, ValidationError> {
        let lines = read_course_lines(Cursor::new(input.as_bytes().to_vec())).unwrap();
        validate_course_lines(&lines)
    }

    fn missing_ids(err: ValidationError) -> Vec<String> {
        match err {
            ValidationError::DanglingPrerequisite { missing } => {
                missing.into_iter().map(|id| id.0).collect()
            }
            other => panic!("expected dangling prerequisite error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_well_formed_file() {
        let report = validate("CS101,Intro to CS\nCS201,Data Structures,CS101\n").unwrap();
        assert_eq!(
            report,
            ValidationReport {
                lines: 2,
                courses: 2,
                referenced_prerequisites: 1,
            }
        );
    }

    #[test]
    fn prerequisites_may_be_defined_later_in_the_file() {
        assert!(validate("CS201,Data Structures,CS101\nCS101,Intro to CS\n").is_ok());
    }

    #[test]
    fn empty_file_is_valid() {
        assert_eq!(validate("").unwrap(), ValidationReport::default());
    }

    #[test]
    fn single_field_line_is_malformed() {
        let err = validate("CS101").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MalformedLine {
                line: 1,
                field_count: 1
            }
        ));
    }

    #[test]
    fn blank_line_is_malformed() {
        let err = validate("CS101,Intro\n\nCS201,Data,CS101\n").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MalformedLine {
                line: 2,
                field_count: 0
            }
        ));
    }

    #[test]
    fn first_malformed_line_is_reported() {
        let err = validate("CS101,Intro\nCS201\nCS301,Algo,CS101\nCS401\n").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MalformedLine {
                line: 2,
                field_count: 1
            }
        ));
    }

    #[test]
    fn trailing_comma_line_is_structurally_valid() {
        let report = validate("A,\nB,Title,A\n").unwrap();
        assert_eq!(report.courses, 2);
    }

    #[test]
    fn invalid_utf8_file_fails_instead_of_matching_replacement_characters() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("courses.txt");
        std::fs::write(&path, b"\xFF,Course A\nB100,Course B,\xFE\n").unwrap();
        let err = validate_course_file(&path).unwrap_err();
        assert!(matches!(err, ValidationError::FileOpen(_)), "{err:?}");
    }

    #[test]
    fn structural_failure_wins_over_later_dangling_reference() {
        let err = validate("CS201,Data Structures,CS999\nCS101\n").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn reports_every_missing_prerequisite() {
        let err = validate("CS201,Data Structures,CS999\nCS301,Algorithms,CS201,MATH900,CS999\n")
            .unwrap_err();
        assert_eq!(missing_ids(err), vec!["CS999", "MATH900"]);
    }

    #[test]
    fn single_dangling_prerequisite() {
        let err = validate("CS201,Data Structures,CS999").unwrap_err();
        assert_eq!(missing_ids(err), vec!["CS999"]);
    }

    #[test]
    fn comparison_is_exact() {
        let err = validate("CS101,Intro\nCS201,Data,cs101\nCS301,Algo, CS101\n").unwrap_err();
        assert_eq!(missing_ids(err), vec![" CS101", "cs101"]);
    }

    #[test]
    fn empty_prerequisite_fields_are_ignored() {
        assert!(validate("MATH100,Algebra,,").is_ok());
    }

    #[test]
    fn self_reference_is_not_rejected() {
        assert!(validate("CS101,Intro,CS101\n").is_ok());
    }

    #[test]
    fn duplicate_ids_do_not_fail_validation() {
        let report = validate("CS101,Intro\nCS101,Intro again\n").unwrap();
        assert_eq!(report.lines, 2);
        assert_eq!(report.courses, 1);
    }
}
