//! Line tokenizer for the comma-delimited course file.
//!
//! Both the validator and the catalog loader read the file through this
//! module so they agree on what a "line" and a "field" are. Fields are never
//! trimmed; only the line terminator and a leading byte-order mark are
//! removed.

use crate::error::FileOpenError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const FIELD_DELIMITER: char = ',';
const UTF8_BOM: &str = "\u{feff}";

/// One physical line of the course file, split into raw fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseLine {
    /// 1-based line number within the file.
    pub number: usize,
    pub fields: Vec<String>,
}

impl CourseLine {
    pub fn id(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get(1).map(String::as_str)
    }

    /// Prerequisite fields in file order with empty entries dropped.
    pub fn prerequisites(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .skip(2)
            .map(String::as_str)
            .filter(|field| !field.is_empty())
    }
}

/// Split a line on every delimiter, keeping empty fields.
///
/// An empty line yields no fields at all, so it fails the two-field rule.
pub fn split_fields(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(FIELD_DELIMITER).map(str::to_string).collect()
}

/// Read every line from `reader`.
///
/// Lines must be valid UTF-8; anything else is an `InvalidData` error so ids
/// are never altered before comparison.
pub fn read_course_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<CourseLine>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let number = lines.len() + 1;
        let raw = std::str::from_utf8(&buf).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {number} is not valid UTF-8: {err}"),
            )
        })?;
        let mut text = strip_line_terminator(raw);
        if lines.is_empty() {
            text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
        }
        lines.push(CourseLine {
            number,
            fields: split_fields(text),
        });
    }
    Ok(lines)
}

/// Open `path` and tokenize it, mapping any I/O failure to `FileOpenError`.
pub fn read_course_file(path: &Path) -> Result<Vec<CourseLine>, FileOpenError> {
    let to_error = |source| FileOpenError {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    read_course_lines(BufReader::new(file)).map_err(to_error)
}

fn strip_line_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}
