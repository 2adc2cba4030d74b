//! Interactive advising menu.
//!
//! The shell is a thin prompt loop over `PlannerSession`: it asks for a course
//! file until one validates, then serves the load/list/show menu. It runs over
//! any reader/writer pair so tests can drive it with in-memory buffers.

use crate::session::PlannerSession;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const BANNER_WIDTH: usize = 31;
const EXIT_KEYWORD: &str = "exit";

#[derive(Clone, Debug, Default)]
pub struct ShellOptions {
    /// Course file tried before the first prompt.
    pub initial_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuChoice {
    Load,
    List,
    Show,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Load),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Show),
            "9" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Run the interactive session until the user exits or input ends.
pub fn run_shell<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    options: &ShellOptions,
) -> io::Result<()> {
    let stars = "*".repeat(BANNER_WIDTH);
    writeln!(output, "{stars}")?;
    writeln!(output, "* Advising Assistance Program *")?;
    writeln!(output, "{stars}")?;
    writeln!(output)?;

    let mut session = PlannerSession::new();
    if !select_course_file(&mut input, output, &mut session, options)? {
        writeln!(output, "Good bye.")?;
        return Ok(());
    }

    writeln!(output)?;
    writeln!(output, "Welcome to the course planner.")?;
    loop {
        write_menu(output)?;
        let Some(choice) = prompt(&mut input, output, "What would you like to do? ")? else {
            break;
        };
        let choice = choice.trim();
        match MenuChoice::parse(choice) {
            Some(MenuChoice::Load) => load_catalog(output, &mut session)?,
            Some(MenuChoice::List) => print_course_list(output, &session)?,
            Some(MenuChoice::Show) => show_course(&mut input, output, &session)?,
            Some(MenuChoice::Exit) => break,
            None => writeln!(output, "{choice} is not a valid option.")?,
        }
    }
    writeln!(output, "Thank you for using the course planner!")?;
    Ok(())
}

/// Returns false when the user asked to exit (or input ended) before a file
/// passed validation.
fn select_course_file<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    session: &mut PlannerSession,
    options: &ShellOptions,
) -> io::Result<bool> {
    if let Some(path) = &options.initial_file {
        if try_select(output, session, path)? {
            return Ok(true);
        }
    }

    loop {
        let Some(answer) = prompt(
            input,
            output,
            "Please enter the file name that contains the course data (or type 'exit' to exit): ",
        )?
        else {
            return Ok(false);
        };
        if answer.eq_ignore_ascii_case(EXIT_KEYWORD) {
            return Ok(false);
        }
        if try_select(output, session, Path::new(&answer))? {
            return Ok(true);
        }
    }
}

fn try_select<W: Write>(
    output: &mut W,
    session: &mut PlannerSession,
    path: &Path,
) -> io::Result<bool> {
    match session.select_file(path) {
        Ok(report) => {
            debug!(path = %path.display(), courses = report.courses, "course file selected");
            Ok(true)
        }
        Err(err) => {
            writeln!(output, "{err}")?;
            writeln!(output)?;
            writeln!(output, "If you wish to exit, enter exit")?;
            writeln!(output)?;
            Ok(false)
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "  1. Load Data Structure.")?;
    writeln!(output, "  2. Print Course List.")?;
    writeln!(output, "  3. Print Course.")?;
    writeln!(output, "  9. Exit")?;
    writeln!(output)
}

fn load_catalog<W: Write>(output: &mut W, session: &mut PlannerSession) -> io::Result<()> {
    match session.load() {
        Ok(catalog) => writeln!(output, "Loaded {} course(s).", catalog.len()),
        Err(err) => writeln!(output, "{err}"),
    }
}

fn print_course_list<W: Write>(output: &mut W, session: &PlannerSession) -> io::Result<()> {
    let Some(catalog) = session.catalog() else {
        return write_not_loaded(output);
    };
    writeln!(output, "Here is a sample schedule: ")?;
    writeln!(output)?;
    for summary in catalog.list() {
        writeln!(output, "{summary}")?;
    }
    Ok(())
}

fn show_course<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    session: &PlannerSession,
) -> io::Result<()> {
    let Some(catalog) = session.catalog() else {
        return write_not_loaded(output);
    };
    let Some(answer) = prompt(input, output, "What course do you want to know about? ")? else {
        return Ok(());
    };
    let query = answer.trim().to_ascii_uppercase();
    writeln!(output)?;
    match catalog.lookup(&query) {
        Some(course) => writeln!(output, "{course}"),
        None => writeln!(output, "Course {query} not found."),
    }
}

fn write_not_loaded<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "Course data has not been loaded yet. Choose option 1 first."
    )
}

/// Print `message` and read one line with its terminator removed.
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}
