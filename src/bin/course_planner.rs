//! Command-line entry point for the course planner.
//!
//! Without a subcommand it runs the interactive advising menu on
//! stdin/stdout. The `validate`, `list` and `show` subcommands answer one
//! query and exit, which keeps the planner usable from scripts.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use course_planner::logging::{LogConfig, LogFormat, init_logging};
use course_planner::{ShellOptions, load_validated, run_shell, validate_course_file};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

#[derive(Debug, Parser)]
#[command(name = "course-planner", version, about = "Advising assistance program")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    /// Course file to open before the first prompt of the interactive menu.
    #[arg(long, env = "COURSE_PLANNER_FILE", value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a course file's format and prerequisite references.
    Validate { file: PathBuf },
    /// Print every course, sorted by course number.
    List {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print one course and its prerequisites.
    Show {
        file: PathBuf,
        /// Course number; matched after upper-casing.
        id: String,
        #[arg(long)]
        json: bool,
    },
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet)
        .with_format(cli.log_format)
        .with_ansi(io::stderr().is_terminal());
    init_logging(&log_config);

    match cli.command {
        None => interactive(cli.file),
        Some(Command::Validate { file }) => validate(&file),
        Some(Command::List { file, json }) => list(&file, json),
        Some(Command::Show { file, id, json }) => show(&file, &id, json),
    }
}

fn interactive(initial_file: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let options = ShellOptions { initial_file };
    run_shell(stdin.lock(), &mut stdout, &options).context("interactive session failed")
}

fn validate(file: &Path) -> Result<()> {
    let report = validate_course_file(file)
        .with_context(|| format!("validating {}", file.display()))?;
    println!(
        "{}: ok ({} course(s), {} line(s), {} distinct prerequisite(s))",
        file.display(),
        report.courses,
        report.lines,
        report.referenced_prerequisites
    );
    Ok(())
}

fn list(file: &Path, json: bool) -> Result<()> {
    let catalog = load_validated(file).with_context(|| format!("loading {}", file.display()))?;
    let summaries = catalog.list();
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &summaries)
            .context("failed to serialize course list")?;
        writeln!(stdout)?;
    } else {
        for summary in &summaries {
            writeln!(stdout, "{summary}")?;
        }
    }
    Ok(())
}

fn show(file: &Path, id: &str, json: bool) -> Result<()> {
    let catalog = load_validated(file).with_context(|| format!("loading {}", file.display()))?;
    let query = id.trim().to_ascii_uppercase();
    let Some(course) = catalog.lookup(&query) else {
        println!("Course {query} not found.");
        std::process::exit(1);
    };
    if json {
        let rendered =
            serde_json::to_string_pretty(course).context("failed to serialize course")?;
        println!("{rendered}");
    } else {
        println!("{course}");
    }
    Ok(())
}
