use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn planner_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_course-planner"))
}

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_course_file(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn planner_command(args: &[&str], file: &Path) -> Command {
    let mut cmd = Command::new(planner_binary());
    cmd.env_remove("COURSE_PLANNER_FILE")
        .env_remove("COURSE_PLANNER_LOG")
        .arg(args[0])
        .arg(file)
        .args(&args[1..]);
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
