//! Git command runner for chainup.
//!
//! Provides a thin wrapper around the `git` executable with captured output
//! and structured error handling. All git invocations go through this module.

use crate::error::{ChainError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines, skipping blank ones.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect()
    }

    /// Stdout followed by stderr, the way a terminal would have shown them.
    pub fn combined(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (true, _) => self.stderr.clone(),
            (false, true) => self.stdout.clone(),
            (false, false) => format!("{}\n{}", self.stdout, self.stderr),
        }
    }
}

/// Run a git command in `cwd`.
///
/// `title` describes the step in human terms ("failed to fetch all branches")
/// and becomes the headline of the error when the command fails.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On exit code 0
/// * `Err(ChainError::Git)` - On spawn failure or non-zero exit, carrying the
///   command line and its combined output
pub fn run_git<P: AsRef<Path>>(cwd: P, title: &str, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    let command = format!("git {}", args.join(" "));
    debug!(cwd = %cwd.display(), %command, "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| ChainError::Git {
            title: title.to_string(),
            command: command.clone(),
            output: format!("failed to execute git: {} (is git installed?)", e),
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        debug!(
            %command,
            exit_code = output.status.code().unwrap_or(-1),
            "git command failed"
        );
        Err(ChainError::Git {
            title: title.to_string(),
            command,
            output: git_output.combined(),
        })
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Works from any directory inside the working tree.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(ChainError::Usage)` - If `cwd` is not inside a git repository
pub fn repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    run_git(
        cwd,
        "failed to locate repository root",
        &["rev-parse", "--show-toplevel"],
    )
    .map(|output| PathBuf::from(output.stdout))
    .map_err(|_| {
        ChainError::Usage(format!(
            "'{}' is not inside a git repository. Run chainup from within a git repository or pass -C <path>.",
            cwd.display()
        ))
    })
}
