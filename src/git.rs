//! External command execution for offshoot.
//!
//! All subprocess invocations go through the [`CommandRunner`] port so that
//! tests can substitute a fake without spawning real processes. The
//! [`SystemRunner`] implementation blocks until the subprocess exits and
//! captures stdout/stderr; a non-zero exit becomes a single generic
//! command-failure error carrying whatever the tool printed.

use crate::error::{OffshootError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Captured output of a successful command execution.
#[derive(Debug, Clone)]
pub struct CmdOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl CmdOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Port for running external commands.
///
/// The version-control tool and the ticket-tracking tool are both reached
/// through this trait. Implementations return the captured output on exit
/// code 0 and a [`OffshootError::CommandError`] otherwise.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CmdOutput>;
}

/// Runs commands as real subprocesses in a fixed working directory.
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    pub fn new<P: AsRef<Path>>(cwd: P) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    /// Runner for the process working directory, as used by the CLI.
    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CmdOutput> {
        let output = Command::new(program)
            .current_dir(&self.cwd)
            .args(args)
            .output()
            .map_err(|e| {
                OffshootError::CommandError(format!(
                    "failed to execute {} {}: {}",
                    program,
                    args.first().unwrap_or(&""),
                    e
                ))
            })?;

        let cmd_output = CmdOutput::from_output(&output);

        if output.status.success() {
            Ok(cmd_output)
        } else {
            let exit_code = output.status.code().unwrap_or(-1);
            let error_msg = if cmd_output.stderr.is_empty() {
                cmd_output.stdout.clone()
            } else {
                cmd_output.stderr.clone()
            };

            Err(OffshootError::CommandError(format!(
                "{} {} failed (exit code {}): {}",
                program,
                args.first().unwrap_or(&""),
                exit_code,
                error_msg
            )))
        }
    }
}

/// Name of the currently checked-out branch (abbreviated ref).
///
/// In detached HEAD state git reports the literal string "HEAD"; callers
/// that pass the result on as a branch name will simply find no matches.
pub fn current_branch(runner: &dyn CommandRunner) -> Result<String> {
    let output = runner.run("git", &["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(output.stdout)
}

/// Raw `<upstream> <refname>` listing for every branch git knows about.
///
/// One line per ref; the upstream field is empty when no tracking is
/// configured. Parsing and filtering happen in [`crate::refs`].
pub fn list_tracking_refs(runner: &dyn CommandRunner) -> Result<String> {
    let output = runner.run(
        "git",
        &["branch", "--list", "--all", "--format=%(upstream) %(refname)"],
    )?;
    Ok(output.stdout)
}

/// Check out an existing branch.
pub fn checkout(runner: &dyn CommandRunner, branch: &str) -> Result<()> {
    runner.run("git", &["checkout", branch])?;
    Ok(())
}

/// Create and check out a new branch tracking `upstream` explicitly.
pub fn create_tracking_branch(
    runner: &dyn CommandRunner,
    branch: &str,
    upstream: &str,
) -> Result<()> {
    runner.run("git", &["checkout", "-b", branch, "--track", upstream])?;
    Ok(())
}

/// Rename a branch.
pub fn rename_branch(runner: &dyn CommandRunner, old: &str, new: &str) -> Result<()> {
    runner.run("git", &["branch", "-m", old, new])?;
    Ok(())
}

/// Point the *current* branch's upstream at `upstream`.
pub fn set_upstream(runner: &dyn CommandRunner, upstream: &str) -> Result<()> {
    runner.run("git", &["branch", "--set-upstream-to", upstream])?;
    Ok(())
}
