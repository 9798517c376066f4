//! Shared test helpers: scratch git repositories and a scripted fake runner.

use crate::error::{OffshootError, Result};
use crate::git::{CmdOutput, CommandRunner};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a scratch repository with a deterministic `master` default branch
/// and one commit, so the lifecycle commands have a trunk to check out.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Pin the default branch name regardless of the host git configuration.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/master"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

fn git(path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(path)
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// A scripted response for one [`FakeRunner`] invocation.
pub(crate) enum FakeResponse {
    Ok(String),
    Fail(String),
}

/// Command runner that replays scripted responses and records every call,
/// so tests can assert on the exact external-call sequence without
/// spawning subprocesses. Unscripted calls succeed with empty output.
pub(crate) struct FakeRunner {
    responses: RefCell<VecDeque<FakeResponse>>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Queue a successful response with the given stdout.
    pub(crate) fn ok(self, stdout: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(FakeResponse::Ok(stdout.to_string()));
        self
    }

    /// Queue a failing response.
    pub(crate) fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(FakeResponse::Fail(message.to_string()));
        self
    }

    /// Every call made so far, one `program arg arg...` string per call.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CmdOutput> {
        self.calls
            .borrow_mut()
            .push(format!("{} {}", program, args.join(" ")));

        match self.responses.borrow_mut().pop_front() {
            Some(FakeResponse::Ok(stdout)) => Ok(CmdOutput {
                stdout,
                stderr: String::new(),
            }),
            Some(FakeResponse::Fail(message)) => Err(OffshootError::CommandError(message)),
            None => Ok(CmdOutput {
                stdout: String::new(),
                stderr: String::new(),
            }),
        }
    }
}
