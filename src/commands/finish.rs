//! Implementation of the `offshoot finish` command.
//!
//! Retires a `feature/...` branch: the current branch's upstream moves to
//! the `old` sentinel, the branch is renamed into `finished/...`, and
//! master is checked out.

use crate::cli::FinishArgs;
use crate::error::Result;
use crate::git::{self, CommandRunner, SystemRunner};
use crate::naming::finished_branch_name;

/// Sentinel upstream a finished branch is parked on. Not validated to
/// exist; if the repository has no such branch, git reports the failure.
const OLD_UPSTREAM: &str = "old";

/// Execute the `offshoot finish` command.
pub fn cmd_finish(args: FinishArgs) -> Result<()> {
    let runner = SystemRunner::current_dir();
    finish_branch(&runner, args.name)
}

/// Finish `name`, defaulting to the currently checked-out branch.
///
/// Validation happens before any mutation: a name outside the `feature/`
/// namespace fails without a single external call. The upstream move
/// applies to whatever branch is currently checked out, which can differ
/// from an explicitly passed `name`.
fn finish_branch(runner: &dyn CommandRunner, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => git::current_branch(runner)?,
    };

    let finished = finished_branch_name(&name)?;

    git::set_upstream(runner, OLD_UPSTREAM)?;
    git::rename_branch(runner, &name, &finished)?;
    git::checkout(runner, "master")?;

    println!("Finished {name} as {finished}");
    Ok(())
}
