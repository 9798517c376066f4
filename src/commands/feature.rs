//! Implementation of the `offshoot feature` command.
//!
//! Creates and checks out a feature branch named
//! `feature/<ticket>__<project>__<description>` tracking master.

use crate::cli::FeatureArgs;
use crate::error::Result;
use crate::git::{self, CommandRunner, SystemRunner};
use crate::naming::feature_branch_name;
use crate::prompt::{DESCRIPTION_ENV, TICKET_ENV, resolve_input};

/// Execute the `offshoot feature` command.
///
/// Inputs missing from the command line fall back to the environment and
/// then to interactive prompts, resolved here and passed down as plain
/// values.
pub fn cmd_feature(args: FeatureArgs) -> Result<()> {
    let ticket = resolve_input(args.ticket, Some(TICKET_ENV), "ticket")?;
    let project = resolve_input(args.project, None, "project")?;
    let description = resolve_input(args.description, Some(DESCRIPTION_ENV), "description")?;

    let runner = SystemRunner::current_dir();
    create_feature(&runner, &ticket, &project, &description, args.show_ticket)
}

/// Create the feature branch: check out master, optionally show the ticket,
/// then create and check out the new branch tracking master. The first
/// failing call aborts the rest; no rollback of completed steps.
fn create_feature(
    runner: &dyn CommandRunner,
    ticket: &str,
    project: &str,
    description: &str,
    show_ticket: bool,
) -> Result<()> {
    let branch = feature_branch_name(ticket, project, description);
    println!("Creating {branch}");

    git::checkout(runner, "master")?;

    if show_ticket {
        let output = runner.run("ticket", &["show", ticket])?;
        if !output.stdout.is_empty() {
            println!("{}", output.stdout);
        }
    }

    git::create_tracking_branch(runner, &branch, "master")?;
    println!("Created {branch} tracking master");
    Ok(())
}
