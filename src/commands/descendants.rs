//! Implementation of the `offshoot descendants` command.
//!
//! Lists the branches tracking a branch as their upstream, optionally
//! walking the tracking graph transitively.

use crate::cli::DescendantsArgs;
use crate::error::Result;
use crate::git::{self, CommandRunner, SystemRunner};
use crate::refs::parse_tracking_refs;
use crate::tracking::resolve;

/// Execute the `offshoot descendants` command.
///
/// Zero matches is not a failure: nothing is printed and the command
/// exits successfully.
pub fn cmd_descendants(args: DescendantsArgs) -> Result<()> {
    let runner = SystemRunner::current_dir();
    let lines = descendant_lines(&runner, args.branch, args.recursive, args.show_upstream)?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Resolve descendants of `branch` (default: the current branch) into
/// printable lines, one per discovered tracking edge.
fn descendant_lines(
    runner: &dyn CommandRunner,
    branch: Option<String>,
    recursive: bool,
    show_upstream: bool,
) -> Result<Vec<String>> {
    let root = match branch {
        Some(branch) => branch,
        None => git::current_branch(runner)?,
    };

    let raw = git::list_tracking_refs(runner)?;
    let edges = parse_tracking_refs(&raw);

    Ok(resolve(&root, &edges, recursive)
        .into_iter()
        .map(|edge| {
            if show_upstream {
                format!("{} {}", edge.upstream, edge.branch)
            } else {
                edge.branch
            }
        })
        .collect())
}
