//! CLI argument parsing for offshoot.
//!
//! Uses clap derive macros for declarative argument definitions. This
//! module defines the command structure; actual implementations are in the
//! `commands` module.

use clap::{Parser, Subcommand};

/// Offshoot: git branch-naming helpers for feature work.
///
/// Feature branches are named `feature/<ticket>__<project>__<description>`
/// and track `master`. The other subcommands operate on that convention:
/// `finish` retires a branch to the `finished/` namespace and `descendants`
/// lists the branches tracking a given branch as upstream.
#[derive(Parser, Debug)]
#[command(name = "offshoot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for offshoot.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a feature branch tracking master.
    ///
    /// Builds the name `feature/<ticket>__<project>__<description>` with
    /// whitespace in the description collapsed to dashes. Missing arguments
    /// are read from OFFSHOOT_TICKET / OFFSHOOT_DESCRIPTION or prompted for.
    Feature(FeatureArgs),

    /// Retire a feature branch to the finished/ namespace.
    ///
    /// Renames the current (or named) `feature/...` branch to
    /// `finished/...` and checks out master.
    Finish(FinishArgs),

    /// List branches tracking a branch as their upstream.
    ///
    /// Prints one branch per line; with --recursive the full transitive
    /// descendant set, leaves first.
    Descendants(DescendantsArgs),
}

/// Arguments for the `feature` command.
#[derive(Parser, Debug)]
pub struct FeatureArgs {
    /// Ticket identifier (e.g. T-123). Falls back to OFFSHOOT_TICKET, then
    /// an interactive prompt.
    pub ticket: Option<String>,

    /// Project directory name embedded in the branch name.
    pub project: Option<String>,

    /// Short description; whitespace becomes dashes. Falls back to
    /// OFFSHOOT_DESCRIPTION, then an interactive prompt.
    pub description: Option<String>,

    /// Look the ticket up with the external `ticket` tool and print it
    /// before creating the branch.
    #[arg(long)]
    pub show_ticket: bool,
}

/// Arguments for the `finish` command.
#[derive(Parser, Debug)]
pub struct FinishArgs {
    /// Branch to finish. Defaults to the currently checked-out branch.
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the `descendants` command.
#[derive(Parser, Debug)]
pub struct DescendantsArgs {
    /// Branch whose descendants to list. Defaults to the currently
    /// checked-out branch.
    #[arg(long)]
    pub branch: Option<String>,

    /// Walk the tracking graph transitively.
    #[arg(long, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// List direct children only (the default).
    #[arg(long)]
    pub no_recursive: bool,

    /// Print `<upstream> <ref>` pairs instead of bare branch names.
    #[arg(long, overrides_with = "no_show_upstream")]
    pub show_upstream: bool,

    /// Print bare branch names (the default).
    #[arg(long)]
    pub no_show_upstream: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
