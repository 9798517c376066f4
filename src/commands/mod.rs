//! Command implementations for offshoot.
//!
//! The dispatcher routes CLI commands to their implementations. Each
//! command resolves its inputs at this boundary and drives the external
//! tools through the [`crate::git::CommandRunner`] port.

mod descendants;
mod feature;
mod finish;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Feature(args) => feature::cmd_feature(args),
        Command::Finish(args) => finish::cmd_finish(args),
        Command::Descendants(args) => descendants::cmd_descendants(args),
    }
}
