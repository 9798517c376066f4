//! Input resolution for command arguments.
//!
//! Values are resolved once at the CLI boundary and handed to the
//! operations as plain strings: an explicit argument wins, then the
//! environment, then an interactive stdin prompt.

use crate::error::{OffshootError, Result};
use std::io::{self, BufRead, Write};

/// Environment variable consulted for a default ticket identifier.
pub const TICKET_ENV: &str = "OFFSHOOT_TICKET";

/// Environment variable consulted for a default description.
pub const DESCRIPTION_ENV: &str = "OFFSHOOT_DESCRIPTION";

/// Resolve one input value: explicit argument, else environment variable
/// (when one applies), else an interactive prompt. A blank final value is a
/// user error; no external calls are made on that path.
pub fn resolve_input(explicit: Option<String>, env_var: Option<&str>, label: &str) -> Result<String> {
    if let Some(value) = explicit {
        return Ok(value);
    }

    if let Some(var) = env_var
        && let Ok(value) = std::env::var(var)
        && !value.trim().is_empty()
    {
        return Ok(value.trim().to_string());
    }

    prompt(label)
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout()
        .flush()
        .map_err(|e| OffshootError::UserError(format!("failed to prompt for {label}: {e}")))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| OffshootError::UserError(format!("failed to read {label}: {e}")))?;

    let value = line.trim();
    if value.is_empty() {
        Err(OffshootError::UserError(format!(
            "no value provided for {label}"
        )))
    } else {
        Ok(value.to_string())
    }
}
