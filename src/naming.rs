//! Branch-name construction for the feature workflow.
//!
//! Feature branches follow the pattern
//! `feature/<ticket>__<project>__<description>`, with whitespace runs in the
//! description collapsed to single dashes. Finished branches swap the
//! leading `feature` segment for `finished`, taking them out of the
//! namespace the other tools scan.

use crate::error::{OffshootError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Namespace prefix shared by all tracked feature branches.
pub const FEATURE_PREFIX: &str = "feature/";

/// Namespace prefix for branches that left the tracked set.
const FINISHED_PREFIX: &str = "finished/";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Build the conventional feature branch name.
///
/// Example: `feature_branch_name("T1", "proj", "fix the thing")` yields
/// `feature/T1__proj__fix-the-thing`.
pub fn feature_branch_name(ticket: &str, project: &str, description: &str) -> String {
    let normalized = WHITESPACE_RUN.replace_all(description.trim(), "-");
    format!("{FEATURE_PREFIX}{ticket}__{project}__{normalized}")
}

/// Name a feature branch moves to when finished.
///
/// Fails if `name` is not under the feature namespace; no mutation should
/// be attempted in that case.
pub fn finished_branch_name(name: &str) -> Result<String> {
    let rest = name.strip_prefix(FEATURE_PREFIX).ok_or_else(|| {
        OffshootError::UserError(format!(
            "branch '{}' is not a feature branch (expected '{}...')",
            name, FEATURE_PREFIX
        ))
    })?;
    Ok(format!("{FINISHED_PREFIX}{rest}"))
}
