//! Parsing of `git branch --format="%(upstream) %(refname)"` output.
//!
//! Each line carries an upstream ref path (possibly empty) and a ref path,
//! separated by a single space. Only local heads survive parsing; tags,
//! remote refs, and malformed lines are dropped silently.

/// Prefixes stripped from ref paths to recover bare branch names.
const REF_PREFIXES: &[&str] = &["refs/heads/", "refs/remotes/origin/"];

/// An upstream-tracking relationship between two branches.
///
/// `branch` tracks `upstream`. The upstream is the empty string when the
/// branch has no tracking configured; such edges never match a requested
/// root, since roots are non-empty branch names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingEdge {
    pub upstream: String,
    pub branch: String,
}

impl TrackingEdge {
    pub fn new(upstream: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            upstream: upstream.into(),
            branch: branch.into(),
        }
    }
}

/// Parse raw tracking-ref listing output into edges.
///
/// Pure function of the input text: trim each line, split on the first
/// space, keep pairs whose ref field is under `refs/heads/`, then strip the
/// ref-namespace prefix from both fields independently.
///
/// Trimming erases the empty upstream field git emits for untracked
/// branches, so a line without a space is read as (no upstream, ref).
pub fn parse_tracking_refs(raw: &str) -> Vec<TrackingEdge> {
    raw.lines()
        .map(str::trim)
        .map(|line| line.split_once(' ').unwrap_or(("", line)))
        .filter(|(_, branch)| branch.starts_with("refs/heads/"))
        .map(|(upstream, branch)| {
            TrackingEdge::new(strip_ref_prefix(upstream), strip_ref_prefix(branch))
        })
        .collect()
}

/// Strip the leading ref-namespace segment, if any, exactly once.
fn strip_ref_prefix(ref_path: &str) -> &str {
    for prefix in REF_PREFIXES {
        if let Some(bare) = ref_path.strip_prefix(prefix) {
            return bare;
        }
    }
    ref_path
}
