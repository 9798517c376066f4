//! Descendant resolution over the upstream-tracking graph.
//!
//! Edges come from [`crate::refs::parse_tracking_refs`] in git's listing
//! order, and that order is preserved: the non-recursive result is a plain
//! filter, the recursive result is a depth-first postorder in which a
//! child's transitive descendants appear before the current level's own
//! direct-child edges (leaves before their ancestors).

use crate::refs::TrackingEdge;
use std::collections::HashSet;

/// Collect the tracking edges descending from `root`.
///
/// Non-recursive: direct children only. Recursive: the full transitive
/// descendant set. A visited set keyed by branch name guards the walk, so
/// cyclic tracking configuration (possible in git) terminates instead of
/// recursing forever; an already-visited branch is not descended into again.
pub fn resolve(root: &str, edges: &[TrackingEdge], recursive: bool) -> Vec<TrackingEdge> {
    if !recursive {
        return direct_children(root, edges);
    }

    let mut visited = HashSet::new();
    visited.insert(root.to_string());
    walk(root, edges, &mut visited)
}

/// Edges whose upstream is exactly `root`, in input order.
///
/// An empty upstream (no tracking configured) never matches, since `root`
/// is a non-empty branch name.
fn direct_children(root: &str, edges: &[TrackingEdge]) -> Vec<TrackingEdge> {
    edges
        .iter()
        .filter(|edge| edge.upstream == root)
        .cloned()
        .collect()
}

fn walk(root: &str, edges: &[TrackingEdge], visited: &mut HashSet<String>) -> Vec<TrackingEdge> {
    let mut result = Vec::new();
    let mut kept = Vec::new();

    for child in direct_children(root, edges) {
        // Edges back into already-visited branches are dropped outright, so
        // a cycle neither recurses nor lists the root among its descendants.
        if visited.insert(child.branch.clone()) {
            result.extend(walk(&child.branch, edges, visited));
            kept.push(child);
        }
    }
    result.extend(kept);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_edges() -> Vec<TrackingEdge> {
        vec![
            TrackingEdge::new("main", "feature/a"),
            TrackingEdge::new("main", "feature/b"),
            TrackingEdge::new("feature/a", "feature/c"),
        ]
    }

    #[test]
    fn non_recursive_returns_direct_children_in_order() {
        let result = resolve("main", &sample_edges(), false);
        assert_eq!(
            result,
            vec![
                TrackingEdge::new("main", "feature/a"),
                TrackingEdge::new("main", "feature/b"),
            ]
        );
    }

    #[test]
    fn non_recursive_with_no_children_is_empty() {
        assert!(resolve("feature/c", &sample_edges(), false).is_empty());
    }

    #[test]
    fn empty_upstream_never_matches() {
        let edges = vec![TrackingEdge::new("", "main")];
        assert!(resolve("main", &edges, true).is_empty());
    }

    #[test]
    fn recursive_lists_each_descendant_once_leaves_first() {
        let result = resolve("main", &sample_edges(), true);
        let branches: Vec<&str> = result.iter().map(|e| e.branch.as_str()).collect();

        assert_eq!(branches.len(), 3);
        for name in ["feature/a", "feature/b", "feature/c"] {
            assert_eq!(branches.iter().filter(|b| **b == name).count(), 1);
        }

        let pos = |name: &str| branches.iter().position(|b| *b == name).unwrap();
        assert!(pos("feature/c") < pos("feature/a"));
    }

    #[test]
    fn recursive_walk_terminates_on_cycle() {
        let edges = vec![
            TrackingEdge::new("feature/a", "feature/b"),
            TrackingEdge::new("feature/b", "feature/a"),
        ];

        let result = resolve("feature/a", &edges, true);
        let branches: Vec<&str> = result.iter().map(|e| e.branch.as_str()).collect();
        assert_eq!(branches, vec!["feature/b"]);
    }

    #[test]
    fn self_tracking_branch_does_not_loop() {
        let edges = vec![TrackingEdge::new("feature/a", "feature/a")];
        assert!(resolve("feature/a", &edges, true).is_empty());
    }
}
