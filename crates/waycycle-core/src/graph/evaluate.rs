use std::collections::HashSet;

use super::types::SearchPath;

/// Classification of a path just extended by one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The new end node closes a cycle; stop extending this branch
    CycleFound,
    /// The new end node is a subset member seen once; keep extending
    Continue,
    /// The new end node lies outside the subset; abandon this branch
    Reject,
}

/// Classify a candidate path after a one-edge extension.
///
/// Cycle closure is detected by counting occurrences of the end node's
/// identity among all nodes on the path, end included. A visited flag
/// would not work here: a legitimate cycle necessarily revisits its start
/// node, so uniqueness is enforced at the edge level only.
pub fn evaluate_extension(path: &SearchPath, subset: &HashSet<String>) -> Verdict {
    let end = path.end_node();
    if !subset.contains(end.name.as_str()) {
        return Verdict::Reject;
    }
    if path.count_occurrences(end.id) > 1 {
        Verdict::CycleFound
    } else {
        Verdict::Continue
    }
}
