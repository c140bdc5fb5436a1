use std::collections::HashSet;

use super::types::{Edge, GraphSource, Node, SearchPath};
use crate::error::Result;

/// Decide which outgoing edges the search may follow from the path's end.
///
/// A path ending outside the subset is a dead end and gets no frontier.
/// Otherwise the end node's name is recorded into `checked` (it has now
/// been used as an expansion point, so the outer driver need not re-seed
/// it) and every outgoing edge is produced. Whether a destination is worth
/// keeping is decided one step later by the evaluator.
pub fn expand_frontier<S: GraphSource>(
    source: &S,
    path: &SearchPath,
    subset: &HashSet<String>,
    checked: &mut HashSet<String>,
) -> Result<Vec<(Node, Edge)>> {
    let end = path.end_node();
    if !subset.contains(end.name.as_str()) {
        return Ok(Vec::new());
    }
    checked.insert(end.name.clone());
    source.outgoing_edges(end)
}
