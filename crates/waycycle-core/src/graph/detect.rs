use std::collections::HashSet;

use super::evaluate::{evaluate_extension, Verdict};
use super::frontier::expand_frontier;
use super::types::{GraphSource, SearchPath};
use crate::error::Result;

/// Depth-first, path-sensitive search for a directed cycle composed
/// entirely of nodes named in `subset`.
///
/// One search is seeded per subset name in input order, skipping names
/// already expanded by an earlier search and names with no matching node
/// in the store (an unreachable seed, not an error). Returns true as soon
/// as any seed closes a cycle.
#[tracing::instrument(skip(source, subset), fields(subset_len = subset.len()))]
pub fn detect_cycle<S: GraphSource>(source: &S, subset: &[String]) -> Result<bool> {
    let members: HashSet<String> = subset.iter().cloned().collect();
    let mut checked: HashSet<String> = HashSet::new();

    for name in subset {
        if checked.contains(name) {
            continue;
        }
        let Some(root) = source.find_node_by_name(name)? else {
            continue;
        };

        let mut path = SearchPath::rooted_at(root);
        if search(source, &mut path, &members, &mut checked)? {
            tracing::debug!(seed = %name, "cycle found");
            return Ok(true);
        }
    }

    Ok(false)
}

fn search<S: GraphSource>(
    source: &S,
    path: &mut SearchPath,
    members: &HashSet<String>,
    checked: &mut HashSet<String>,
) -> Result<bool> {
    for (node, edge) in expand_frontier(source, path, members, checked)? {
        // A path may revisit a node but never reuse an edge.
        if path.has_edge(edge.id) {
            continue;
        }

        path.push(node, edge);
        let found = match evaluate_extension(path, members) {
            Verdict::CycleFound => true,
            Verdict::Continue => search(source, path, members, checked)?,
            Verdict::Reject => false,
        };
        path.pop();

        if found {
            return Ok(true);
        }
    }

    Ok(false)
}
