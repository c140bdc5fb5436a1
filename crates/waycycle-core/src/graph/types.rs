use crate::error::Result;

/// A graph node held transiently while traversing. Identity is the store
/// rowid; the name is the caller-visible key used for subset membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: i64,
    pub name: String,
}

/// A directed edge between two stored nodes. Each row is a distinct edge,
/// so multiple edges between the same ordered pair stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: i64,
    pub source_id: i64,
    pub target_id: i64,
}

/// Trait for providing graph adjacency during detection
pub trait GraphSource {
    fn find_node_by_name(&self, name: &str) -> Result<Option<Node>>;
    fn outgoing_edges(&self, node: &Node) -> Result<Vec<(Node, Edge)>>;
}

/// One in-flight search branch: the root node plus the nodes and distinct
/// edges appended on the way down. Nodes may repeat along the path; edges
/// may not. Extensions are pushed on descent and popped on backtrack.
#[derive(Debug)]
pub struct SearchPath {
    root: Node,
    tail: Vec<(Node, Edge)>,
}

impl SearchPath {
    pub fn rooted_at(root: Node) -> Self {
        SearchPath {
            root,
            tail: Vec::new(),
        }
    }

    /// The node the path currently ends at
    pub fn end_node(&self) -> &Node {
        self.tail.last().map(|(node, _)| node).unwrap_or(&self.root)
    }

    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.tail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_empty()
    }

    /// Extend the path by one edge
    pub fn push(&mut self, node: Node, edge: Edge) {
        self.tail.push((node, edge));
    }

    /// Undo the most recent extension
    pub fn pop(&mut self) {
        self.tail.pop();
    }

    /// Whether the path already uses the given edge
    pub fn has_edge(&self, edge_id: i64) -> bool {
        self.tail.iter().any(|(_, edge)| edge.id == edge_id)
    }

    /// How many times a node with this identity appears on the path
    pub fn count_occurrences(&self, node_id: i64) -> usize {
        let in_tail = self.tail.iter().filter(|(node, _)| node.id == node_id).count();
        usize::from(self.root.id == node_id) + in_tail
    }
}
