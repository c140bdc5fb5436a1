mod fixture;
mod store;

use super::Database;

pub(crate) fn subset(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Graph used throughout: a1->a2->a3->a1, a2->a4->a5->a1, a3->a5, and an
/// isolated a6.
pub(crate) fn reference_graph() -> Database {
    let db = Database::open_in_memory().unwrap();
    for name in ["a1", "a2", "a3", "a4", "a5", "a6"] {
        db.create_node(name).unwrap();
    }
    for (from, to) in [
        ("a1", "a2"),
        ("a2", "a3"),
        ("a3", "a1"),
        ("a2", "a4"),
        ("a4", "a5"),
        ("a5", "a1"),
        ("a3", "a5"),
    ] {
        db.create_edge(from, to).unwrap();
    }
    db
}
