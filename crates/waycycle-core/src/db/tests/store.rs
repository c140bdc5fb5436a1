use tempfile::tempdir;

use crate::db::Database;
use crate::error::WaycycleError;

#[test]
fn create_and_find_node() {
    let db = Database::open_in_memory().unwrap();
    let created = db.create_node("a1").unwrap();

    let found = db.find_node_by_name("a1").unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "a1");
}

#[test]
fn missing_node_lookup_returns_none() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.find_node_by_name("ghost").unwrap().is_none());
}

#[test]
fn duplicate_node_name_is_rejected() {
    let db = Database::open_in_memory().unwrap();
    db.create_node("a1").unwrap();

    let err = db.create_node("a1").unwrap_err();
    assert!(matches!(err, WaycycleError::NodeExists { .. }));
}

#[test]
fn edge_creation_requires_existing_endpoints() {
    let db = Database::open_in_memory().unwrap();
    db.create_node("a1").unwrap();

    let err = db.create_edge("a1", "ghost").unwrap_err();
    assert!(matches!(err, WaycycleError::NodeNotFound { .. }));

    let err = db.create_edge("ghost", "a1").unwrap_err();
    assert!(matches!(err, WaycycleError::NodeNotFound { .. }));
}

#[test]
fn outgoing_edges_are_ordered_and_carry_destinations() {
    let db = Database::open_in_memory().unwrap();
    let a1 = db.create_node("a1").unwrap();
    db.create_node("a2").unwrap();
    db.create_node("a3").unwrap();
    db.create_edge("a1", "a2").unwrap();
    db.create_edge("a1", "a3").unwrap();

    let edges = db.outgoing_edges(&a1).unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].0.name, "a2");
    assert_eq!(edges[1].0.name, "a3");
    assert!(edges.iter().all(|(_, e)| e.source_id == a1.id));
}

#[test]
fn parallel_edges_are_distinct_rows() {
    let db = Database::open_in_memory().unwrap();
    let a1 = db.create_node("a1").unwrap();
    db.create_node("a2").unwrap();
    let first = db.create_edge("a1", "a2").unwrap();
    let second = db.create_edge("a1", "a2").unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(db.outgoing_edges(&a1).unwrap().len(), 2);
}

#[test]
fn counts_reflect_inserts() {
    let db = Database::open_in_memory().unwrap();
    db.create_node("a1").unwrap();
    db.create_node("a2").unwrap();
    db.create_edge("a1", "a2").unwrap();

    assert_eq!(db.get_node_count().unwrap(), 2);
    assert_eq!(db.get_edge_count().unwrap(), 1);
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.db");

    {
        let db = Database::open(&path).unwrap();
        db.create_node("a1").unwrap();
        db.create_node("a2").unwrap();
        db.create_edge("a1", "a2").unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.get_node_count().unwrap(), 2);
    assert_eq!(db.get_edge_count().unwrap(), 1);
    assert!(db.find_node_by_name("a1").unwrap().is_some());
}
