use crate::db::Database;
use crate::error::WaycycleError;
use crate::graph::detect_cycle;

fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("n{}", i)).collect()
}

#[test]
fn creates_requested_nodes_and_relations() {
    let db = Database::open_in_memory().unwrap();
    db.create_nodes_and_relations(&names(6), 10, Some(1)).unwrap();

    assert_eq!(db.get_node_count().unwrap(), 6);
    assert_eq!(db.get_edge_count().unwrap(), 10);
}

#[test]
fn random_relations_never_self_loop() {
    let db = Database::open_in_memory().unwrap();
    db.create_nodes_and_relations(&names(5), 40, Some(9)).unwrap();

    for name in names(5) {
        let node = db.find_node_by_name(&name).unwrap().unwrap();
        for (target, edge) in db.outgoing_edges(&node).unwrap() {
            assert_ne!(edge.source_id, edge.target_id);
            assert_ne!(target.name, name);
        }
    }
}

#[test]
fn seeded_fixture_is_reproducible() {
    let first = Database::open_in_memory().unwrap();
    first
        .create_nodes_and_relations(&names(8), 15, Some(42))
        .unwrap();
    let second = Database::open_in_memory().unwrap();
    second
        .create_nodes_and_relations(&names(8), 15, Some(42))
        .unwrap();

    // Same seed, same graph: both copies answer every probe identically.
    for probe in [names(8), names(3), names(8)[4..].to_vec()] {
        assert_eq!(
            detect_cycle(&first, &probe).unwrap(),
            detect_cycle(&second, &probe).unwrap()
        );
    }
}

#[test]
fn relations_require_at_least_two_nodes() {
    let db = Database::open_in_memory().unwrap();
    let err = db
        .create_nodes_and_relations(&names(1), 3, Some(0))
        .unwrap_err();
    assert!(matches!(err, WaycycleError::InvalidValue { .. }));
}

#[test]
fn zero_relations_is_allowed_for_any_node_count() {
    let db = Database::open_in_memory().unwrap();
    db.create_nodes_and_relations(&names(1), 0, None).unwrap();
    assert_eq!(db.get_node_count().unwrap(), 1);
    assert_eq!(db.get_edge_count().unwrap(), 0);
}
