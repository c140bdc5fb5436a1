//! Engine selection and cross-checking for cycle detection

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::db::Database;
use crate::error::{Result, WaycycleError};
use crate::graph;

/// Which engine answers the detection query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Depth-first traversal engine (default)
    #[default]
    Traversal,
    /// Declarative recursive query against the store
    Query,
    /// Run both engines and fail on disagreement
    Both,
}

impl FromStr for Engine {
    type Err = WaycycleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "traversal" => Ok(Engine::Traversal),
            "query" => Ok(Engine::Query),
            "both" => Ok(Engine::Both),
            other => Err(WaycycleError::UnknownEngine(other.to_string())),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Traversal => write!(f, "traversal"),
            Engine::Query => write!(f, "query"),
            Engine::Both => write!(f, "both"),
        }
    }
}

/// Outcome of one detection call
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub subset: Vec<String>,
    pub engine: String,
    pub cycle: bool,
}

/// Run detection with the requested engine.
///
/// `Engine::Both` runs the traversal and query engines against the same
/// store snapshot; a disagreement is an internal-consistency fault and is
/// surfaced as an error, never silently reconciled.
pub fn detect_with_engine(
    db: &Database,
    subset: &[String],
    engine: Engine,
) -> Result<DetectionReport> {
    let cycle = match engine {
        Engine::Traversal => graph::detect_cycle(db, subset)?,
        Engine::Query => db.has_cycle_among(subset)?,
        Engine::Both => {
            let traversal = graph::detect_cycle(db, subset)?;
            let query = db.has_cycle_among(subset)?;
            if traversal != query {
                return Err(WaycycleError::EngineMismatch {
                    subset: subset.join(", "),
                    traversal,
                    query,
                });
            }
            traversal
        }
    };

    Ok(DetectionReport {
        subset: subset.to_vec(),
        engine: engine.to_string(),
        cycle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_engine_names() {
        assert_eq!("traversal".parse::<Engine>().unwrap(), Engine::Traversal);
        assert_eq!("Query".parse::<Engine>().unwrap(), Engine::Query);
        assert_eq!("both".parse::<Engine>().unwrap(), Engine::Both);
    }

    #[test]
    fn rejects_unknown_engine() {
        let err = "cypher".parse::<Engine>().unwrap_err();
        assert!(matches!(err, WaycycleError::UnknownEngine(_)));
    }

    #[test]
    fn both_engines_agree_on_reference_graph() {
        let db = Database::open_in_memory().unwrap();
        for name in ["a1", "a2", "a3"] {
            db.create_node(name).unwrap();
        }
        db.create_edge("a1", "a2").unwrap();
        db.create_edge("a2", "a3").unwrap();
        db.create_edge("a3", "a1").unwrap();

        let subset: Vec<String> = ["a1", "a2", "a3"].iter().map(|s| s.to_string()).collect();
        let report = detect_with_engine(&db, &subset, Engine::Both).unwrap();
        assert!(report.cycle);
        assert_eq!(report.engine, "both");
        assert_eq!(report.subset, subset);
    }
}
