//! SQLite graph store for waycycle

mod cycles;
mod edges;
mod fixture;
mod nodes;
mod schema;

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, WaycycleError};
use crate::graph::{Edge, GraphSource, Node};

pub use schema::create_schema;

/// Label given to every stored node
pub const POINT_LABEL: &str = "point";

/// Relationship type followed during detection
pub const WAY_REL: &str = "way_to";

/// SQLite-backed graph store
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given path
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path).map_err(|e| {
            WaycycleError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| WaycycleError::Other(format!("failed to enable WAL mode: {}", e)))?;

        create_schema(&conn)
            .map_err(|e| WaycycleError::Other(format!("failed to create database schema: {}", e)))?;

        Ok(Database { conn })
    }

    /// Open a transient in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| WaycycleError::Other(format!("failed to open in-memory database: {}", e)))?;

        create_schema(&conn)
            .map_err(|e| WaycycleError::Other(format!("failed to create database schema: {}", e)))?;

        Ok(Database { conn })
    }

    pub fn get_node_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM nodes", [], |r| r.get(0))
            .map_err(|e| WaycycleError::Other(format!("failed to get node count: {}", e)))
    }

    pub fn get_edge_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM edges", [], |r| r.get(0))
            .map_err(|e| WaycycleError::Other(format!("failed to get edge count: {}", e)))
    }

    pub fn get_schema_version(&self) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT value FROM graph_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| WaycycleError::Other(format!("failed to get schema version: {}", e)))
    }
}

impl GraphSource for Database {
    fn find_node_by_name(&self, name: &str) -> Result<Option<Node>> {
        self.find_node_by_name(name)
    }

    fn outgoing_edges(&self, node: &Node) -> Result<Vec<(Node, Edge)>> {
        self.outgoing_edges(node)
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Ensure all WAL changes are checkpointed before closing
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}

#[cfg(test)]
mod tests;
