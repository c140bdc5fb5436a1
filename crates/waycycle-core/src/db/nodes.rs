use rusqlite::params;

use super::POINT_LABEL;
use crate::error::{Result, WaycycleError};
use crate::graph::Node;

impl super::Database {
    /// Create a node with the given name
    pub fn create_node(&self, name: &str) -> Result<Node> {
        self.conn
            .execute(
                "INSERT INTO nodes (name, label) VALUES (?1, ?2)",
                params![name, POINT_LABEL],
            )
            .map_err(|e| match e.sqlite_error_code() {
                Some(rusqlite::ErrorCode::ConstraintViolation) => WaycycleError::NodeExists {
                    name: name.to_string(),
                },
                _ => WaycycleError::db_operation("insert node", e),
            })?;

        Ok(Node {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Look up a node by its caller-visible name
    pub fn find_node_by_name(&self, name: &str) -> Result<Option<Node>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM nodes WHERE name = ?1 AND label = ?2")
            .map_err(|e| WaycycleError::db_operation("prepare node lookup", e))?;

        let mut rows = stmt
            .query(params![name, POINT_LABEL])
            .map_err(|e| WaycycleError::db_operation("execute node lookup", e))?;

        match rows
            .next()
            .map_err(|e| WaycycleError::db_operation("read node row", e))?
        {
            Some(row) => {
                let id: i64 = row
                    .get(0)
                    .map_err(|e| WaycycleError::db_operation("get node id", e))?;
                let name: String = row
                    .get(1)
                    .map_err(|e| WaycycleError::db_operation("get node name", e))?;
                Ok(Some(Node { id, name }))
            }
            None => Ok(None),
        }
    }
}
