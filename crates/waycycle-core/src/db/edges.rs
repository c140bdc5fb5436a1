use rusqlite::params;

use super::WAY_REL;
use crate::error::{Result, WaycycleError};
use crate::graph::{Edge, Node};

impl super::Database {
    /// Create a directed edge between two named nodes
    pub fn create_edge(&self, from: &str, to: &str) -> Result<Edge> {
        let source = self
            .find_node_by_name(from)?
            .ok_or_else(|| WaycycleError::NodeNotFound {
                name: from.to_string(),
            })?;
        let target = self
            .find_node_by_name(to)?
            .ok_or_else(|| WaycycleError::NodeNotFound {
                name: to.to_string(),
            })?;

        self.insert_edge(source.id, target.id)
    }

    pub(crate) fn insert_edge(&self, source_id: i64, target_id: i64) -> Result<Edge> {
        self.conn
            .execute(
                "INSERT INTO edges (source_id, target_id, rel_type) VALUES (?1, ?2, ?3)",
                params![source_id, target_id, WAY_REL],
            )
            .map_err(|e| WaycycleError::db_operation("insert edge", e))?;

        Ok(Edge {
            id: self.conn.last_insert_rowid(),
            source_id,
            target_id,
        })
    }

    /// Outgoing edges of a node with their destination nodes, in stable order
    pub fn outgoing_edges(&self, node: &Node) -> Result<Vec<(Node, Edge)>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT e.id, e.target_id, n.name
                 FROM edges e JOIN nodes n ON n.id = e.target_id
                 WHERE e.source_id = ?1 AND e.rel_type = ?2
                 ORDER BY e.id",
            )
            .map_err(|e| WaycycleError::db_operation("prepare outgoing edges query", e))?;

        let mut rows = stmt
            .query(params![node.id, WAY_REL])
            .map_err(|e| WaycycleError::db_operation("execute outgoing edges query", e))?;

        let mut edges = Vec::new();

        while let Some(row) = rows
            .next()
            .map_err(|e| WaycycleError::db_operation("read outgoing edge", e))?
        {
            let edge_id: i64 = row
                .get(0)
                .map_err(|e| WaycycleError::db_operation("get edge id", e))?;
            let target_id: i64 = row
                .get(1)
                .map_err(|e| WaycycleError::db_operation("get target_id", e))?;
            let target_name: String = row
                .get(2)
                .map_err(|e| WaycycleError::db_operation("get target name", e))?;

            edges.push((
                Node {
                    id: target_id,
                    name: target_name,
                },
                Edge {
                    id: edge_id,
                    source_id: node.id,
                    target_id,
                },
            ));
        }

        Ok(edges)
    }
}
