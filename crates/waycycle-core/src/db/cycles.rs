use std::collections::HashSet;

use rusqlite::params_from_iter;
use rusqlite::types::Value;

use super::{POINT_LABEL, WAY_REL};
use crate::error::{Result, WaycycleError};

impl super::Database {
    /// Declarative counterpart of the traversal engine: a single recursive
    /// query asking whether any closed walk `p -> ... -> p` of length >= 1
    /// exists whose every node is named in `subset`.
    ///
    /// Recursion depth is bounded by the deduplicated subset size: a cycle
    /// confined to k distinct nodes closes a walk within k hops, so the
    /// bound never hides a real cycle.
    #[tracing::instrument(skip(self, subset), fields(subset_len = subset.len()))]
    pub fn has_cycle_among(&self, subset: &[String]) -> Result<bool> {
        let names: Vec<&String> = {
            let mut seen = HashSet::new();
            subset.iter().filter(|n| seen.insert(n.as_str())).collect()
        };
        if names.is_empty() {
            return Ok(false);
        }

        let placeholders = vec!["?"; names.len()].join(", ");
        let sql = format!(
            "WITH RECURSIVE walk(start_id, node_id, depth) AS (
                 SELECT n.id, n.id, 0
                 FROM nodes n
                 WHERE n.label = ? AND n.name IN ({placeholders})
                 UNION
                 SELECT w.start_id, e.target_id, w.depth + 1
                 FROM walk w
                 JOIN edges e ON e.source_id = w.node_id AND e.rel_type = ?
                 JOIN nodes t ON t.id = e.target_id
                 WHERE t.name IN ({placeholders}) AND w.depth < ?
             )
             SELECT EXISTS (
                 SELECT 1 FROM walk WHERE depth >= 1 AND node_id = start_id
             )"
        );

        // Bind values in order of appearance: label, subset names, relation
        // type, subset names again, depth bound.
        let mut values: Vec<Value> = Vec::with_capacity(names.len() * 2 + 3);
        values.push(Value::Text(POINT_LABEL.to_string()));
        values.extend(names.iter().map(|n| Value::Text(n.to_string())));
        values.push(Value::Text(WAY_REL.to_string()));
        values.extend(names.iter().map(|n| Value::Text(n.to_string())));
        values.push(Value::Integer(names.len() as i64));

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| WaycycleError::db_operation("prepare cycle query", e))?;

        stmt.query_row(params_from_iter(values), |r| r.get::<_, bool>(0))
            .map_err(|e| WaycycleError::db_operation("execute cycle query", e))
    }
}
