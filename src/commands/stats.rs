use crate::cli::{Cli, OutputFormat};
use waycycle_core::db::Database;
use waycycle_core::error::Result;

pub fn run(db: &Database, cli: &Cli) -> Result<()> {
    let nodes = db.get_node_count()?;
    let edges = db.get_edge_count()?;
    let schema_version = db.get_schema_version()?;

    match cli.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "nodes": nodes,
                "edges": edges,
                "schema_version": schema_version,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Human => {
            println!("nodes: {}", nodes);
            println!("edges: {}", edges);
            println!("schema version: {}", schema_version);
        }
    }

    Ok(())
}
