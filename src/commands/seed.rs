use crate::cli::{Cli, OutputFormat};
use waycycle_core::db::Database;
use waycycle_core::error::Result;

pub fn run(db: &Database, cli: &Cli, nodes: &[String], relations: u64, seed: Option<u64>) -> Result<()> {
    db.create_nodes_and_relations(nodes, relations, seed)?;

    match cli.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "nodes": nodes.len(),
                "relations": relations,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("created {} node(s) and {} relation(s)", nodes.len(), relations);
            }
        }
    }

    Ok(())
}
