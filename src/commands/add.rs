use crate::cli::{Cli, OutputFormat};
use waycycle_core::db::Database;
use waycycle_core::error::Result;

pub fn run_add_node(db: &Database, cli: &Cli, names: &[String]) -> Result<()> {
    let mut created = Vec::with_capacity(names.len());
    for name in names {
        created.push(db.create_node(name)?);
    }

    match cli.format {
        OutputFormat::Json => {
            let out: Vec<_> = created
                .iter()
                .map(|n| serde_json::json!({ "id": n.id, "name": n.name }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                for node in &created {
                    println!("created node {}", node.name);
                }
            }
        }
    }

    Ok(())
}

pub fn run_add_edge(db: &Database, cli: &Cli, from: &str, to: &str) -> Result<()> {
    let edge = db.create_edge(from, to)?;

    match cli.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "id": edge.id,
                "from": from,
                "to": to,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("created edge {} -> {}", from, to);
            }
        }
    }

    Ok(())
}
