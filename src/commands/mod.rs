//! Command dispatch logic for waycycle

mod add;
mod detect;
mod seed;
mod stats;

use crate::cli::{Cli, Commands};
use tracing::debug;
use waycycle_core::db::Database;
use waycycle_core::error::Result;

pub fn run(cli: &Cli) -> Result<()> {
    let db = Database::open(&cli.db)?;
    debug!(db = %cli.db.display(), "store opened");

    match &cli.command {
        Commands::Seed {
            nodes,
            relations,
            seed,
        } => seed::run(&db, cli, nodes, *relations, *seed),
        Commands::AddNode { names } => add::run_add_node(&db, cli, names),
        Commands::AddEdge { from, to } => add::run_add_edge(&db, cli, from, to),
        Commands::Detect { names, engine } => detect::run(&db, cli, names, *engine),
        Commands::Stats => stats::run(&db, cli),
    }
}
