//! CLI argument parsing for waycycle
//!
//! Supports global flags: --db, --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use waycycle_core::detect::Engine;
pub use waycycle_core::format::OutputFormat;

/// Waycycle - cycle detection over a named directed graph
#[derive(Parser, Debug)]
#[command(name = "waycycle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the graph database file
    #[arg(long, global = true, env = "WAYCYCLE_DB", default_value = "waycycle.db")]
    pub db: PathBuf,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create nodes and random relations between them
    Seed {
        /// Node names to create (comma separated)
        #[arg(long, value_delimiter = ',', required = true)]
        nodes: Vec<String>,

        /// Number of random relations to create
        #[arg(long, default_value_t = 0)]
        relations: u64,

        /// RNG seed for reproducible fixtures
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Create named nodes
    AddNode {
        /// Node names to create
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Create a directed edge between two named nodes
    AddEdge {
        /// Source node name
        from: String,

        /// Target node name
        to: String,
    },

    /// Check whether a cycle exists using only the given nodes
    Detect {
        /// Node names defining the restricted search space
        #[arg(required = true)]
        names: Vec<String>,

        /// Detection engine
        #[arg(long, default_value = "traversal", value_parser = parse_engine)]
        engine: Engine,
    },

    /// Show store statistics
    Stats,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: waycycle_core::error::WaycycleError| e.to_string())
}

fn parse_engine(s: &str) -> Result<Engine, String> {
    s.parse().map_err(|e: waycycle_core::error::WaycycleError| e.to_string())
}
