use crate::cli::{Cli, OutputFormat};
use waycycle_core::db::Database;
use waycycle_core::detect::{detect_with_engine, Engine};
use waycycle_core::error::Result;

pub fn run(db: &Database, cli: &Cli, names: &[String], engine: Engine) -> Result<()> {
    let report = detect_with_engine(db, names, engine)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => println!("cycle: {}", report.cycle),
    }

    Ok(())
}
