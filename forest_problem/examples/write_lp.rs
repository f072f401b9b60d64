//! Assemble the problem for a data directory and write one LP file per objective.
//!
//! cargo run --example write_lp -- <data_dir> [out_dir] [config.json]

use forest_problem::{assemble, emit_lp, logging, ProblemConfig};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "lp_out".to_string()));

    let mut config = match args.next() {
        Some(path) => ProblemConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => ProblemConfig::default(),
    };
    config.data_dir = data_dir;

    let assembled = assemble(&config)?;
    fs::create_dir_all(&out_dir)?;

    for symbol in assembled.problem.objective_symbols() {
        let path = out_dir.join(format!("{}.lp", symbol));
        fs::write(&path, emit_lp(&assembled.problem, &symbol)?)?;
        tracing::info!(path = %path.display(), "wrote LP");
    }
    fs::write(out_dir.join("problem.json"), assembled.problem.to_pretty_json()?)?;
    fs::write(
        out_dir.join("schedules.json"),
        serde_json::to_string_pretty(&assembled.schedules)?,
    )?;
    Ok(())
}
