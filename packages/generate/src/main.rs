#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for generating a synthetic registry record set as JSON.

use cancer_map_generate::{GenerateConfig, GenerateError, generate_records, write_records};
use cancer_map_geography_models::CountyDirectory;
use clap::Parser;
use std::path::PathBuf;

/// Generate synthetic cancer registry records.
#[derive(Debug, Parser)]
#[command(name = "cancer_map_generate")]
struct Args {
    /// RNG seed; the same seed always yields the same dataset.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Observation year stamped on every record. Defaults to the
    /// current year.
    #[arg(long)]
    year: Option<u16>,

    /// Output file path. Writes JSON to stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), GenerateError> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let args = Args::parse();

    let mut config = GenerateConfig {
        seed: args.seed,
        ..GenerateConfig::default()
    };
    if let Some(year) = args.year {
        config.year = year;
    }

    let records = generate_records(&config, &CountyDirectory::default());

    if let Some(path) = args.output {
        write_records(&path, &records)?;
        log::info!("wrote {} records to {}", records.len(), path.display());
    } else {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &records)?;
        println!();
    }

    Ok(())
}
