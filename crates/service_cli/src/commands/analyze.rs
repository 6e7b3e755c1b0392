//! Analyze command implementation
//!
//! Loads a dataset year, runs the embodied-flow pipeline, and renders the
//! results.

use std::path::{Path, PathBuf};

use mrio_core::types::RegionMap;
use mrio_model::leontief::LeontiefConfig;
use mrio_model::{BranchFlows, MrioPipeline, MrioResults};
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the analyze command
pub fn run(config_path: &str, year: u16, data_dir: Option<&str>, format: &str) -> Result<()> {
    let config = CliConfig::load(Path::new(config_path))?;
    let data_dir = data_dir.map_or(config.data_dir.clone(), PathBuf::from);

    info!("Starting analysis...");
    info!("  Year: {}", year);
    info!("  Data directory: {}", data_dir.display());
    info!(
        "  Partition: {} regions x {} sectors",
        config.regions, config.sectors_per_region
    );

    let map = RegionMap::uniform(config.regions, config.sectors_per_region)?;
    let bundle = adapter_loader::load_bundle(&data_dir, year, &map)?;

    let pipeline = MrioPipeline::with_config(
        map,
        LeontiefConfig {
            condition_limit: config.condition_limit,
        },
    );
    let results = pipeline.run(&bundle)?;

    match format {
        "json" => print_json(&results)?,
        "csv" => print_csv(&results),
        "table" => print_tables(&results),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }

    info!("Analysis complete");
    Ok(())
}

fn print_json(results: &MrioResults) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

/// Region totals of both branches as CSV rows on stdout.
fn print_csv(results: &MrioResults) {
    println!("branch,region,export,import,net");
    for branch in [&results.employment, &results.value_added] {
        let flows = &branch.flows;
        for r in 0..flows.exports.len() {
            println!(
                "{},R{:02},{},{},{}",
                branch.branch.name(),
                r + 1,
                flows.exports[r],
                flows.imports[r],
                flows.net[r]
            );
        }
    }
}

fn print_tables(results: &MrioResults) {
    for branch in [&results.employment, &results.value_added] {
        print_branch_table(branch);
    }
    println!(
        "Leontief condition estimate: {:.3e}",
        results.condition_estimate
    );
}

fn print_branch_table(branch: &BranchFlows) {
    let flows = &branch.flows;
    println!("\nEmbodied {} transfers", branch.branch.name());
    println!("┌────────┬──────────────┬──────────────┬──────────────┐");
    println!("│ Region │ Export       │ Import       │ Net          │");
    println!("├────────┼──────────────┼──────────────┼──────────────┤");
    for r in 0..flows.exports.len() {
        println!(
            "│ R{:02}    │ {:>12.4} │ {:>12.4} │ {:>12.4} │",
            r + 1,
            flows.exports[r],
            flows.imports[r],
            flows.net[r]
        );
    }
    println!("└────────┴──────────────┴──────────────┴──────────────┘");
}
