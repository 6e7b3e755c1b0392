//! Check command implementation
//!
//! Verifies configuration and dataset table presence without running the
//! pipeline.

use std::path::Path;

use adapter_loader::{dataset_dir, TABLE_FILES};
use mrio_core::types::RegionMap;
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config_path: &str, year: u16) -> Result<()> {
    let config = CliConfig::load(Path::new(config_path))?;
    info!("Configuration loaded from {}", config_path);

    let map = RegionMap::uniform(config.regions, config.sectors_per_region)?;
    println!(
        "Partition: {} regions x {} sectors (N = {})",
        config.regions,
        config.sectors_per_region,
        map.total_sectors()
    );
    println!("Condition limit: {:.1e}", config.condition_limit);

    let dir = dataset_dir(&config.data_dir, year);
    if !dir.is_dir() {
        return Err(CliError::FileNotFound(dir.display().to_string()));
    }
    println!("Dataset directory: {}", dir.display());

    let mut missing = 0;
    for file in TABLE_FILES {
        let present = dir.join(file).is_file();
        println!("  {} {}", if present { "✓" } else { "✗" }, file);
        if !present {
            missing += 1;
        }
    }

    if missing > 0 {
        return Err(CliError::InvalidArgument(format!(
            "{} of {} dataset tables missing for year {}",
            missing,
            TABLE_FILES.len(),
            year
        )));
    }

    println!("All dataset tables present for year {}", year);
    Ok(())
}
