//! # adapter_loader: Dataset Ingestion for MRIO Analysis
//!
//! ## Adapter Layer Role
//!
//! adapter_loader is the input boundary of the workspace. It resolves a
//! dataset year to a directory of harmonised CSV tables, reads the six
//! arrays the kernel needs, and hands back a shape-validated
//! [`mrio_model::InputBundle`]. Acquisition and cleaning of the raw
//! statistical tables happen upstream; this crate assumes numeric,
//! unit-consistent CSV files.
//!
//! ## Dataset Layout
//!
//! ```text
//! <data_dir>/<year>/
//!     intermediate_use.csv   N x N
//!     final_demand.csv       N x R
//!     total_input.csv        N   (one value per line)
//!     total_output.csv       N
//!     employment.csv         N
//!     value_added.csv        N
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod error;
mod tables;

pub use error::LoaderError;
pub use tables::{read_matrix, read_vector};

use mrio_core::types::RegionMap;
use mrio_model::InputBundle;
use std::path::{Path, PathBuf};
use tracing::info;

/// File names of the six dataset tables, in load order.
pub const TABLE_FILES: [&str; 6] = [
    "intermediate_use.csv",
    "final_demand.csv",
    "total_input.csv",
    "total_output.csv",
    "employment.csv",
    "value_added.csv",
];

/// Directory of one dataset year inside the data root.
pub fn dataset_dir(data_dir: &Path, year: u16) -> PathBuf {
    data_dir.join(year.to_string())
}

/// Load and validate the input bundle for one dataset year.
///
/// Reads the six tables from `<data_dir>/<year>/` and checks the assembled
/// bundle against the region partition before returning it, so the caller
/// never sees a bundle the kernel would reject.
///
/// # Errors
///
/// [`LoaderError`] for a missing or malformed table, or a shape
/// disagreement with `map`.
pub fn load_bundle(
    data_dir: &Path,
    year: u16,
    map: &RegionMap,
) -> Result<InputBundle, LoaderError> {
    let dir = dataset_dir(data_dir, year);
    info!(year, dir = %dir.display(), "loading dataset");

    let bundle = InputBundle {
        intermediate_use: read_matrix("intermediate_use", &dir.join("intermediate_use.csv"))?,
        final_demand: read_matrix("final_demand", &dir.join("final_demand.csv"))?,
        total_input: read_vector("total_input", &dir.join("total_input.csv"))?,
        total_output: read_vector("total_output", &dir.join("total_output.csv"))?,
        employment: read_vector("employment", &dir.join("employment.csv"))?,
        value_added: read_vector("value_added", &dir.join("value_added.csv"))?,
    };

    bundle.validate(map)?;
    info!(
        sectors = map.total_sectors(),
        regions = map.regions(),
        "dataset loaded and validated"
    );
    Ok(bundle)
}
