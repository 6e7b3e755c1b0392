//! The validated input bundle consumed by the pipeline.

use crate::ModelError;
use mrio_core::types::RegionMap;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Immutable numeric inputs for one analysis run.
///
/// The bundle carries the six arrays the pipeline needs, already harmonised
/// and materialised by an external loader. Where they came from (statistical
/// yearbooks, survey tables) and how they were cleaned is outside the kernel;
/// the kernel only checks that the shapes are consistent with the region
/// partition before computing anything.
///
/// Shapes, for N total sectors and R regions:
///
/// - `intermediate_use`: N×N flows from producing sector i to consuming
///   sector j
/// - `final_demand`: N×R final demand by destination region at sector
///   granularity
/// - `total_input`: N, denominator for the technical coefficients
/// - `total_output`: N, denominator for the factor intensities
/// - `employment`: N, employment per sector
/// - `value_added`: N, value added per sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputBundle {
    /// N×N intermediate-use flow matrix.
    pub intermediate_use: DMatrix<f64>,
    /// N×R final-demand matrix by destination region.
    pub final_demand: DMatrix<f64>,
    /// Total input absorbed by each sector.
    pub total_input: DVector<f64>,
    /// Total output produced by each sector.
    pub total_output: DVector<f64>,
    /// Employment count per sector.
    pub employment: DVector<f64>,
    /// Value added per sector.
    pub value_added: DVector<f64>,
}

impl InputBundle {
    /// Check every array shape against the region partition.
    ///
    /// Fails fast on the first inconsistency with N = R × S; no computation
    /// is attempted on a malformed bundle.
    ///
    /// # Errors
    ///
    /// [`ModelError::MatrixShape`] or [`ModelError::VectorLength`] naming the
    /// offending array.
    pub fn validate(&self, map: &RegionMap) -> Result<(), ModelError> {
        let n = map.total_sectors();
        let r = map.regions();

        check_matrix("intermediate_use", &self.intermediate_use, n, n)?;
        check_matrix("final_demand", &self.final_demand, n, r)?;
        check_vector("total_input", &self.total_input, n)?;
        check_vector("total_output", &self.total_output, n)?;
        check_vector("employment", &self.employment, n)?;
        check_vector("value_added", &self.value_added, n)?;
        Ok(())
    }
}

fn check_matrix(
    array: &'static str,
    matrix: &DMatrix<f64>,
    rows: usize,
    cols: usize,
) -> Result<(), ModelError> {
    if matrix.nrows() != rows || matrix.ncols() != cols {
        return Err(ModelError::MatrixShape {
            array,
            expected_rows: rows,
            expected_cols: cols,
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }
    Ok(())
}

fn check_vector(
    array: &'static str,
    vector: &DVector<f64>,
    expected: usize,
) -> Result<(), ModelError> {
    if vector.len() != expected {
        return Err(ModelError::VectorLength {
            array,
            expected,
            got: vector.len(),
        });
    }
    Ok(())
}
