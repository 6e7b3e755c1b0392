//! Factor-intensity vectors and their diagonalisation.

use mrio_core::math::guarded_div;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// The factor carried through the embodied-flow branch.
///
/// Stages 3-6 of the pipeline run once per branch; the branch only selects
/// which numerator vector feeds the intensity and labels the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowBranch {
    /// Employment embodied in traded output.
    Employment,
    /// Value added embodied in traded output.
    ValueAdded,
}

impl FlowBranch {
    /// Human-readable branch name.
    pub fn name(&self) -> &'static str {
        match self {
            FlowBranch::Employment => "employment",
            FlowBranch::ValueAdded => "value-added",
        }
    }
}

/// Per-sector factor intensity: `numerator[i] / total_output[i]`, sanitised.
///
/// Sectors with zero total output get intensity zero rather than NaN, per
/// the guarded-division policy. The same routine services both branches;
/// only the numerator differs.
///
/// # Example
///
/// ```
/// use mrio_model::intensity::intensity_vector;
/// use nalgebra::DVector;
///
/// let employment = DVector::from_row_slice(&[1.0, 3.0, 5.0]);
/// let total_output = DVector::from_row_slice(&[2.0, 0.0, 2.0]);
/// let intensity = intensity_vector(&employment, &total_output);
///
/// assert_eq!(intensity[0], 0.5);
/// assert_eq!(intensity[1], 0.0); // zero output sanitised, not NaN
/// assert_eq!(intensity[2], 2.5);
/// ```
pub fn intensity_vector(numerator: &DVector<f64>, total_output: &DVector<f64>) -> DVector<f64> {
    DVector::from_fn(numerator.len(), |i, _| {
        guarded_div(numerator[i], total_output[i])
    })
}

/// Diagonalise an intensity vector into the N×N matrix with the vector on
/// the diagonal and zero elsewhere.
pub fn intensity_diagonal(intensity: &DVector<f64>) -> DMatrix<f64> {
    DMatrix::from_diagonal(intensity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_branch_names() {
        assert_eq!(FlowBranch::Employment.name(), "employment");
        assert_eq!(FlowBranch::ValueAdded.name(), "value-added");
    }

    #[test]
    fn test_intensity_elementwise_ratio() {
        let numerator = DVector::from_row_slice(&[4.0, 9.0]);
        let total_output = DVector::from_row_slice(&[2.0, 3.0]);
        let intensity = intensity_vector(&numerator, &total_output);

        assert_relative_eq!(intensity[0], 2.0);
        assert_relative_eq!(intensity[1], 3.0);
    }

    #[test]
    fn test_zero_output_sector_has_zero_intensity() {
        let numerator = DVector::from_row_slice(&[4.0, 9.0]);
        let total_output = DVector::from_row_slice(&[2.0, 0.0]);
        let intensity = intensity_vector(&numerator, &total_output);

        assert_eq!(intensity[1], 0.0);
        assert!(intensity.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_diagonalisation() {
        let intensity = DVector::from_row_slice(&[0.5, 0.0, 2.0]);
        let diag = intensity_diagonal(&intensity);

        assert_eq!(diag.shape(), (3, 3));
        assert_eq!(diag[(0, 0)], 0.5);
        assert_eq!(diag[(1, 1)], 0.0);
        assert_eq!(diag[(2, 2)], 2.0);
        assert_eq!(diag[(0, 1)], 0.0);
        assert_eq!(diag[(2, 0)], 0.0);
    }

    #[test]
    fn test_zero_output_diagonal_entry_is_zero() {
        // TotalOutput[i] = 0 must yield IntensityDiag[i][i] = 0, not NaN.
        let numerator = DVector::from_row_slice(&[1.0, 1.0]);
        let total_output = DVector::from_row_slice(&[0.0, 1.0]);
        let diag = intensity_diagonal(&intensity_vector(&numerator, &total_output));
        assert_eq!(diag[(0, 0)], 0.0);
    }
}
