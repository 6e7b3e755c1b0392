//! Technical-coefficient matrix construction.

use mrio_core::math::guarded_div;
use nalgebra::{DMatrix, DVector};

/// Derive the direct-input technical-coefficient matrix A.
///
/// `A[i, j] = intermediate_use[i, j] / total_input[j]`: the denominator
/// broadcasts down each column. Columns whose total input is zero come out
/// as all-zero rather than infinite, per the guarded-division policy.
///
/// Callers are expected to pass shape-consistent arrays (the bundle is
/// validated before the pipeline starts); the output dimensions are taken
/// from `intermediate_use`.
///
/// # Example
///
/// ```
/// use mrio_model::coefficients::technical_coefficients;
/// use nalgebra::{DMatrix, DVector};
///
/// let flows = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
/// let total_input = DVector::from_row_slice(&[2.0, 2.0]);
/// let a = technical_coefficients(&flows, &total_input);
/// assert_eq!(a[(0, 1)], 0.5);
/// assert_eq!(a[(1, 0)], 0.5);
/// ```
pub fn technical_coefficients(
    intermediate_use: &DMatrix<f64>,
    total_input: &DVector<f64>,
) -> DMatrix<f64> {
    let (n_rows, n_cols) = intermediate_use.shape();
    DMatrix::from_fn(n_rows, n_cols, |i, j| {
        guarded_div(intermediate_use[(i, j)], total_input[j])
    })
}
