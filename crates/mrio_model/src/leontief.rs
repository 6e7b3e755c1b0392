//! Factorisation and inversion of the Leontief system `I − A`.

use crate::ModelError;
use nalgebra::linalg::LU;
use nalgebra::{DMatrix, Dyn};

/// Configuration for the Leontief factorisation.
///
/// # Example
///
/// ```
/// use mrio_model::leontief::LeontiefConfig;
///
/// let config = LeontiefConfig::default();
/// assert_eq!(config.condition_limit, 1e12);
///
/// let strict = LeontiefConfig { condition_limit: 1e6 };
/// assert!(strict.condition_limit < config.condition_limit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeontiefConfig {
    /// Condition-number limit for `I − A`.
    ///
    /// A condition estimate above this value is treated as numerically
    /// unstable and aborts the run with [`ModelError::IllConditioned`].
    pub condition_limit: f64,
}

impl Default for LeontiefConfig {
    /// Default limit of 1e12, leaving roughly four significant decimal
    /// digits in the solve at f64 precision.
    fn default() -> Self {
        Self {
            condition_limit: 1e12,
        }
    }
}

/// Factorised Leontief system with a cached LU decomposition.
///
/// Holds `M = I − A` together with its LU factors, so the total-requirements
/// matrix `L = M⁻¹` can either be materialised once ([`inverse`]) or applied
/// directly to a right-hand side without forming it
/// ([`solve`]). The pipeline uses the solve path, which is the cheaper
/// option when only `L × FinalDemand` is needed; the explicit inverse exists
/// for callers that want the full total-requirements matrix.
///
/// Singularity and ill-conditioning are detected at construction, so a
/// successfully built system never hands out a poisoned inverse.
///
/// [`inverse`]: LeontiefSystem::inverse
/// [`solve`]: LeontiefSystem::solve
#[derive(Debug, Clone)]
pub struct LeontiefSystem {
    lu: LU<f64, Dyn, Dyn>,
    condition_estimate: f64,
}

impl LeontiefSystem {
    /// Build and factorise `I − A` from the technical-coefficient matrix.
    ///
    /// The condition number is estimated as the ratio of the extreme
    /// singular values of `I − A` and checked against
    /// [`LeontiefConfig::condition_limit`] before the factorisation is
    /// accepted. An economically consistent coefficient matrix has column
    /// sums strictly below one and passes comfortably; a singular or
    /// near-singular system indicates an inconsistent input dataset and is
    /// fatal.
    ///
    /// # Errors
    ///
    /// - [`ModelError::MatrixShape`] when `coefficients` is not square or
    ///   is empty
    /// - [`ModelError::Singular`] when `I − A` has no inverse
    /// - [`ModelError::IllConditioned`] when the condition estimate exceeds
    ///   the configured limit
    pub fn factorize(
        coefficients: &DMatrix<f64>,
        config: &LeontiefConfig,
    ) -> Result<Self, ModelError> {
        let n = coefficients.nrows();
        if coefficients.ncols() != n || n == 0 {
            // An empty system has no Leontief inverse; reject it here rather
            // than asking the SVD for singular values of a 0x0 matrix.
            return Err(ModelError::MatrixShape {
                array: "coefficients",
                expected_rows: n.max(1),
                expected_cols: n.max(1),
                rows: n,
                cols: coefficients.ncols(),
            });
        }

        let system = DMatrix::identity(n, n) - coefficients;

        let singular_values = system.singular_values();
        let sigma_max = singular_values.max();
        let sigma_min = singular_values.min();
        if !sigma_min.is_finite() || sigma_min <= 0.0 {
            return Err(ModelError::Singular);
        }
        let condition_estimate = sigma_max / sigma_min;
        if condition_estimate > config.condition_limit {
            return Err(ModelError::IllConditioned {
                estimate: condition_estimate,
                limit: config.condition_limit,
            });
        }

        let lu = system.lu();
        if !lu.is_invertible() {
            return Err(ModelError::Singular);
        }

        Ok(Self {
            lu,
            condition_estimate,
        })
    }

    /// Estimated condition number of `I − A`.
    pub fn condition_estimate(&self) -> f64 {
        self.condition_estimate
    }

    /// Materialise the total-requirements matrix `L = (I − A)⁻¹`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Singular`] if the factorisation turns out to be
    /// numerically non-invertible despite passing the condition check.
    pub fn inverse(&self) -> Result<DMatrix<f64>, ModelError> {
        self.lu.try_inverse().ok_or(ModelError::Singular)
    }

    /// Solve `(I − A) X = rhs` through the cached factorisation.
    ///
    /// Equivalent to `L × rhs` without forming `L`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Singular`] if back-substitution fails.
    pub fn solve(&self, rhs: &DMatrix<f64>) -> Result<DMatrix<f64>, ModelError> {
        self.lu.solve(rhs).ok_or(ModelError::Singular)
    }
}
