//! Error types for the embodied-flow pipeline.

use thiserror::Error;

/// Fatal pipeline errors.
///
/// The pipeline is deterministic, so none of these are retried: the same
/// inputs would reproduce the same failure. Shape errors are raised before
/// any computation; numerical errors abort the run rather than letting a
/// poisoned inverse flow downstream.
///
/// # Variants
/// - `MatrixShape` / `VectorLength`: an input array disagrees with N = R × S
/// - `Singular`: the Leontief system `I − A` has no inverse
/// - `IllConditioned`: the condition estimate exceeds the configured limit
///
/// # Examples
/// ```
/// use mrio_model::ModelError;
///
/// let err = ModelError::VectorLength {
///     array: "total_input",
///     expected: 93,
///     got: 90,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "total_input has length 90, expected 93"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A matrix input has the wrong dimensions.
    #[error("{array} is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    MatrixShape {
        /// Name of the offending array.
        array: &'static str,
        /// Expected row count.
        expected_rows: usize,
        /// Expected column count.
        expected_cols: usize,
        /// Actual row count.
        rows: usize,
        /// Actual column count.
        cols: usize,
    },

    /// A vector input has the wrong length.
    #[error("{array} has length {got}, expected {expected}")]
    VectorLength {
        /// Name of the offending array.
        array: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// The Leontief system `I − A` is singular.
    #[error("Leontief system (I - A) is singular")]
    Singular,

    /// The Leontief system is numerically unstable beyond tolerance.
    #[error("Leontief system is ill-conditioned: estimate {estimate:.3e} exceeds limit {limit:.3e}")]
    IllConditioned {
        /// Estimated condition number of `I − A`.
        estimate: f64,
        /// Configured condition-number limit.
        limit: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_shape_display() {
        let err = ModelError::MatrixShape {
            array: "intermediate_use",
            expected_rows: 6,
            expected_cols: 6,
            rows: 6,
            cols: 5,
        };
        assert_eq!(
            format!("{}", err),
            "intermediate_use is 6x5, expected 6x6"
        );
    }

    #[test]
    fn test_vector_length_display() {
        let err = ModelError::VectorLength {
            array: "employment",
            expected: 93,
            got: 31,
        };
        assert_eq!(format!("{}", err), "employment has length 31, expected 93");
    }

    #[test]
    fn test_singular_display() {
        assert_eq!(
            format!("{}", ModelError::Singular),
            "Leontief system (I - A) is singular"
        );
    }

    #[test]
    fn test_ill_conditioned_display() {
        let err = ModelError::IllConditioned {
            estimate: 3.2e14,
            limit: 1e12,
        };
        let display = format!("{}", err);
        assert!(display.contains("3.200e14"));
        assert!(display.contains("1.000e12"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ModelError::Singular;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = ModelError::IllConditioned {
            estimate: 1e13,
            limit: 1e12,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
