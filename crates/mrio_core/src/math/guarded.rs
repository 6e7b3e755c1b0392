//! Guarded division with a uniform sanitisation policy.
//!
//! Input-output tables routinely contain sectors with zero total input or
//! zero total output, so elementwise ratios produce NaN or infinite values.
//! The documented policy is that every such value becomes exactly `0.0`,
//! applied through this one primitive rather than ad hoc at each call site.

/// Divide `numerator` by `denominator`, mapping any non-finite result to zero.
///
/// This is the single division primitive used by every coefficient and
/// intensity computation. A zero denominator, `0.0 / 0.0`, or overflow all
/// yield `0.0`, never NaN or infinity.
///
/// # Example
///
/// ```
/// use mrio_core::math::guarded_div;
///
/// assert_eq!(guarded_div(6.0, 3.0), 2.0);
/// assert_eq!(guarded_div(1.0, 0.0), 0.0);
/// assert_eq!(guarded_div(0.0, 0.0), 0.0);
/// ```
#[inline]
pub fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    sanitize(numerator / denominator)
}

/// Map a non-finite value to zero, passing finite values through unchanged.
///
/// Used when summing entries that may carry NaN from upstream statistical
/// gaps: a missing entry contributes nothing to an aggregate.
#[inline]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
