//! Error types for region partition construction.

use thiserror::Error;

/// Errors raised when building a [`crate::types::RegionMap`].
///
/// # Variants
/// - `NoRegions`: the partition would contain zero regions
/// - `EmptyRegion`: a region would contain zero sectors
///
/// # Examples
/// ```
/// use mrio_core::types::{PartitionError, RegionMap};
///
/// let err = RegionMap::uniform(0, 3).unwrap_err();
/// assert_eq!(err, PartitionError::NoRegions);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// The partition contains no regions.
    #[error("region partition must contain at least one region")]
    NoRegions,

    /// A region contains no sectors.
    #[error("region {region} contains no sectors")]
    EmptyRegion {
        /// Index of the offending region.
        region: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_regions_display() {
        let err = PartitionError::NoRegions;
        assert_eq!(
            format!("{}", err),
            "region partition must contain at least one region"
        );
    }

    #[test]
    fn test_empty_region_display() {
        let err = PartitionError::EmptyRegion { region: 4 };
        assert_eq!(format!("{}", err), "region 4 contains no sectors");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PartitionError::NoRegions;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PartitionError::EmptyRegion { region: 1 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
