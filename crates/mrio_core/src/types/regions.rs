//! Region index mapping over the region-major sector layout.

use super::PartitionError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Partition of the flat sector index into contiguous per-region ranges.
///
/// All pipeline matrices are indexed over a flat sector axis of length
/// N = R × S laid out region-major: the sectors of region 0 first, then
/// region 1, and so on. `RegionMap` makes that block structure explicit as a
/// `region → [start, end)` map, so aggregation logic never assumes a fixed
/// stride and regions with differing sector counts are supported.
///
/// # Examples
///
/// ```
/// use mrio_core::types::RegionMap;
///
/// let map = RegionMap::uniform(3, 2).unwrap();
/// assert_eq!(map.regions(), 3);
/// assert_eq!(map.total_sectors(), 6);
/// assert_eq!(map.range(2), 4..6);
///
/// let ragged = RegionMap::from_sizes(&[2, 1, 3]).unwrap();
/// assert_eq!(ragged.total_sectors(), 6);
/// assert_eq!(ragged.range(1), 2..3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMap {
    /// Exclusive end offset of each region's sector block; starts are implied
    /// by the previous entry (0 for region 0). Strictly increasing.
    ends: Vec<usize>,
}

impl RegionMap {
    /// Build a partition of `regions` regions with `sectors_per_region`
    /// sectors each.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::NoRegions`] when `regions == 0` and
    /// [`PartitionError::EmptyRegion`] when `sectors_per_region == 0`.
    pub fn uniform(regions: usize, sectors_per_region: usize) -> Result<Self, PartitionError> {
        if regions == 0 {
            return Err(PartitionError::NoRegions);
        }
        if sectors_per_region == 0 {
            return Err(PartitionError::EmptyRegion { region: 0 });
        }
        Ok(Self {
            ends: (1..=regions).map(|r| r * sectors_per_region).collect(),
        })
    }

    /// Build a partition from an explicit per-region sector count.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::NoRegions`] for an empty slice and
    /// [`PartitionError::EmptyRegion`] for any zero count.
    pub fn from_sizes(sizes: &[usize]) -> Result<Self, PartitionError> {
        if sizes.is_empty() {
            return Err(PartitionError::NoRegions);
        }
        let mut ends = Vec::with_capacity(sizes.len());
        let mut total = 0;
        for (region, &size) in sizes.iter().enumerate() {
            if size == 0 {
                return Err(PartitionError::EmptyRegion { region });
            }
            total += size;
            ends.push(total);
        }
        Ok(Self { ends })
    }

    /// Number of regions R in the partition.
    pub fn regions(&self) -> usize {
        self.ends.len()
    }

    /// Total number of sectors N across all regions.
    pub fn total_sectors(&self) -> usize {
        *self.ends.last().expect("partition is never empty")
    }

    /// Half-open sector index range `[start, end)` belonging to `region`.
    ///
    /// # Panics
    ///
    /// Panics if `region >= self.regions()`.
    pub fn range(&self, region: usize) -> Range<usize> {
        let start = if region == 0 { 0 } else { self.ends[region - 1] };
        start..self.ends[region]
    }

    /// Number of sectors in `region`.
    ///
    /// # Panics
    ///
    /// Panics if `region >= self.regions()`.
    pub fn sectors_in(&self, region: usize) -> usize {
        self.range(region).len()
    }

    /// Iterate over `(region, sector_range)` pairs in region order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Range<usize>)> + '_ {
        (0..self.regions()).map(move |r| (r, self.range(r)))
    }

    /// Region owning the flat sector index `sector`, if in bounds.
    pub fn region_of(&self, sector: usize) -> Option<usize> {
        if sector >= self.total_sectors() {
            return None;
        }
        Some(self.ends.partition_point(|&end| end <= sector))
    }
}
