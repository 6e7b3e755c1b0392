//! Core types: the region index map and its construction errors.

mod error;
mod regions;

pub use error::PartitionError;
pub use regions::RegionMap;
