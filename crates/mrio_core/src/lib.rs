//! # mrio_core: Numeric Foundation for MRIO Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! mrio_core is the bottom layer of the workspace, providing:
//! - Guarded division with a uniform non-finite-to-zero policy (`math::guarded`)
//! - Region index mapping over the region-major sector layout (`types::regions`)
//! - Dimension errors for partition construction (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other mrio_* crates, with minimal external
//! dependencies:
//! - thiserror: structured error types
//! - serde: serialisation support for core types
//!
//! ## Usage Examples
//!
//! ```rust
//! use mrio_core::math::guarded_div;
//! use mrio_core::types::RegionMap;
//!
//! // Division by zero is sanitised, never propagated
//! assert_eq!(guarded_div(3.0, 0.0), 0.0);
//! assert_eq!(guarded_div(3.0, 2.0), 1.5);
//!
//! // Two regions of three sectors each: N = 6
//! let map = RegionMap::uniform(2, 3).unwrap();
//! assert_eq!(map.total_sectors(), 6);
//! assert_eq!(map.range(1), 3..6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
