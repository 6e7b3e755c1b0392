//! # mrio_model: The Embodied-Flow Kernel
//!
//! ## Layer 2 (Kernel) Role
//!
//! mrio_model implements the full multi-regional input-output pipeline over a
//! validated [`InputBundle`]:
//!
//! 1. Technical coefficients from intermediate use and total input
//!    (`coefficients`)
//! 2. Factorisation of the Leontief system `I − A` (`leontief`)
//! 3. Diagonalised factor intensities, parametrised over the employment and
//!    value-added branches (`intensity`)
//! 4. Embodied sector-by-region flows (`embodied`)
//! 5. Regional aggregation and self-trade elimination (`regions_flow`)
//! 6. Bilateral net flows, exports, and imports (`netflow`)
//!
//! [`pipeline::MrioPipeline`] orchestrates all six stages and runs stages 3-6
//! once per factor branch, sharing a single factorisation of the Leontief
//! system between the branches.
//!
//! The whole pipeline is a pure function of its inputs: nothing is mutated
//! after construction and repeated runs over the same bundle produce
//! identical results.
//!
//! ## Sanitisation Policy
//!
//! Every elementwise division goes through
//! [`mrio_core::math::guarded_div`]: a zero denominator or otherwise
//! non-finite ratio becomes exactly zero. This is documented behaviour for
//! sectors with zero total input or output, not an error. Singularity of the
//! Leontief system, by contrast, is fatal and surfaces as
//! [`ModelError::Singular`] or [`ModelError::IllConditioned`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod bundle;
mod error;

pub mod coefficients;
pub mod embodied;
pub mod intensity;
pub mod leontief;
pub mod netflow;
pub mod pipeline;
pub mod regions_flow;

pub use bundle::InputBundle;
pub use error::ModelError;
pub use pipeline::{BranchFlows, MrioPipeline, MrioResults};
