//! Mathematical primitives shared by the numeric pipeline.

mod guarded;

pub use guarded::{guarded_div, sanitize};
