//! Foundation layer: value types and math primitives.
//!
//! No dependencies on other crate layers.

pub mod math;
pub mod types;

pub use types::{AnimationSample, Waypoint};
