//! Core module: capability traits and container wrappers.

pub mod traits;
pub mod wrappers;

pub use traits::{SampleSet, Vector};
