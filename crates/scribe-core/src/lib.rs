//! Scribe Core
//!
//! Shared math, geometry, logging and profiling utilities for the scribe crates.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
