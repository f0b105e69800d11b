//! Benchmark support crate for paradox.
//!
//! Provides graph fixtures and parameter types used by the Criterion
//! benchmarks for the degree samplers, the closed-form distributions and
//! the full analysis pipeline.

pub mod error;
pub mod graphs;
pub mod params;
