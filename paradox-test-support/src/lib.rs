//! Shared test utilities used across paradox crates.

pub mod ci;
pub mod tracing;
