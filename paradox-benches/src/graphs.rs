//! Seeded graph fixtures for benchmarks.

use paradox_core::{AdjacencyGraph, generate, stream_rng};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Builds the scale-free graph described by `params` from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for a zero node count and
/// [`BenchSetupError::Paradox`] when the generator rejects the shape.
pub fn scale_free(params: GraphBenchParams, seed: u64) -> Result<AdjacencyGraph, BenchSetupError> {
    if params.node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "node_count",
        });
    }
    let mut rng = stream_rng(seed, 0);
    Ok(generate::barabasi_albert(
        params.node_count,
        params.edges_per_node,
        &mut rng,
    )?)
}
