//! Benchmark parameter types.

use std::fmt;

/// Shape of a Barabási–Albert benchmark graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Edges attached by each new node.
    pub edges_per_node: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edges_per_node)
    }
}

/// Parameters for a sampler or analysis run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingBenchParams {
    /// Graph to sample.
    pub graph: GraphBenchParams,
    /// Draws per stochastic sampler.
    pub sample_size: usize,
}

impl fmt::Display for SamplingBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},draws={}", self.graph, self.sample_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ids_are_compact() {
        let graph = GraphBenchParams {
            node_count: 1_000,
            edges_per_node: 3,
        };
        assert_eq!(graph.to_string(), "n=1000,m=3");
        let run = SamplingBenchParams {
            graph,
            sample_size: 500,
        };
        assert_eq!(run.to_string(), "n=1000,m=3,draws=500");
    }
}
