//! Named sampler selection.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::{analytic::AnalyticDistribution, distribution::Pmf, error::Result, graph::GraphView};

/// Identifies one of the degree samplers.
///
/// # Examples
/// ```
/// use paradox_core::{AdjacencyGraph, SamplingStrategy};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let graph = AdjacencyGraph::from_edges("pair", [(1, 2)])?;
/// let mut rng = SmallRng::seed_from_u64(1);
/// let sample = SamplingStrategy::Edges.sample(&graph, 10, &mut rng)?;
/// assert_eq!(sample, vec![1; 10]);
/// assert_eq!(SamplingStrategy::Edges.label(), "sample_edges");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingStrategy {
    /// Every node once.
    AllNodes,
    /// Uniform nodes with replacement.
    UniformNodes,
    /// Every neighbour of every node.
    AllFriends,
    /// Uniform non-isolated node, then a uniform neighbour.
    Friends,
    /// Uniform edge, then a uniform endpoint.
    Edges,
    /// Friend draw followed by one more uniform neighbour step.
    FriendOfFriend,
}

impl SamplingStrategy {
    /// Every strategy in presentation order.
    pub const ALL: [Self; 6] = [
        Self::AllNodes,
        Self::UniformNodes,
        Self::AllFriends,
        Self::Friends,
        Self::Edges,
        Self::FriendOfFriend,
    ];

    /// Stable name used in diagnostics and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllNodes => "sample_all_nodes",
            Self::UniformNodes => "sample_uniform_nodes",
            Self::AllFriends => "sample_all_friends",
            Self::Friends => "sample_friends",
            Self::Edges => "sample_edges",
            Self::FriendOfFriend => "sample_friend_of_friend",
        }
    }

    /// Whether the strategy draws at random rather than enumerating.
    #[must_use]
    pub const fn is_stochastic(self) -> bool {
        !matches!(self, Self::AllNodes | Self::AllFriends)
    }

    /// Whether the strategy requires at least one edge.
    #[must_use]
    pub const fn needs_edges(self) -> bool {
        !matches!(self, Self::AllNodes | Self::UniformNodes)
    }

    /// Runs the sampler. Enumerating strategies ignore `n` and `rng`.
    ///
    /// # Errors
    /// Propagates the error of the selected sampler.
    pub fn sample<G, R>(self, graph: &G, n: usize, rng: &mut R) -> Result<Vec<usize>>
    where
        G: GraphView,
        R: Rng + ?Sized,
    {
        match self {
            Self::AllNodes => super::sample_all_nodes(graph),
            Self::UniformNodes => super::sample_uniform_nodes(graph, n, rng),
            Self::AllFriends => super::sample_all_friends(graph),
            Self::Friends => super::sample_friends(graph, n, rng),
            Self::Edges => super::sample_edges(graph, n, rng),
            Self::FriendOfFriend => super::sample_friend_of_friend(graph, n, rng),
        }
    }

    /// Names the closed-form distribution the sampler converges to.
    #[must_use]
    pub const fn limit_distribution(self) -> AnalyticDistribution {
        match self {
            Self::AllNodes | Self::UniformNodes => AnalyticDistribution::NodeDegree,
            Self::AllFriends | Self::Edges => AnalyticDistribution::EdgeDegree,
            Self::Friends => AnalyticDistribution::FriendDegree,
            Self::FriendOfFriend => AnalyticDistribution::FriendOfFriendDegree,
        }
    }

    /// Computes the distribution the sampler converges to as `n` grows.
    ///
    /// # Errors
    /// Propagates the error of the matching analytic calculator.
    pub fn limit<G: GraphView>(self, graph: &G) -> Result<Pmf> {
        self.limit_distribution().compute(graph)
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
