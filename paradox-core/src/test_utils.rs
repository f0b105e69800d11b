//! Shared test utilities for `paradox-core`.

use paradox_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::{prelude::*, test_runner::Config as ProptestConfig};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::{AdjacencyGraph, NodeId, generate};

/// Builds a standard proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Star `{1: [2, 3, 4]}`.
pub(crate) fn star_graph() -> AdjacencyGraph {
    AdjacencyGraph::from_edges("star", [(1, 2), (1, 3), (1, 4)]).expect("star edges are valid")
}

/// Cycle on nodes `0..nodes`.
pub(crate) fn cycle_graph(nodes: u64) -> AdjacencyGraph {
    AdjacencyGraph::from_edges("cycle", (0..nodes).map(|node| (node, (node + 1) % nodes)))
        .expect("cycle edges are valid")
}

/// Hub `0` with five leaves, one of which continues into a two-edge path:
/// `0-1, 0-2, 0-3, 0-4, 0-5, 5-6, 6-7`.
pub(crate) fn star_with_tail() -> AdjacencyGraph {
    AdjacencyGraph::from_edges(
        "star_with_tail",
        [(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (5, 6), (6, 7)],
    )
    .expect("edges are valid")
}

/// Topology families used by property tests.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(crate) enum Topology {
    /// Preferential attachment with one or two edges per node.
    #[weight(3)]
    ScaleFree,
    /// Independent edges with probability 0.15; may leave nodes isolated.
    #[weight(3)]
    Sparse,
    /// Ring lattice.
    #[weight(1)]
    Cycle,
    /// Single hub.
    #[weight(1)]
    Star,
    /// Clique.
    #[weight(1)]
    Complete,
}

/// Small graphs drawn from every [`Topology`].
pub(crate) fn graph_strategy() -> impl Strategy<Value = AdjacencyGraph> {
    (any::<Topology>(), 3_usize..40, any::<u64>())
        .prop_map(|(topology, nodes, seed)| build_topology(topology, nodes, seed))
}

fn build_topology(topology: Topology, nodes: usize, seed: u64) -> AdjacencyGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    match topology {
        Topology::ScaleFree => {
            let m = rng.gen_range(1..=2);
            generate::barabasi_albert(nodes, m, &mut rng).expect("m < nodes")
        }
        Topology::Sparse => {
            let mut builder = AdjacencyGraph::builder("sparse");
            for node in 0..nodes as NodeId {
                builder.add_node(node);
            }
            for u in 0..nodes as NodeId {
                for v in (u + 1)..nodes as NodeId {
                    if rng.gen_bool(0.15) {
                        builder.add_edge(u, v).expect("distinct endpoints");
                    }
                }
            }
            builder.build()
        }
        Topology::Cycle => generate::cycle(nodes).expect("nodes >= 3"),
        Topology::Star => generate::star(nodes - 1).expect("leaves >= 1"),
        Topology::Complete => generate::complete(nodes).expect("nodes >= 1"),
    }
}
