//! Synthetic graph generators.
//!
//! Generated graphs number their nodes `0..n` and are consumed exactly like
//! graphs loaded from disk.

use rand::{Rng, seq::SliceRandom};

use crate::{
    error::{ParadoxError, Result},
    graph::{AdjacencyGraph, AdjacencyGraphBuilder, NodeId},
};

/// Grows a Barabási–Albert preferential-attachment graph.
///
/// Starts from `edges_per_node` isolated nodes. Each subsequent node joins
/// `edges_per_node` distinct existing nodes, chosen with probability
/// proportional to their current degree. The result has `nodes` nodes and
/// `(nodes - edges_per_node) * edges_per_node` edges.
///
/// # Errors
/// Returns [`ParadoxError::InvalidGeneratorParameter`] unless
/// `1 <= edges_per_node < nodes` and the `2 * nodes * edges_per_node` edge
/// ends fit in a `usize`.
///
/// # Examples
/// ```
/// use paradox_core::{GraphView, generate};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = generate::barabasi_albert(50, 2, &mut rng)?;
/// assert_eq!(graph.node_count(), 50);
/// assert_eq!(graph.edge_count(), 96);
/// # Ok::<(), paradox_core::ParadoxError>(())
/// ```
pub fn barabasi_albert<R>(nodes: usize, edges_per_node: usize, rng: &mut R) -> Result<AdjacencyGraph>
where
    R: Rng + ?Sized,
{
    if edges_per_node == 0 {
        return Err(invalid("edges_per_node", ">= 1", edges_per_node));
    }
    if edges_per_node >= nodes {
        return Err(invalid("nodes", "> edges_per_node", nodes));
    }
    let edge_ends = nodes
        .checked_mul(edges_per_node)
        .and_then(|product| product.checked_mul(2))
        .ok_or_else(|| invalid("nodes", "2 * nodes * edges_per_node <= usize::MAX", nodes))?;
    let name = format!("barabasi_albert(n={nodes}, m={edges_per_node})");
    let mut builder = with_nodes(&name, nodes);

    // Every edge end is pushed here, so a uniform pick is degree-proportional.
    let mut repeated: Vec<NodeId> = Vec::with_capacity(edge_ends);
    let mut targets: Vec<NodeId> = (0..edges_per_node as NodeId).collect();
    for source in edges_per_node as NodeId..nodes as NodeId {
        for &target in &targets {
            connect(&mut builder, &name, source, target)?;
        }
        repeated.extend_from_slice(&targets);
        repeated.extend(std::iter::repeat_n(source, edges_per_node));
        targets = distinct_picks(&repeated, edges_per_node, rng);
    }
    Ok(builder.build())
}

/// Builds the cycle `0 - 1 - ... - (nodes - 1) - 0`.
///
/// # Errors
/// Returns [`ParadoxError::InvalidGeneratorParameter`] when `nodes < 3`.
pub fn cycle(nodes: usize) -> Result<AdjacencyGraph> {
    if nodes < 3 {
        return Err(invalid("nodes", ">= 3", nodes));
    }
    let name = format!("cycle(n={nodes})");
    let mut builder = with_nodes(&name, nodes);
    for node in 0..nodes as NodeId {
        connect(&mut builder, &name, node, (node + 1) % nodes as NodeId)?;
    }
    Ok(builder.build())
}

/// Builds a star with hub `0` and leaves `1..=leaves`.
///
/// # Errors
/// Returns [`ParadoxError::InvalidGeneratorParameter`] when `leaves == 0`.
pub fn star(leaves: usize) -> Result<AdjacencyGraph> {
    if leaves == 0 {
        return Err(invalid("leaves", ">= 1", leaves));
    }
    let name = format!("star(leaves={leaves})");
    let mut builder = with_nodes(&name, leaves + 1);
    for leaf in 1..=leaves as NodeId {
        connect(&mut builder, &name, 0, leaf)?;
    }
    Ok(builder.build())
}

/// Builds the complete graph on `nodes` nodes.
///
/// # Errors
/// Returns [`ParadoxError::InvalidGeneratorParameter`] when `nodes == 0`.
pub fn complete(nodes: usize) -> Result<AdjacencyGraph> {
    if nodes == 0 {
        return Err(invalid("nodes", ">= 1", nodes));
    }
    let name = format!("complete(n={nodes})");
    let mut builder = with_nodes(&name, nodes);
    for u in 0..nodes as NodeId {
        for v in (u + 1)..nodes as NodeId {
            connect(&mut builder, &name, u, v)?;
        }
    }
    Ok(builder.build())
}

fn with_nodes(name: &str, nodes: usize) -> AdjacencyGraphBuilder {
    let mut builder = AdjacencyGraph::builder(name);
    for node in 0..nodes as NodeId {
        builder.add_node(node);
    }
    builder
}

fn connect(builder: &mut AdjacencyGraphBuilder, name: &str, u: NodeId, v: NodeId) -> Result<()> {
    builder
        .add_edge(u, v)
        .map(|_| ())
        .map_err(|error| ParadoxError::graph(name, error))
}

/// Draws from `pool` until `count` distinct values are collected, keeping
/// them in draw order.
fn distinct_picks<R: Rng + ?Sized>(pool: &[NodeId], count: usize, rng: &mut R) -> Vec<NodeId> {
    let mut picks = Vec::with_capacity(count);
    while picks.len() < count {
        let Some(&node) = pool.choose(rng) else {
            break;
        };
        if !picks.contains(&node) {
            picks.push(node);
        }
    }
    picks
}

const fn invalid(parameter: &'static str, constraint: &'static str, got: usize) -> ParadoxError {
    ParadoxError::InvalidGeneratorParameter {
        parameter,
        constraint,
        got,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::{GraphView, ParadoxErrorCode};

    #[rstest]
    #[case(10, 1)]
    #[case(30, 3)]
    #[case(200, 4)]
    fn barabasi_albert_has_expected_size(#[case] nodes: usize, #[case] m: usize) {
        let mut rng = SmallRng::seed_from_u64(11);
        let graph = barabasi_albert(nodes, m, &mut rng).expect("parameters are valid");
        assert_eq!(graph.node_count(), nodes);
        assert_eq!(graph.edge_count(), (nodes - m) * m);
        let degrees = graph.degree_sequence().expect("nodes resolve");
        assert!(degrees.iter().skip(m).all(|&degree| degree >= m));
    }

    #[rstest]
    fn barabasi_albert_is_reproducible() {
        let first = barabasi_albert(64, 2, &mut SmallRng::seed_from_u64(5)).expect("valid");
        let second = barabasi_albert(64, 2, &mut SmallRng::seed_from_u64(5)).expect("valid");
        let a: Vec<_> = first.edges().collect();
        let b: Vec<_> = second.edges().collect();
        assert_eq!(a, b);
    }

    #[rstest]
    fn barabasi_albert_grows_hubs() {
        let mut rng = SmallRng::seed_from_u64(3);
        let graph = barabasi_albert(2_000, 2, &mut rng).expect("valid");
        let degrees = graph.degree_sequence().expect("nodes resolve");
        let max = degrees.iter().copied().max().unwrap_or_default();
        assert!(max > 20, "expected a hub, largest degree was {max}");
    }

    #[rstest]
    #[case::no_edges(5, 0, "edges_per_node")]
    #[case::too_dense(3, 3, "nodes")]
    fn barabasi_albert_rejects_bad_parameters(
        #[case] nodes: usize,
        #[case] m: usize,
        #[case] expected: &str,
    ) {
        let err = barabasi_albert(nodes, m, &mut SmallRng::seed_from_u64(0))
            .expect_err("parameters are invalid");
        assert_eq!(err.code(), ParadoxErrorCode::InvalidGeneratorParameter);
        assert!(matches!(
            err,
            ParadoxError::InvalidGeneratorParameter { parameter, .. } if parameter == expected
        ));
    }

    #[rstest]
    #[case::max_nodes(usize::MAX, 2)]
    #[case::half_max_nodes(usize::MAX / 2, 3)]
    #[case::wide_attachment(usize::MAX / 4 + 1, usize::MAX / 8)]
    fn barabasi_albert_rejects_overflowing_sizes(#[case] nodes: usize, #[case] m: usize) {
        let err = barabasi_albert(nodes, m, &mut SmallRng::seed_from_u64(0))
            .expect_err("edge ends overflow usize");
        assert!(matches!(
            err,
            ParadoxError::InvalidGeneratorParameter { parameter: "nodes", got, .. } if got == nodes
        ));
    }

    #[rstest]
    fn fixed_topologies_have_expected_shape() {
        let ring = cycle(7).expect("valid");
        assert_eq!(ring.edge_count(), 7);
        assert_eq!(ring.degree_sequence().expect("resolves"), vec![2; 7]);

        let hub = star(4).expect("valid");
        assert_eq!(hub.degree_sequence().expect("resolves"), vec![4, 1, 1, 1, 1]);

        let clique = complete(5).expect("valid");
        assert_eq!(clique.edge_count(), 10);
        assert_eq!(clique.degree_sequence().expect("resolves"), vec![4; 5]);
    }

    #[rstest]
    #[case::short_cycle(cycle(2))]
    #[case::leafless_star(star(0))]
    #[case::empty_clique(complete(0))]
    fn fixed_topologies_reject_degenerate_sizes(#[case] result: Result<AdjacencyGraph>) {
        assert!(matches!(
            result,
            Err(ParadoxError::InvalidGeneratorParameter { .. })
        ));
    }
}
