//! Degree samplers over a [`GraphView`].
//!
//! Two enumerators walk the whole population deterministically and four
//! stochastic samplers draw `n` observations with replacement from an
//! explicitly supplied random source. No sampler keeps state between calls:
//! invoking one again restarts it.
//!
//! | sampler | draw | limit |
//! |---|---|---|
//! | [`sample_all_nodes`] | every node once | node degree PMF |
//! | [`sample_uniform_nodes`] | uniform node | node degree PMF |
//! | [`sample_all_friends`] | every (node, neighbour) pair | edge-end PMF |
//! | [`sample_friends`] | uniform non-isolated node, uniform neighbour | friend PMF |
//! | [`sample_edges`] | uniform edge, fair coin for the end | edge-end PMF |
//! | [`sample_friend_of_friend`] | friend draw, then uniform neighbour | friend-of-friend PMF |

mod strategy;

pub use strategy::SamplingStrategy;

use rand::{Rng, seq::SliceRandom};

use crate::{
    error::{GraphError, ParadoxError, Result},
    graph::{GraphView, NodeId},
};

/// Emits the degree of every node exactly once, in enumeration order.
///
/// # Errors
/// Returns [`ParadoxError::Graph`] if the view fails a degree lookup.
///
/// # Examples
/// ```
/// use paradox_core::{AdjacencyGraph, sample_all_nodes};
///
/// let star = AdjacencyGraph::from_edges("star", [(1, 2), (1, 3), (1, 4)])?;
/// assert_eq!(sample_all_nodes(&star)?, vec![3, 1, 1, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn sample_all_nodes<G: GraphView>(graph: &G) -> Result<Vec<usize>> {
    let degrees = graph.degree_sequence().map_err(wrap(graph))?;
    record_draws(SamplingStrategy::AllNodes, degrees.len());
    Ok(degrees)
}

/// Draws `n` nodes uniformly with replacement, isolated nodes included, and
/// emits their degrees.
///
/// # Errors
/// Returns [`ParadoxError::EmptyGraph`] when the graph has no nodes.
pub fn sample_uniform_nodes<G, R>(graph: &G, n: usize, rng: &mut R) -> Result<Vec<usize>>
where
    G: GraphView,
    R: Rng + ?Sized,
{
    // A uniform node's degree is a uniform draw from the degree sequence.
    let degrees = graph.degree_sequence().map_err(wrap(graph))?;
    if degrees.is_empty() {
        return Err(ParadoxError::empty_graph(graph.name()));
    }
    let sample = (0..n)
        .map(|_| degrees.choose(rng).copied())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ParadoxError::empty_graph(graph.name()))?;
    record_draws(SamplingStrategy::UniformNodes, sample.len());
    Ok(sample)
}

/// Emits `degree(v)` for every node `u` and every neighbour `v` of `u`.
///
/// Each edge contributes both of its endpoint degrees, so the result holds
/// exactly `2 * edge_count` observations. An edgeless graph therefore yields
/// an empty sample rather than [`ParadoxError::UnsamplableGraph`]; the
/// enumeration is complete, just empty. Callers that need observations, such
/// as [`crate::Analysis::run`], skip this sampler on edgeless graphs.
///
/// # Errors
/// Returns [`ParadoxError::Graph`] if the view fails a lookup. Never returns
/// [`ParadoxError::UnsamplableGraph`].
///
/// # Examples
/// ```
/// use paradox_core::{AdjacencyGraph, GraphView, sample_all_friends};
///
/// let star = AdjacencyGraph::from_edges("star", [(1, 2), (1, 3), (1, 4)])?;
/// let friends = sample_all_friends(&star)?;
/// assert_eq!(friends.len(), 2 * star.edge_count());
/// assert_eq!(friends, vec![1, 1, 1, 3, 3, 3]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn sample_all_friends<G: GraphView>(graph: &G) -> Result<Vec<usize>> {
    let mut degrees = Vec::with_capacity(graph.edge_count().saturating_mul(2));
    for node in graph.nodes() {
        for &friend in graph.neighbors(node).map_err(wrap(graph))? {
            degrees.push(graph.degree(friend).map_err(wrap(graph))?);
        }
    }
    record_draws(SamplingStrategy::AllFriends, degrees.len());
    Ok(degrees)
}

/// Draws `n` friends: a uniform node among those with at least one
/// neighbour, then a uniform neighbour of it. Emits the friend's degree.
///
/// This is not an edge-uniform draw; low-degree nodes pick their neighbours
/// with more weight per edge than high-degree nodes do.
///
/// # Errors
/// Returns [`ParadoxError::UnsamplableGraph`] when no node has a neighbour.
pub fn sample_friends<G, R>(graph: &G, n: usize, rng: &mut R) -> Result<Vec<usize>>
where
    G: GraphView,
    R: Rng + ?Sized,
{
    let operation = SamplingStrategy::Friends.label();
    let sources = friend_sources(graph, operation)?;
    let sample = (0..n)
        .map(|_| {
            let friend = draw_friend(&sources, rng)
                .ok_or_else(|| ParadoxError::unsamplable(graph.name(), operation))?;
            graph.degree(friend).map_err(wrap(graph))
        })
        .collect::<Result<Vec<_>>>()?;
    record_draws(SamplingStrategy::Friends, sample.len());
    Ok(sample)
}

/// Draws `n` edge ends: a uniform edge, then an independent fair coin to pick
/// one of its two endpoints. Emits that endpoint's degree.
///
/// # Errors
/// Returns [`ParadoxError::UnsamplableGraph`] when the graph has no edges.
pub fn sample_edges<G, R>(graph: &G, n: usize, rng: &mut R) -> Result<Vec<usize>>
where
    G: GraphView,
    R: Rng + ?Sized,
{
    let operation = SamplingStrategy::Edges.label();
    let edges: Vec<(NodeId, NodeId)> = graph.edges().collect();
    if edges.is_empty() {
        return Err(ParadoxError::unsamplable(graph.name(), operation));
    }
    let sample = (0..n)
        .map(|_| {
            let &(u, v) = edges
                .choose(rng)
                .ok_or_else(|| ParadoxError::unsamplable(graph.name(), operation))?;
            let end = if rng.gen_bool(0.5) { u } else { v };
            graph.degree(end).map_err(wrap(graph))
        })
        .collect::<Result<Vec<_>>>()?;
    record_draws(SamplingStrategy::Edges, sample.len());
    Ok(sample)
}

/// Draws `n` friends of friends: the [`sample_friends`] draw reaches `v`,
/// then a uniform neighbour `w` of `v` is chosen and `degree(w)` emitted.
///
/// `v` was reached along an edge, so it always has a neighbour.
///
/// # Errors
/// Returns [`ParadoxError::UnsamplableGraph`] when no node has a neighbour.
pub fn sample_friend_of_friend<G, R>(graph: &G, n: usize, rng: &mut R) -> Result<Vec<usize>>
where
    G: GraphView,
    R: Rng + ?Sized,
{
    let operation = SamplingStrategy::FriendOfFriend.label();
    let sources = friend_sources(graph, operation)?;
    let sample = (0..n)
        .map(|_| {
            let friend = draw_friend(&sources, rng)
                .ok_or_else(|| ParadoxError::unsamplable(graph.name(), operation))?;
            let friend_of_friend = graph
                .neighbors(friend)
                .map_err(wrap(graph))?
                .choose(rng)
                .copied()
                .ok_or_else(|| ParadoxError::unsamplable(graph.name(), operation))?;
            graph.degree(friend_of_friend).map_err(wrap(graph))
        })
        .collect::<Result<Vec<_>>>()?;
    record_draws(SamplingStrategy::FriendOfFriend, sample.len());
    Ok(sample)
}

/// Collects the neighbour lists of every non-isolated node.
fn friend_sources<'g, G: GraphView>(
    graph: &'g G,
    operation: &'static str,
) -> Result<Vec<&'g [NodeId]>> {
    let mut sources = Vec::new();
    for node in graph.nodes() {
        let neighbours = graph.neighbors(node).map_err(wrap(graph))?;
        if !neighbours.is_empty() {
            sources.push(neighbours);
        }
    }
    if sources.is_empty() {
        return Err(ParadoxError::unsamplable(graph.name(), operation));
    }
    Ok(sources)
}

fn draw_friend<R: Rng + ?Sized>(sources: &[&[NodeId]], rng: &mut R) -> Option<NodeId> {
    sources.choose(rng)?.choose(rng).copied()
}

fn wrap<G: GraphView>(graph: &G) -> impl Fn(GraphError) -> ParadoxError + '_ {
    move |error| ParadoxError::graph(graph.name(), error)
}

#[cfg(feature = "metrics")]
fn record_draws(strategy: SamplingStrategy, draws: usize) {
    metrics::counter!("paradox_sampler_draws_total", "sampler" => strategy.label())
        .increment(draws as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_draws(_strategy: SamplingStrategy, _draws: usize) {}
