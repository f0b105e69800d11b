//! Closed-form degree distributions computed from the degree sequence.
//!
//! Each calculator is the exact limit of one of the samplers in
//! [`crate::sampling`]. The edge-end and degree-biased calculators describe
//! the same distribution by two routes: counting both ends of every edge, and
//! size-biasing the node degree PMF. They agree to within floating-point
//! rounding on every graph with at least one edge.

use std::{collections::HashMap, fmt};

use serde::Serialize;

use crate::{
    distribution::Pmf,
    error::{GraphError, ParadoxError, Result},
    graph::{GraphView, NodeId},
};

/// Names one of the closed-form distributions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticDistribution {
    /// [`node_degree_distribution`].
    NodeDegree,
    /// [`edge_degree_distribution`].
    EdgeDegree,
    /// [`degree_biased_distribution`].
    DegreeBiased,
    /// [`friend_degree_distribution`].
    FriendDegree,
    /// [`friend_of_friend_degree_distribution`].
    FriendOfFriendDegree,
}

impl AnalyticDistribution {
    /// Every distribution in presentation order.
    pub const ALL: [Self; 5] = [
        Self::NodeDegree,
        Self::EdgeDegree,
        Self::DegreeBiased,
        Self::FriendDegree,
        Self::FriendOfFriendDegree,
    ];

    /// Stable name used in diagnostics and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NodeDegree => "node_degree",
            Self::EdgeDegree => "edge_degree",
            Self::DegreeBiased => "degree_biased",
            Self::FriendDegree => "friend_degree",
            Self::FriendOfFriendDegree => "friend_of_friend_degree",
        }
    }

    /// Whether the distribution is only defined on graphs with edges.
    #[must_use]
    pub const fn needs_edges(self) -> bool {
        !matches!(self, Self::NodeDegree)
    }

    /// Computes the distribution for `graph`.
    ///
    /// # Errors
    /// Propagates the error of the selected calculator.
    pub fn compute<G: GraphView>(self, graph: &G) -> Result<Pmf> {
        match self {
            Self::NodeDegree => node_degree_distribution(graph),
            Self::EdgeDegree => edge_degree_distribution(graph),
            Self::DegreeBiased => degree_biased_distribution(graph),
            Self::FriendDegree => friend_degree_distribution(graph),
            Self::FriendOfFriendDegree => friend_of_friend_degree_distribution(graph),
        }
    }
}

impl fmt::Display for AnalyticDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Degree PMF of a uniformly chosen node, isolated nodes included.
///
/// # Errors
/// Returns [`ParadoxError::EmptyGraph`] when the graph has no nodes.
///
/// # Examples
/// ```
/// use paradox_core::{AdjacencyGraph, node_degree_distribution};
///
/// let star = AdjacencyGraph::from_edges("star", [(1, 2), (1, 3), (1, 4)])?;
/// let pmf = node_degree_distribution(&star)?;
/// assert_eq!(pmf.mass(1), 0.75);
/// assert_eq!(pmf.mass(3), 0.25);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn node_degree_distribution<G: GraphView>(graph: &G) -> Result<Pmf> {
    let degrees = graph
        .degree_sequence()
        .map_err(|error| ParadoxError::graph(graph.name(), error))?;
    if degrees.is_empty() {
        return Err(ParadoxError::empty_graph(graph.name()));
    }
    Pmf::from_sample(&degrees)
}

/// Degree PMF of a uniformly chosen edge end.
///
/// Every edge `{u, v}` adds one unit of mass at `degree(u)` and one at
/// `degree(v)`; the total is normalised by `2 * edge_count`.
///
/// # Errors
/// Returns [`ParadoxError::UnsamplableGraph`] when the graph has no edges.
///
/// # Examples
/// ```
/// use paradox_core::{AdjacencyGraph, edge_degree_distribution};
///
/// let star = AdjacencyGraph::from_edges("star", [(1, 2), (1, 3), (1, 4)])?;
/// let pmf = edge_degree_distribution(&star)?;
/// assert_eq!(pmf.mass(1), 0.5);
/// assert_eq!(pmf.mass(3), 0.5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn edge_degree_distribution<G: GraphView>(graph: &G) -> Result<Pmf> {
    require_edges(graph, "edge_degree_distribution")?;
    let mut weights = Vec::with_capacity(graph.edge_count().saturating_mul(2));
    for (u, v) in graph.edges() {
        weights.push((degree_of(graph, u)?, 1.0));
        weights.push((degree_of(graph, v)?, 1.0));
    }
    Pmf::from_weights(weights)
}

/// Node degree PMF reweighted by degree and renormalised.
///
/// Equal to [`edge_degree_distribution`]: a node of degree `k` is the end of
/// exactly `k` edges.
///
/// # Errors
/// Returns [`ParadoxError::UnsamplableGraph`] when the graph has no edges.
pub fn degree_biased_distribution<G: GraphView>(graph: &G) -> Result<Pmf> {
    require_edges(graph, "degree_biased_distribution")?;
    node_degree_distribution(graph)?.size_biased()
}

/// Degree PMF of a friend reached by a uniform non-isolated node followed by
/// a uniform neighbour.
///
/// Each node `u` of degree `f >= 1` sends mass `1 / (|N| * f)` to the degree
/// of each of its neighbours. Isolated nodes send nothing, so the raw masses
/// sum to the non-isolated fraction of `N`; the result is renormalised to one.
///
/// # Errors
/// Returns [`ParadoxError::UnsamplableGraph`] when the graph has no edges.
pub fn friend_degree_distribution<G: GraphView>(graph: &G) -> Result<Pmf> {
    require_edges(graph, "friend_degree_distribution")?;
    let reach = friend_reach(graph)?;
    let weights = graph
        .nodes()
        .zip(reach)
        .filter(|&(_, mass)| mass > 0.0)
        .map(|(node, mass)| -> Result<(usize, f64)> {
            Ok((degree_of(graph, node)?, mass))
        })
        .collect::<Result<Vec<_>>>()?;
    Pmf::from_weights(weights)
}

/// Degree PMF of a friend of a friend: the [`friend_degree_distribution`]
/// walk followed by one more uniform neighbour step.
///
/// # Errors
/// Returns [`ParadoxError::UnsamplableGraph`] when the graph has no edges.
pub fn friend_of_friend_degree_distribution<G: GraphView>(graph: &G) -> Result<Pmf> {
    require_edges(graph, "friend_of_friend_degree_distribution")?;
    let reach = friend_reach(graph)?;
    let mut weights = Vec::new();
    for (friend, mass) in graph.nodes().zip(reach) {
        if mass <= 0.0 {
            continue;
        }
        let neighbours = neighbours_of(graph, friend)?;
        let share = mass / neighbours.len() as f64;
        for &next in neighbours {
            weights.push((degree_of(graph, next)?, share));
        }
    }
    Pmf::from_weights(weights)
}

/// Probability of reaching each node, in enumeration order, by a uniform
/// node draw followed by a uniform neighbour step.
fn friend_reach<G: GraphView>(graph: &G) -> Result<Vec<f64>> {
    let positions: HashMap<NodeId, usize> = graph
        .nodes()
        .enumerate()
        .map(|(position, node)| (node, position))
        .collect();
    let node_count = graph.node_count() as f64;
    let mut reach = vec![0.0; positions.len()];
    for node in graph.nodes() {
        let neighbours = neighbours_of(graph, node)?;
        if neighbours.is_empty() {
            continue;
        }
        let share = 1.0 / (node_count * neighbours.len() as f64);
        for friend in neighbours {
            let slot = positions
                .get(friend)
                .and_then(|&position| reach.get_mut(position))
                .ok_or_else(|| {
                    ParadoxError::graph(graph.name(), GraphError::InvalidNode { node: *friend })
                })?;
            *slot += share;
        }
    }
    Ok(reach)
}

fn require_edges<G: GraphView>(graph: &G, operation: &'static str) -> Result<()> {
    if graph.edge_count() == 0 {
        return Err(ParadoxError::unsamplable(graph.name(), operation));
    }
    Ok(())
}

fn degree_of<G: GraphView>(graph: &G, node: NodeId) -> Result<usize> {
    graph
        .degree(node)
        .map_err(|error| ParadoxError::graph(graph.name(), error))
}

fn neighbours_of<G: GraphView>(graph: &G, node: NodeId) -> Result<&[NodeId]> {
    graph
        .neighbors(node)
        .map_err(|error| ParadoxError::graph(graph.name(), error))
}
