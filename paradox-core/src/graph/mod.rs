//! Read-only graph view abstraction consumed by the samplers and calculators.

mod adjacency;

pub use adjacency::{AdjacencyGraph, AdjacencyGraphBuilder};

use crate::error::GraphError;

/// Identifier of a node in a [`GraphView`].
pub type NodeId = u64;

/// Read-only adjacency view over a fixed undirected simple graph.
///
/// Implementations must be symmetric: whenever `v` appears in
/// `neighbors(u)`, `u` appears in `neighbors(v)`. Enumeration order is fixed
/// for the lifetime of the view so repeated calls to [`GraphView::nodes`] and
/// [`GraphView::edges`] yield identical sequences.
///
/// # Examples
/// ```
/// use paradox_core::{AdjacencyGraph, GraphError, GraphView};
///
/// let graph = AdjacencyGraph::from_edges("path", [(1, 2), (2, 3)])?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.degree(2)?, 2);
/// assert_eq!(graph.neighbors(1)?, &[2]);
/// assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
/// assert!(graph.degree(9).is_err());
/// # Ok::<(), GraphError>(())
/// ```
pub trait GraphView {
    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns the number of nodes, isolated nodes included.
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Enumerates every node exactly once in the view's native order.
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Reports whether `node` belongs to the graph.
    fn contains(&self, node: NodeId) -> bool;

    /// Returns the neighbours of `node`; empty iff the node is isolated.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when `node` is not in the graph.
    fn neighbors(&self, node: NodeId) -> Result<&[NodeId], GraphError>;

    /// Enumerates every undirected edge exactly once.
    fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_;

    /// Returns the number of neighbours of `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when `node` is not in the graph.
    fn degree(&self, node: NodeId) -> Result<usize, GraphError> {
        self.neighbors(node).map(<[NodeId]>::len)
    }

    /// Returns whether the graph has no nodes.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns the degree of every node in enumeration order.
    ///
    /// # Errors
    /// Propagates [`GraphError`] from [`GraphView::degree`]; a consistent
    /// view never fails here.
    fn degree_sequence(&self) -> Result<Vec<usize>, GraphError> {
        self.nodes().map(|node| self.degree(node)).collect()
    }
}
