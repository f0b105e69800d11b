//! Adjacency-list graph used by providers, generators and tests.

use std::collections::{HashMap, HashSet};

use crate::error::GraphError;

use super::{GraphView, NodeId};

/// Immutable undirected simple graph stored as per-node neighbour lists.
///
/// Nodes enumerate in first-insertion order and neighbour lists keep the
/// order in which edges were added.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph {
    name: String,
    ids: Vec<NodeId>,
    positions: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Starts building a graph with the given display name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> AdjacencyGraphBuilder {
        AdjacencyGraphBuilder::new(name)
    }

    /// Builds a graph from an edge list, silently merging duplicate edges.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when an edge joins a node to itself.
    ///
    /// # Examples
    /// ```
    /// use paradox_core::{AdjacencyGraph, GraphView};
    ///
    /// let graph = AdjacencyGraph::from_edges("tri", [(0, 1), (1, 2), (2, 0), (1, 0)])?;
    /// assert_eq!(graph.edge_count(), 3);
    /// # Ok::<(), paradox_core::GraphError>(())
    /// ```
    pub fn from_edges(
        name: impl Into<String>,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Result<Self, GraphError> {
        let mut builder = AdjacencyGraphBuilder::new(name);
        for (u, v) in edges {
            builder.add_edge(u, v)?;
        }
        Ok(builder.build())
    }

    fn position(&self, node: NodeId) -> Result<usize, GraphError> {
        self.positions
            .get(&node)
            .copied()
            .ok_or(GraphError::InvalidNode { node })
    }
}

impl GraphView for AdjacencyGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_count(&self) -> usize {
        self.ids.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.positions.contains_key(&node)
    }

    fn neighbors(&self, node: NodeId) -> Result<&[NodeId], GraphError> {
        let position = self.position(node)?;
        self.adjacency
            .get(position)
            .map(Vec::as_slice)
            .ok_or(GraphError::InvalidNode { node })
    }

    fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        // Emit each edge from the endpoint enumerated first.
        self.ids
            .iter()
            .zip(&self.adjacency)
            .enumerate()
            .flat_map(move |(position, (&u, neighbours))| {
                neighbours
                    .iter()
                    .filter(move |&&v| {
                        self.positions.get(&v).is_some_and(|&p| p > position)
                    })
                    .map(move |&v| (u, v))
            })
    }
}

/// Incremental constructor for [`AdjacencyGraph`].
///
/// # Examples
/// ```
/// use paradox_core::{AdjacencyGraph, GraphView};
///
/// let mut builder = AdjacencyGraph::builder("demo");
/// builder.add_node(7);
/// assert!(builder.add_edge(1, 2)?);
/// assert!(!builder.add_edge(2, 1)?);
/// let graph = builder.build();
/// assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![7, 1, 2]);
/// assert_eq!(graph.degree(7)?, 0);
/// # Ok::<(), paradox_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct AdjacencyGraphBuilder {
    name: String,
    ids: Vec<NodeId>,
    positions: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<NodeId>>,
    seen: HashSet<(usize, usize)>,
}

impl AdjacencyGraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ids: Vec::new(),
            positions: HashMap::new(),
            adjacency: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Inserts `node` if absent and returns its enumeration position.
    pub fn add_node(&mut self, node: NodeId) -> usize {
        if let Some(&position) = self.positions.get(&node) {
            return position;
        }
        let position = self.ids.len();
        self.ids.push(node);
        self.adjacency.push(Vec::new());
        self.positions.insert(node, position);
        position
    }

    /// Inserts the undirected edge `{u, v}`, adding missing endpoints.
    ///
    /// Returns `false` when the edge was already present.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `u == v`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<bool, GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        let pu = self.add_node(u);
        let pv = self.add_node(v);
        if !self.seen.insert((pu.min(pv), pu.max(pv))) {
            return Ok(false);
        }
        if let Some(list) = self.adjacency.get_mut(pu) {
            list.push(v);
        }
        if let Some(list) = self.adjacency.get_mut(pv) {
            list.push(u);
        }
        Ok(true)
    }

    /// Returns the number of distinct edges inserted so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.seen.len()
    }

    /// Finalises the graph.
    #[must_use]
    pub fn build(self) -> AdjacencyGraph {
        AdjacencyGraph {
            name: self.name,
            edge_count: self.seen.len(),
            ids: self.ids,
            positions: self.positions,
            adjacency: self.adjacency,
        }
    }
}
