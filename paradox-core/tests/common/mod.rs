use std::collections::BTreeMap;

use paradox_core::{GraphError, GraphView, NodeId};

/// Graph view backed by an ordered adjacency map, as read from a fixture.
#[derive(Clone, Debug)]
pub struct MapGraph {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl MapGraph {
    /// Builds a symmetric adjacency map from an edge list.
    #[must_use]
    pub fn new(edges: &[(NodeId, NodeId)]) -> Self {
        let mut adjacency: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
        for &(u, v) in edges {
            adjacency.entry(u).or_default().push(v);
            adjacency.entry(v).or_default().push(u);
        }
        Self { adjacency }
    }

    /// Adds a node with no neighbours.
    #[must_use]
    pub fn with_isolated(mut self, node: NodeId) -> Self {
        self.adjacency.entry(node).or_default();
        self
    }
}

impl GraphView for MapGraph {
    fn name(&self) -> &str {
        "map"
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn neighbors(&self, node: NodeId) -> Result<&[NodeId], GraphError> {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(GraphError::InvalidNode { node })
    }

    fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&u, neighbours)| neighbours.iter().map(move |&v| (u, v)))
            .filter(|&(u, v)| u < v)
    }
}
