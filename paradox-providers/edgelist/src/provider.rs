//! Edge-list provider and its [`GraphView`] delegation.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::bufread::MultiGzDecoder;
use paradox_core::{AdjacencyGraph, GraphError, GraphView, NodeId};
use tracing::{Span, debug, field, instrument};

use crate::{errors::EdgeListError, parse::parse_edges};

/// Leading bytes of every gzip member.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Undirected simple graph loaded from an edge list.
///
/// # Examples
/// ```
/// use paradox_core::GraphView;
/// use paradox_providers_edgelist::EdgeListProvider;
///
/// let text = "# friends\n1 2\n1 3\n3 1\n";
/// let provider = EdgeListProvider::try_from_reader("demo", text.as_bytes())?;
/// assert_eq!(provider.node_count(), 3);
/// assert_eq!(provider.edge_count(), 2);
/// assert_eq!(provider.duplicates(), 1);
/// # Ok::<(), paradox_providers_edgelist::EdgeListError>(())
/// ```
#[derive(Debug)]
pub struct EdgeListProvider {
    graph: AdjacencyGraph,
    duplicates: usize,
}

impl EdgeListProvider {
    /// Loads the edge list at `path`, decompressing gzip input transparently.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] if the file cannot be read and the
    /// parse errors of [`Self::try_from_reader`] otherwise.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Parses an edge list from `reader`, decompressing gzip input
    /// transparently.
    ///
    /// # Errors
    /// Returns [`EdgeListError::MissingEndpoint`],
    /// [`EdgeListError::InvalidNodeId`] or [`EdgeListError::SelfLoop`] for a
    /// malformed line and [`EdgeListError::EmptyInput`] when no edge is read.
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        load(name.into(), reader)
    }

    /// Number of repeated edges merged while loading.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Borrows the loaded graph.
    #[must_use]
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Consumes the provider, returning the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> AdjacencyGraph {
        self.graph
    }
}

#[instrument(
    name = "edgelist.load",
    err,
    skip(name, reader),
    fields(
        graph = %name,
        compressed = field::Empty,
        nodes = field::Empty,
        edges = field::Empty,
        duplicates = field::Empty,
    ),
)]
fn load<R: BufRead>(name: String, mut reader: R) -> Result<EdgeListProvider, EdgeListError> {
    let compressed = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    Span::current().record("compressed", compressed);
    let parsed = if compressed {
        parse_edges(name, BufReader::new(MultiGzDecoder::new(reader)))?
    } else {
        parse_edges(name, reader)?
    };
    let span = Span::current();
    span.record("nodes", parsed.graph.node_count());
    span.record("edges", parsed.graph.edge_count());
    span.record("duplicates", parsed.duplicates);
    if parsed.duplicates > 0 {
        debug!(
            duplicates = parsed.duplicates,
            "merged repeated edges while loading",
        );
    }
    debug!(skipped_lines = parsed.skipped_lines, "edge list loaded");
    Ok(EdgeListProvider {
        graph: parsed.graph,
        duplicates: parsed.duplicates,
    })
}

impl GraphView for EdgeListProvider {
    fn name(&self) -> &str {
        self.graph.name()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.graph.contains(node)
    }

    fn neighbors(&self, node: NodeId) -> Result<&[NodeId], GraphError> {
        self.graph.neighbors(node)
    }

    fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph.edges()
    }
}
