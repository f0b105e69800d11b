//! Line-level parsing of whitespace-separated edge lists.

use std::io::BufRead;

use paradox_core::{AdjacencyGraph, AdjacencyGraphBuilder, GraphError, NodeId};

use crate::errors::EdgeListError;

/// Graph assembled from an edge list plus ingestion statistics.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub(crate) graph: AdjacencyGraph,
    pub(crate) duplicates: usize,
    pub(crate) skipped_lines: usize,
}

/// Reads `u v [ignored...]` pairs, one per line.
///
/// Blank lines and lines starting with `%` are skipped, as is anything after
/// a `#`. Repeated edges, in either orientation, are merged and counted.
pub(crate) fn parse_edges<R: BufRead>(name: String, reader: R) -> Result<Parsed, EdgeListError> {
    let mut builder = AdjacencyGraph::builder(name);
    let mut duplicates = 0_usize;
    let mut skipped_lines = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let Some((u, v)) = parse_line(&line, number)? else {
            skipped_lines += 1;
            continue;
        };
        if !insert(&mut builder, u, v, number)? {
            duplicates += 1;
        }
    }
    if builder.edge_count() == 0 {
        return Err(EdgeListError::EmptyInput);
    }
    Ok(Parsed {
        graph: builder.build(),
        duplicates,
        skipped_lines,
    })
}

/// Returns the endpoints on `line`, or `None` for comments and blanks.
pub(crate) fn parse_line(line: &str, number: usize) -> Result<Option<(NodeId, NodeId)>, EdgeListError> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() || content.starts_with('%') {
        return Ok(None);
    }
    let mut tokens = content.split_whitespace();
    let (Some(first), Some(second)) = (tokens.next(), tokens.next()) else {
        return Err(EdgeListError::MissingEndpoint { line: number });
    };
    Ok(Some((node_id(first, number)?, node_id(second, number)?)))
}

fn node_id(token: &str, line: usize) -> Result<NodeId, EdgeListError> {
    token.parse().map_err(|_| EdgeListError::InvalidNodeId {
        line,
        token: token.to_owned(),
    })
}

fn insert(
    builder: &mut AdjacencyGraphBuilder,
    u: NodeId,
    v: NodeId,
    line: usize,
) -> Result<bool, EdgeListError> {
    builder.add_edge(u, v).map_err(|error| match error {
        GraphError::SelfLoop { node } => EdgeListError::SelfLoop { line, node },
        source => EdgeListError::Graph { line, source },
    })
}
