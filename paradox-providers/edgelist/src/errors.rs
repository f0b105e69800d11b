use paradox_core::{GraphError, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("line {line}: expected two node identifiers")]
    MissingEndpoint { line: usize },
    #[error("line {line}: `{token}` is not a valid node identifier")]
    InvalidNodeId { line: usize, token: String },
    #[error("line {line}: self-loop on node {node} is not allowed")]
    SelfLoop { line: usize, node: NodeId },
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
    #[error("edge list contains no edges")]
    EmptyInput,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdgeListError {
    /// Stable machine-readable name of the variant.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingEndpoint { .. } => "EDGELIST_MISSING_ENDPOINT",
            Self::InvalidNodeId { .. } => "EDGELIST_INVALID_NODE_ID",
            Self::SelfLoop { .. } => "EDGELIST_SELF_LOOP",
            Self::Graph { .. } => "EDGELIST_GRAPH",
            Self::EmptyInput => "EDGELIST_EMPTY_INPUT",
            Self::Io(_) => "EDGELIST_IO",
        }
    }
}
