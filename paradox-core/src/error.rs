//! Error types for the paradox core library.
//!
//! Defines the graph-view and analysis error enums exposed by the public API
//! together with their stable machine-readable codes.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::GraphView`] queries or graph construction.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The queried node is not part of the graph.
    #[error("node {node} is not in the graph")]
    InvalidNode {
        /// Identifier that failed to resolve.
        node: NodeId,
    },
    /// An edge joined a node to itself.
    #[error("self-loop on node {node} is not allowed in a simple graph")]
    SelfLoop {
        /// Node named at both ends of the rejected edge.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The queried node is not part of the graph.
        InvalidNode => InvalidNode { .. } => "GRAPH_INVALID_NODE",
        /// An edge joined a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

/// Why a statistic could not be computed from its input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DegenerateReason {
    /// There were no observations to correlate.
    NoObservations,
    /// At least one coordinate list had zero variance.
    ZeroVariance,
    /// The coordinate lists had different lengths.
    LengthMismatch {
        /// Length of the first coordinate list.
        left: usize,
        /// Length of the second coordinate list.
        right: usize,
    },
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoObservations => f.write_str("no observations"),
            Self::ZeroVariance => f.write_str("zero variance"),
            Self::LengthMismatch { left, right } => {
                write!(f, "length mismatch: left={left}, right={right}")
            }
        }
    }
}

/// Error type produced by samplers, estimators and analytic calculators.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParadoxError {
    /// The empirical estimator received no observations.
    #[error("cannot estimate a distribution from an empty sample")]
    EmptySample,
    /// The graph contains no nodes at all.
    #[error("graph `{graph}` contains no nodes")]
    EmptyGraph {
        /// Name of the empty graph.
        graph: Arc<str>,
    },
    /// A friend or edge based operation was requested on a graph without
    /// edges.
    #[error("graph `{graph}` has no edges; `{operation}` needs at least one")]
    UnsamplableGraph {
        /// Name of the graph that cannot be sampled.
        graph: Arc<str>,
        /// Sampler or calculator that was requested.
        operation: &'static str,
    },
    /// The correlation estimate is undefined for the supplied input.
    #[error("degree correlation is undefined: {reason}")]
    DegenerateInput {
        /// The degeneracy that was detected.
        reason: DegenerateReason,
    },
    /// Sample sizes must be greater than zero.
    #[error("sample_size must be at least 1 (got {got})")]
    InvalidSampleSize {
        /// The rejected sample size.
        got: usize,
    },
    /// A random graph generator received an unusable parameter.
    #[error("generator parameter `{parameter}` must satisfy {constraint} (got {got})")]
    InvalidGeneratorParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of the accepted range.
        constraint: &'static str,
        /// The rejected value.
        got: usize,
    },
    /// A [`crate::GraphView`] query failed while running an analysis.
    #[error("graph `{graph}` failed: {error}")]
    Graph {
        /// Name of the graph that produced the error.
        graph: Arc<str>,
        #[source]
        /// Underlying graph error.
        error: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ParadoxError`] variants.
    enum ParadoxErrorCode for ParadoxError {
        /// The empirical estimator received no observations.
        EmptySample => EmptySample => "PARADOX_EMPTY_SAMPLE",
        /// The graph contains no nodes at all.
        EmptyGraph => EmptyGraph { .. } => "PARADOX_EMPTY_GRAPH",
        /// A friend or edge based operation was requested on a graph without
        /// edges.
        UnsamplableGraph => UnsamplableGraph { .. } => "PARADOX_UNSAMPLABLE_GRAPH",
        /// The correlation estimate is undefined for the supplied input.
        DegenerateInput => DegenerateInput { .. } => "PARADOX_DEGENERATE_INPUT",
        /// Sample sizes must be greater than zero.
        InvalidSampleSize => InvalidSampleSize { .. } => "PARADOX_INVALID_SAMPLE_SIZE",
        /// A random graph generator received an unusable parameter.
        InvalidGeneratorParameter => InvalidGeneratorParameter { .. } => "PARADOX_INVALID_GENERATOR_PARAMETER",
        /// A [`crate::GraphView`] query failed while running an analysis.
        GraphFailure => Graph { .. } => "PARADOX_GRAPH_FAILURE",
    }
}

impl ParadoxError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a
    /// [`crate::GraphView`].
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    pub(crate) fn graph(graph: &str, error: GraphError) -> Self {
        Self::Graph {
            graph: Arc::from(graph),
            error,
        }
    }

    pub(crate) fn unsamplable(graph: &str, operation: &'static str) -> Self {
        Self::UnsamplableGraph {
            graph: Arc::from(graph),
            operation,
        }
    }

    pub(crate) fn empty_graph(graph: &str) -> Self {
        Self::EmptyGraph {
            graph: Arc::from(graph),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ParadoxError>;
