//! Paradox core library.
//!
//! Samples and computes node, edge and friend degree distributions of
//! undirected simple graphs to measure the friendship paradox: a random
//! neighbour tends to have a higher degree than a random node.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod analytic;
mod correlation;
mod distribution;
mod error;
pub mod generate;
mod graph;
mod rng;
mod sampling;

#[cfg(test)]
mod test_utils;

pub use crate::{
    analysis::{
        Analysis, AnalysisBuilder, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, LimitReport, ParadoxReport,
        SampleReport,
    },
    analytic::{
        AnalyticDistribution, degree_biased_distribution, edge_degree_distribution,
        friend_degree_distribution, friend_of_friend_degree_distribution,
        node_degree_distribution,
    },
    correlation::{degree_correlation, degree_pairs, pearson},
    distribution::{Cdf, CdfPoint, MASS_TOLERANCE, Pmf, estimate_cdf},
    error::{
        DegenerateReason, GraphError, GraphErrorCode, ParadoxError, ParadoxErrorCode, Result,
    },
    graph::{AdjacencyGraph, AdjacencyGraphBuilder, GraphView, NodeId},
    rng::{derive_seed, stream_rng},
    sampling::{
        SamplingStrategy, sample_all_friends, sample_all_nodes, sample_edges,
        sample_friend_of_friend, sample_friends, sample_uniform_nodes,
    },
};
