//! Whole-graph friendship-paradox analysis.
//!
//! [`Analysis::run`] drives every sampler against one graph, compares each
//! empirical CDF with its closed-form limit and gathers the summary
//! statistics into a serialisable [`ParadoxReport`].

use std::num::NonZeroUsize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    analytic::AnalyticDistribution,
    correlation::degree_correlation,
    distribution::Cdf,
    error::{ParadoxError, Result},
    graph::GraphView,
    rng::stream_rng,
    sampling::SamplingStrategy,
};

/// Sample size used when none is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 1_000;
/// Base seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Configures and constructs [`Analysis`] instances.
///
/// # Examples
/// ```
/// use paradox_core::AnalysisBuilder;
///
/// let analysis = AnalysisBuilder::new()
///     .with_sample_size(500)
///     .with_seed(7)
///     .build()?;
/// assert_eq!(analysis.sample_size().get(), 500);
/// assert_eq!(analysis.seed(), 7);
/// # Ok::<(), paradox_core::ParadoxError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AnalysisBuilder {
    sample_size: usize,
    seed: u64,
}

impl Default for AnalysisBuilder {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl AnalysisBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of draws taken by each stochastic sampler.
    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Returns the configured sample size.
    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Overrides the base seed from which per-sampler streams are derived.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured base seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration and constructs an [`Analysis`].
    ///
    /// # Errors
    /// Returns [`ParadoxError::InvalidSampleSize`] when the sample size is
    /// zero.
    pub fn build(self) -> Result<Analysis> {
        let sample_size = NonZeroUsize::new(self.sample_size).ok_or(
            ParadoxError::InvalidSampleSize {
                got: self.sample_size,
            },
        )?;
        Ok(Analysis {
            sample_size,
            seed: self.seed,
        })
    }
}

/// Runs every sampler and analytic calculator against a graph.
///
/// # Examples
/// ```
/// use paradox_core::{AnalysisBuilder, SamplingStrategy, generate};
///
/// let graph = generate::star(3)?;
/// let report = AnalysisBuilder::new().with_sample_size(200).build()?.run(&graph)?;
/// assert_eq!(report.node_count, 4);
/// assert!((report.node_mean - 1.5).abs() < 1e-12);
/// assert!(report.friend_mean.is_some_and(|mean| (mean - 2.5).abs() < 1e-12));
/// assert!(report.sample(SamplingStrategy::AllFriends).is_some());
/// # Ok::<(), paradox_core::ParadoxError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Analysis {
    sample_size: NonZeroUsize,
    seed: u64,
}

impl Analysis {
    /// Returns the number of draws taken by each stochastic sampler.
    #[must_use]
    pub fn sample_size(&self) -> NonZeroUsize {
        self.sample_size
    }

    /// Returns the base seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Analyses `graph`.
    ///
    /// Sampler `i` in [`SamplingStrategy::ALL`] draws from the stream
    /// [`crate::derive_seed`]`(seed, i)`, so reports are reproducible and
    /// independent of scheduling. Samplers and calculators that need edges
    /// are skipped on edgeless graphs.
    ///
    /// # Errors
    /// Returns [`ParadoxError::EmptyGraph`] when the graph has no nodes and
    /// propagates any sampler or calculator failure.
    #[instrument(
        name = "paradox.analysis.run",
        err,
        skip(self, graph),
        fields(
            graph = %graph.name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            sample_size = self.sample_size.get(),
            seed = self.seed,
            skipped = field::Empty,
        ),
    )]
    pub fn run<G: GraphView + Sync>(&self, graph: &G) -> Result<ParadoxReport> {
        if graph.is_empty() {
            warn!(graph = graph.name(), "graph has no nodes");
            return Err(ParadoxError::empty_graph(graph.name()));
        }
        let has_edges = graph.edge_count() > 0;

        let limits = AnalyticDistribution::ALL
            .into_iter()
            .filter(|limit| has_edges || !limit.needs_edges())
            .map(|limit| {
                let pmf = limit.compute(graph)?;
                Ok(LimitReport {
                    distribution: limit,
                    mean: pmf.mean(),
                    cdf: pmf.to_cdf(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let (runnable, skipped): (Vec<_>, Vec<_>) = SamplingStrategy::ALL
            .into_iter()
            .enumerate()
            .partition(|(_, strategy)| has_edges || !strategy.needs_edges());
        let skipped: Vec<SamplingStrategy> = skipped.into_iter().map(|(_, s)| s).collect();
        if !skipped.is_empty() {
            warn!(
                graph = graph.name(),
                skipped = skipped.len(),
                "graph has no edges; skipping friend and edge samplers",
            );
        }
        Span::current().record("skipped", skipped.len());

        let samples = self.run_samplers(graph, &runnable, &limits)?;

        let correlation = if has_edges {
            match degree_correlation(graph) {
                Ok(r) => Some(r),
                Err(ParadoxError::DegenerateInput { reason }) => {
                    warn!(graph = graph.name(), %reason, "degree correlation is undefined");
                    None
                }
                Err(other) => return Err(other),
            }
        } else {
            None
        };

        let mean_of = |distribution| {
            limits
                .iter()
                .find(|limit| limit.distribution == distribution)
                .map(|limit| limit.mean)
        };
        let node_mean = mean_of(AnalyticDistribution::NodeDegree).unwrap_or_default();
        let friend_mean = mean_of(AnalyticDistribution::FriendDegree);
        info!(
            graph = graph.name(),
            node_mean,
            friend_mean = ?friend_mean,
            degree_correlation = ?correlation,
            "analysis complete",
        );

        Ok(ParadoxReport {
            graph: graph.name().to_owned(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            sample_size: self.sample_size.get(),
            seed: self.seed,
            node_mean,
            friend_mean,
            degree_correlation: correlation,
            limits,
            samples,
            skipped,
        })
    }

    fn run_samplers<G: GraphView + Sync>(
        &self,
        graph: &G,
        runnable: &[(usize, SamplingStrategy)],
        limits: &[LimitReport],
    ) -> Result<Vec<SampleReport>> {
        let draw = |&(stream, strategy): &(usize, SamplingStrategy)| {
            self.run_sampler(graph, stream, strategy, limits)
        };
        #[cfg(feature = "parallel")]
        {
            runnable.par_iter().map(draw).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            runnable.iter().map(draw).collect()
        }
    }

    fn run_sampler<G: GraphView>(
        &self,
        graph: &G,
        stream: usize,
        strategy: SamplingStrategy,
        limits: &[LimitReport],
    ) -> Result<SampleReport> {
        let mut rng = stream_rng(self.seed, stream);
        let sample = strategy.sample(graph, self.sample_size.get(), &mut rng)?;
        let cdf = Cdf::from_sample(&sample)?;
        let target = strategy.limit_distribution();
        let ks_distance = match limits.iter().find(|limit| limit.distribution == target) {
            Some(limit) => cdf.ks_distance(&limit.cdf),
            None => cdf.ks_distance(&strategy.limit(graph)?.to_cdf()),
        };
        let mean = cdf.mean();
        debug!(
            sampler = strategy.label(),
            observations = sample.len(),
            mean,
            ks_distance,
            "sampler finished",
        );
        Ok(SampleReport {
            strategy,
            limit: target,
            observations: sample.len(),
            mean,
            ks_distance,
            cdf,
        })
    }
}

/// Closed-form distribution entry of a [`ParadoxReport`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LimitReport {
    /// Which calculator produced the distribution.
    pub distribution: AnalyticDistribution,
    /// Expected degree.
    pub mean: f64,
    /// Cumulative distribution.
    pub cdf: Cdf,
}

/// Empirical distribution entry of a [`ParadoxReport`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleReport {
    /// Sampler that produced the observations.
    pub strategy: SamplingStrategy,
    /// Closed-form distribution the sampler converges to.
    pub limit: AnalyticDistribution,
    /// Number of observations drawn.
    pub observations: usize,
    /// Sample mean degree.
    pub mean: f64,
    /// KS distance between the sample CDF and [`Self::limit`].
    pub ks_distance: f64,
    /// Empirical CDF.
    pub cdf: Cdf,
}

/// Outcome of [`Analysis::run`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParadoxReport {
    /// Name of the analysed graph.
    pub graph: String,
    /// Number of nodes.
    pub node_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Draws per stochastic sampler.
    pub sample_size: usize,
    /// Base seed.
    pub seed: u64,
    /// Mean degree of a uniform node.
    pub node_mean: f64,
    /// Mean degree of a friend; absent on edgeless graphs.
    pub friend_mean: Option<f64>,
    /// Degree correlation across edges; absent when undefined.
    pub degree_correlation: Option<f64>,
    /// Closed-form distributions.
    pub limits: Vec<LimitReport>,
    /// Empirical distributions, in [`SamplingStrategy::ALL`] order.
    pub samples: Vec<SampleReport>,
    /// Samplers skipped because the graph has no edges.
    pub skipped: Vec<SamplingStrategy>,
}

impl ParadoxReport {
    /// Returns the entry for `strategy`, if it ran.
    #[must_use]
    pub fn sample(&self, strategy: SamplingStrategy) -> Option<&SampleReport> {
        self.samples.iter().find(|entry| entry.strategy == strategy)
    }

    /// Returns the entry for `distribution`, if it was computed.
    #[must_use]
    pub fn limit(&self, distribution: AnalyticDistribution) -> Option<&LimitReport> {
        self.limits
            .iter()
            .find(|entry| entry.distribution == distribution)
    }

    /// Whether a friend has a strictly higher expected degree than a node.
    #[must_use]
    pub fn paradox_holds(&self) -> bool {
        self.friend_mean.is_some_and(|friend| friend > self.node_mean)
    }
}
