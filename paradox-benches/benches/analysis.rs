//! Closed-form distribution and full analysis benchmarks.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use paradox_benches::{
    error::BenchSetupError,
    graphs::scale_free,
    params::{GraphBenchParams, SamplingBenchParams},
};
use paradox_core::{AnalysisBuilder, AnalyticDistribution};

/// Seed used for graph generation and the analysis streams.
const SEED: u64 = 42;

/// Graph sizes to benchmark.
const NODE_COUNTS: &[usize] = &[1_000, 10_000];

/// Edges attached by each new node.
const EDGES_PER_NODE: usize = 3;

/// Draws per stochastic sampler in the full pipeline.
const SAMPLE_SIZE: usize = 1_000;

fn analytic_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    for distribution in AnalyticDistribution::ALL {
        let mut group = c.benchmark_group(distribution.label());
        group.sample_size(20);

        for &node_count in NODE_COUNTS {
            let params = GraphBenchParams {
                node_count,
                edges_per_node: EDGES_PER_NODE,
            };
            let graph = scale_free(params, SEED)?;
            group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
                b.iter(|| distribution.compute(graph));
            });
        }

        group.finish();
    }
    Ok(())
}

fn analysis_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let analysis = AnalysisBuilder::new()
        .with_sample_size(SAMPLE_SIZE)
        .with_seed(SEED)
        .build()?;
    let mut group = c.benchmark_group("analysis");
    group.sample_size(10);

    for &node_count in NODE_COUNTS {
        let graph_params = GraphBenchParams {
            node_count,
            edges_per_node: EDGES_PER_NODE,
        };
        let graph = scale_free(graph_params, SEED)?;
        let params = SamplingBenchParams {
            graph: graph_params,
            sample_size: SAMPLE_SIZE,
        };
        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| analysis.run(graph));
        });
    }

    group.finish();
    Ok(())
}

fn analytic(c: &mut Criterion) {
    if let Err(err) = analytic_impl(c) {
        panic!("analytic benchmark setup failed: {err}");
    }
}

fn analysis(c: &mut Criterion) {
    if let Err(err) = analysis_impl(c) {
        panic!("analysis benchmark setup failed: {err}");
    }
}

criterion_group!(benches, analytic, analysis);
criterion_main!(benches);
