//! Degree sampler benchmarks.
//!
//! Measures each sampler on seeded Barabási–Albert graphs, isolating the
//! draw loop from graph construction.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use paradox_benches::{
    error::BenchSetupError,
    graphs::scale_free,
    params::{GraphBenchParams, SamplingBenchParams},
};
use paradox_core::{SamplingStrategy, stream_rng};

/// Seed used for graph generation and sampler streams.
const SEED: u64 = 42;

/// Graph sizes to benchmark.
const NODE_COUNTS: &[usize] = &[1_000, 10_000];

/// Edges attached by each new node.
const EDGES_PER_NODE: usize = 3;

/// Draws per stochastic sampler.
const SAMPLE_SIZE: usize = 10_000;

fn samplers_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    for strategy in SamplingStrategy::ALL {
        let mut group = c.benchmark_group(strategy.label());
        group.sample_size(20);
        if strategy.is_stochastic() {
            group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));
        }

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

            group.bench_with_input(
                BenchmarkId::from_parameter(params),
                &graph,
                |b, graph| {
                    let mut rng = stream_rng(SEED, 1);
                    b.iter(|| strategy.sample(graph, SAMPLE_SIZE, &mut rng));
                },
            );
        }

        group.finish();
    }
    Ok(())
}

fn samplers(c: &mut Criterion) {
    if let Err(err) = samplers_impl(c) {
        panic!("sampler benchmark setup failed: {err}");
    }
}

criterion_group!(benches, samplers);
criterion_main!(benches);
