//! End-to-end tests for the paradox analysis API over a caller-defined view.

mod common;

use common::MapGraph;
use paradox_core::{
    AnalysisBuilder, AnalyticDistribution, GraphView, ParadoxError, SamplingStrategy,
    degree_correlation, edge_degree_distribution, friend_degree_distribution,
    node_degree_distribution, sample_all_friends, sample_friends,
};
use paradox_test_support::tracing::RecordingLayer;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn star() -> MapGraph {
    MapGraph::new(&[(1, 2), (1, 3), (1, 4)])
}

#[rstest]
fn star_fixture_matches_known_distributions(star: MapGraph) {
    let nodes = node_degree_distribution(&star).expect("star has nodes");
    assert_eq!(nodes.mass(1), 0.75);
    assert_eq!(nodes.mass(3), 0.25);

    let edges = edge_degree_distribution(&star).expect("star has edges");
    assert_eq!(edges.mass(1), 0.5);
    assert_eq!(edges.mass(3), 0.5);

    let friends = friend_degree_distribution(&star).expect("star has edges");
    assert!(friends.mean() > nodes.mean());
}

#[rstest]
fn caller_views_feed_every_sampler(star: MapGraph) {
    assert_eq!(sample_all_friends(&star).expect("lookups succeed").len(), 6);
    let mut rng = SmallRng::seed_from_u64(4);
    let sample = sample_friends(&star, 100, &mut rng).expect("star has edges");
    assert!(sample.iter().all(|&degree| degree == 1 || degree == 3));
}

#[rstest]
fn star_correlation_is_degenerate(star: MapGraph) {
    let err = degree_correlation(&star).expect_err("hub-leaf pairs are constant");
    assert!(matches!(err, ParadoxError::DegenerateInput { .. }));
}

#[rstest]
fn isolated_nodes_count_for_nodes_only(star: MapGraph) {
    let graph = star.with_isolated(10).with_isolated(11);
    assert_eq!(graph.node_count(), 6);
    let report = AnalysisBuilder::new()
        .with_sample_size(500)
        .build()
        .expect("configuration is valid")
        .run(&graph)
        .expect("graph is analysable");
    let nodes = report
        .limit(AnalyticDistribution::NodeDegree)
        .expect("node distribution is always present");
    assert!((nodes.cdf.probability_at(0) - 2.0 / 6.0).abs() < 1e-12);
    let friends = report
        .limit(AnalyticDistribution::FriendDegree)
        .expect("graph has edges");
    assert_eq!(friends.cdf.probability_at(0), 0.0);
    assert!(report.paradox_holds());
}

#[rstest]
fn analysis_records_run_span(star: MapGraph) {
    let analysis = AnalysisBuilder::new()
        .with_sample_size(50)
        .build()
        .expect("configuration is valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let report = tracing::subscriber::with_default(subscriber, || analysis.run(&star))
        .expect("run must succeed");
    assert_eq!(report.samples.len(), SamplingStrategy::ALL.len());

    let spans = layer.spans();
    let run_span = spans
        .iter()
        .find(|span| span.name == "paradox.analysis.run")
        .expect("paradox.analysis.run span must exist");
    assert_eq!(run_span.fields.get("graph"), Some(&"map".to_owned()));
    assert_eq!(run_span.fields.get("edges"), Some(&"3".to_owned()));
    assert_eq!(run_span.fields.get("skipped"), Some(&"0".to_owned()));

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::WARN
            && event
                .fields
                .get("message")
                .is_some_and(|message| message.contains("degree correlation is undefined"))
    }));
}

#[rstest]
fn edgeless_analysis_warns_and_skips() {
    let graph = MapGraph::new(&[]).with_isolated(1);
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let analysis = AnalysisBuilder::new().build().expect("defaults are valid");

    let report = tracing::subscriber::with_default(subscriber, || analysis.run(&graph))
        .expect("isolated nodes are analysable");
    assert_eq!(report.skipped.len(), 4);
    assert!(layer.events().iter().any(|event| event.level == Level::WARN));
}
