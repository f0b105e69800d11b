//! Degree correlation across edges.
//!
//! Undefined inputs (no edges, or a constant coordinate) are reported as
//! [`ParadoxError::DegenerateInput`]; no NaN sentinel is ever returned.

use crate::{
    error::{DegenerateReason, ParadoxError, Result},
    graph::GraphView,
};

/// Returns one `(degree(u), degree(v))` pair per edge, oriented as
/// [`GraphView::edges`] yields the edge.
///
/// # Errors
/// Returns [`ParadoxError::Graph`] if a degree lookup fails.
pub fn degree_pairs<G: GraphView>(graph: &G) -> Result<Vec<(usize, usize)>> {
    graph
        .edges()
        .map(|(u, v)| {
            let du = graph.degree(u);
            let dv = graph.degree(v);
            du.and_then(|du| dv.map(|dv| (du, dv)))
                .map_err(|error| ParadoxError::graph(graph.name(), error))
        })
        .collect()
}

/// Pearson correlation coefficient of two index-matched coordinate lists.
///
/// # Errors
/// Returns [`ParadoxError::DegenerateInput`] when the lists differ in
/// length, are empty, or either has zero variance.
///
/// # Examples
/// ```
/// use paradox_core::pearson;
///
/// let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])?;
/// assert!((r - 1.0).abs() < 1e-12);
/// assert!(pearson(&[1.0, 1.0], &[2.0, 3.0]).is_err());
/// # Ok::<(), paradox_core::ParadoxError>(())
/// ```
pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(degenerate(DegenerateReason::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        }));
    }
    if xs.is_empty() {
        return Err(degenerate(DegenerateReason::NoObservations));
    }
    let count = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / count;
    let mean_y = ys.iter().sum::<f64>() / count;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx <= 0.0 || syy <= 0.0 {
        return Err(degenerate(DegenerateReason::ZeroVariance));
    }
    let r = sxy / (sxx.sqrt() * syy.sqrt());
    if !r.is_finite() {
        return Err(degenerate(DegenerateReason::ZeroVariance));
    }
    Ok(r.clamp(-1.0, 1.0))
}

/// Pearson correlation between the degrees at the two ends of every edge.
///
/// Positive values mean high-degree nodes tend to link to each other;
/// negative values mean hubs tend to link to low-degree nodes.
///
/// # Errors
/// Returns [`ParadoxError::DegenerateInput`] when the graph has no edges or
/// either coordinate list is constant, for example on a regular graph.
///
/// # Examples
/// ```
/// use paradox_core::{AdjacencyGraph, degree_correlation};
///
/// let path = AdjacencyGraph::from_edges("path", [(1, 2), (2, 3), (3, 4)])?;
/// assert!((degree_correlation(&path)? + 0.5).abs() < 1e-12);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn degree_correlation<G: GraphView>(graph: &G) -> Result<f64> {
    let pairs = degree_pairs(graph)?;
    let (xs, ys): (Vec<f64>, Vec<f64>) = pairs
        .into_iter()
        .map(|(du, dv)| (du as f64, dv as f64))
        .unzip();
    pearson(&xs, &ys)
}

const fn degenerate(reason: DegenerateReason) -> ParadoxError {
    ParadoxError::DegenerateInput { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::{
        AdjacencyGraph,
        test_utils::{cycle_graph, star_graph, star_with_tail},
    };

    #[rstest]
    fn pairs_follow_edge_orientation() {
        let pairs = degree_pairs(&star_graph()).expect("lookups succeed");
        assert_eq!(pairs, vec![(3, 1), (3, 1), (3, 1)]);
    }

    #[rstest]
    fn regular_graph_is_degenerate() {
        let err = degree_correlation(&cycle_graph(6)).expect_err("constant degrees");
        assert_eq!(
            err,
            ParadoxError::DegenerateInput {
                reason: DegenerateReason::ZeroVariance
            }
        );
    }

    #[rstest]
    fn star_is_degenerate_in_fixed_orientation() {
        // Every pair is (hub, leaf), so both coordinate lists are constant.
        let err = degree_correlation(&star_graph()).expect_err("constant coordinates");
        assert!(matches!(err, ParadoxError::DegenerateInput { .. }));
    }

    #[rstest]
    fn edgeless_graph_has_no_observations() {
        let mut builder = AdjacencyGraph::builder("dust");
        builder.add_node(1);
        let err = degree_correlation(&builder.build()).expect_err("no edges");
        assert_eq!(
            err,
            ParadoxError::DegenerateInput {
                reason: DegenerateReason::NoObservations
            }
        );
    }

    #[rstest]
    fn hub_and_spoke_graph_is_disassortative() {
        let r = degree_correlation(&star_with_tail()).expect("heterogeneous degrees");
        assert!(r < 0.0, "expected negative correlation, got {r}");
        assert!(r >= -1.0);
    }

    #[rstest]
    #[case::perfect(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0], 1.0)]
    #[case::inverse(vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0], -1.0)]
    #[case::uncorrelated(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, -1.0, -1.0, 1.0], 0.0)]
    fn pearson_matches_known_values(
        #[case] xs: Vec<f64>,
        #[case] ys: Vec<f64>,
        #[case] expected: f64,
    ) {
        let r = pearson(&xs, &ys).expect("well-defined input");
        assert!((r - expected).abs() < 1e-12, "got {r}, expected {expected}");
    }

    #[rstest]
    fn pearson_rejects_mismatched_lengths() {
        let err = pearson(&[1.0, 2.0], &[1.0]).expect_err("lengths differ");
        assert_eq!(
            err,
            ParadoxError::DegenerateInput {
                reason: DegenerateReason::LengthMismatch { left: 2, right: 1 }
            }
        );
    }
}
