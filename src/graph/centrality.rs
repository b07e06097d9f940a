// src/graph/centrality.rs
//! Degree centrality over the co-star graph.
//!
//! Degree reflects breadth (distinct co-stars), not strength; edge
//! weights do not enter the score.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::store::CoStarGraph;

/// Computes the normalized degree for every node: distinct neighbors
/// over (node count − 1). A single-node graph scores 0 by convention.
/// Scores are ephemeral; nothing is stored back on the graph.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(graph: &CoStarGraph) -> HashMap<String, f64> {
    let n = graph.node_count();
    if n == 0 {
        return HashMap::new();
    }
    // With n == 1 the sole node has degree 0, so the divisor is moot.
    let divisor = if n > 1 { (n - 1) as f64 } else { 1.0 };
    graph
        .nodes()
        .map(|(id, _)| (id.to_string(), graph.degree(id) as f64 / divisor))
        .collect()
}

/// The `min(k, node count)` highest-scoring nodes, score descending.
/// Identifier ascending breaks ties, which makes repeated calls on the
/// same graph return the same sequence.
#[must_use]
pub fn top_k(graph: &CoStarGraph, k: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = degree_centrality(graph).into_iter().collect();
    ranked.sort_by(|(a_id, a_score), (b_id, b_score)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a_id.cmp(b_id))
    });
    ranked.truncate(k);
    ranked
}
