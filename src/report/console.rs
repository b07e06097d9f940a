// src/report/console.rs
//! Console summaries printed after each run.

use std::path::Path;

use colored::Colorize;

use crate::graph::{BuildStats, CoStarGraph};
use crate::record::ReadStats;
use crate::similarity::{Metric, SimilarActor};

/// Prints node/edge totals and the ranked top-K, scores at 4 decimals.
pub fn print_graph_summary(
    graph: &CoStarGraph,
    ranked: &[(String, f64)],
    read: ReadStats,
    build: &BuildStats,
    verbose: bool,
) {
    println!("Nodes: {}", graph.node_count());
    println!("Edges: {}", graph.edge_count());
    if verbose {
        println!(
            "Records: {} parsed, {} malformed, {} blank",
            read.parsed, read.malformed, read.blank
        );
        println!(
            "Increments: {} attempted, {} self-pairs rejected",
            build.increments_attempted, build.self_pairs_rejected
        );
    }
    if build.self_pairs_rejected > 0 && !verbose {
        println!(
            "{} {} self-pair(s) rejected during build",
            "note:".yellow(),
            build.self_pairs_rejected
        );
    }
    if ranked.is_empty() {
        return;
    }
    println!("{}", format!("Top {} by degree centrality:", ranked.len()).bold());
    for (id, score) in ranked {
        let name = graph.node_name(id).unwrap_or(id);
        println!("{name}: {score:.4}");
    }
}

/// Prints the query actor and its ranked neighbors with distances.
pub fn print_similar(query_id: &str, query_name: &str, metric: Metric, ranked: &[SimilarActor]) {
    println!("Query actor: {query_id} {query_name}");
    println!(
        "{}",
        format!(
            "Top {} by {} distance (smaller is more similar):",
            ranked.len(),
            metric.label()
        )
        .bold()
    );
    for actor in ranked {
        println!(
            "{} {} | {}={:.4}",
            actor.id,
            actor.name,
            metric.label(),
            actor.distance
        );
    }
}

pub fn print_report_written(path: &Path) {
    println!("{} {}", "Wrote:".green().bold(), path.display());
}
