// src/graph/builder.rs
//! Graph construction: pairwise co-appearance accumulation per record.
//!
//! Work per record is O(n²) in cast size, so total cost is dominated by
//! records with very large ensemble casts.

use colored::Colorize;

use super::store::CoStarGraph;
use crate::error::Result;
use crate::record::MovieRecord;

/// Counters accumulated while folding a record stream into the graph.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildStats {
    pub records: usize,
    pub increments_attempted: usize,
    pub self_pairs_rejected: usize,
}

/// Folds a stream of movie records into the graph.
///
/// Every cast member is registered as a node (singleton casts
/// contribute nodes but no edges), then each unordered pair of cast
/// positions is visited exactly once with the first-index forward-only
/// scheme: `(cast[i], cast[j])` for all `i < j`. Pairs are keyed by
/// identifier, so duplicate display names cannot merge two actors.
///
/// A duplicated identifier within one cast list would produce a
/// self-pair; the store rejects it and the builder warns, counts it,
/// and moves on. One bad record is a data quality issue, not a reason
/// to abort the batch.
///
/// # Errors
/// Propagates any store error other than the self-loop rejection.
pub fn build_graph<I>(records: I, graph: &mut CoStarGraph) -> Result<BuildStats>
where
    I: IntoIterator<Item = MovieRecord>,
{
    let mut stats = BuildStats::default();
    for record in records {
        stats.records += 1;
        for (id, name) in &record.actors {
            graph.upsert_node(id, name);
        }
        accumulate_pairs(&record, graph, &mut stats)?;
    }
    Ok(stats)
}

fn accumulate_pairs(
    record: &MovieRecord,
    graph: &mut CoStarGraph,
    stats: &mut BuildStats,
) -> Result<()> {
    let cast = &record.actors;
    for i in 0..cast.len() {
        for j in (i + 1)..cast.len() {
            stats.increments_attempted += 1;
            match graph.increment_edge(&cast[i].0, &cast[j].0) {
                Ok(_) => {}
                Err(e) if e.is_self_loop() => {
                    stats.self_pairs_rejected += 1;
                    warn_self_pair(record, &cast[i].0);
                }
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}

fn warn_self_pair(record: &MovieRecord, actor: &str) {
    let title = record.title.as_deref().unwrap_or("<untitled>");
    eprintln!(
        "{} duplicate cast entry for {actor} in {title:?}, self-pair skipped",
        "warning:".yellow().bold(),
    );
}
