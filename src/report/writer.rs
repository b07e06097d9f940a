// src/report/writer.rs
//! Timestamped CSV report writers.
//!
//! Reports land in the output directory (created if missing) via a
//! temp-file-and-rename, so a prior successful report is never left
//! half-overwritten. The in-memory graph stays valid on export failure
//! and the export can simply be retried.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{CostarError, Result};
use crate::graph::CoStarGraph;
use crate::similarity::{Metric, SimilarActor};

/// `<dir>/<prefix>_<YYYYmmdd_HHMMSS>.csv`
#[must_use]
pub fn timestamped_path(dir: &Path, prefix: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{prefix}_{stamp}.csv"))
}

/// Writes the edge list report: one row per distinct edge, display
/// names in the outer columns and the literal `<->` between them.
/// Multiplicity is collapsed to presence; the weight is not re-exposed.
/// An empty graph still yields a valid header-only file.
///
/// # Errors
/// Returns `CostarError::Io` when the destination is not writable.
pub fn export_edge_list(graph: &CoStarGraph, path: &Path) -> Result<()> {
    let mut out = String::from("left_actor_name,<->,right_actor_name\n");
    for (a, b, _weight) in graph.edges() {
        let left = graph.node_name(a).unwrap_or(a);
        let right = graph.node_name(b).unwrap_or(b);
        out.push_str(&csv_field(left));
        out.push_str(",<->,");
        out.push_str(&csv_field(right));
        out.push('\n');
    }
    write_atomic(path, &out)
}

/// Writes the ranked similar-actor report with the metric named in the
/// distance column header.
///
/// # Errors
/// Returns `CostarError::Io` when the destination is not writable.
pub fn export_similar_actors(
    ranked: &[SimilarActor],
    metric: Metric,
    path: &Path,
) -> Result<()> {
    let mut out = format!("actor_id,actor_name,{}_distance\n", metric.label());
    for actor in ranked {
        out.push_str(&csv_field(&actor.id));
        out.push(',');
        out.push_str(&csv_field(&actor.name));
        out.push_str(&format!(",{}\n", actor.distance));
    }
    write_atomic(path, &out)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| CostarError::Io {
        source,
        path: dir.to_path_buf(),
    })?;
    let tmp = path.with_extension("csv.tmp");
    fs::write(&tmp, contents).map_err(|source| CostarError::Io {
        source,
        path: tmp.clone(),
    })?;
    fs::rename(&tmp, path).map_err(|source| CostarError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(())
}

// Display names can carry commas or quotes ("Robert Downey Jr., Sr.").
fn csv_field(raw: &str) -> String {
    if raw.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
