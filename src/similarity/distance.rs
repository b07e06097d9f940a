// src/similarity/distance.rs
//! Distance metrics and the similarity ranking sweep.

use std::cmp::Ordering;

use clap::ValueEnum;
use rayon::prelude::*;
use serde::Deserialize;

use super::matrix::GenreMatrix;
use crate::error::{CostarError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Cosine,
    Euclidean,
}

impl Metric {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Euclidean => "euclidean",
        }
    }

    fn distance(self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Metric::Cosine => cosine_distance(a, b),
            Metric::Euclidean => euclidean_distance(a, b),
        }
    }
}

/// One ranked neighbor of the query actor. Smaller distance is more
/// similar.
#[derive(Debug, Clone)]
pub struct SimilarActor {
    pub id: String,
    pub name: String,
    pub distance: f64,
}

/// Ranks all other actors by distance to the query actor's genre
/// vector, ascending, with identifier ascending as the tie-break. The
/// query actor itself is excluded.
///
/// The distance sweep is data-parallel; the matrix is read-only here.
///
/// # Errors
/// Returns `CostarError::ActorNotFound` when the query identifier has
/// no row in the matrix.
pub fn rank_similar(
    matrix: &GenreMatrix,
    query_id: &str,
    metric: Metric,
    k: usize,
) -> Result<Vec<SimilarActor>> {
    let query = matrix
        .vector(query_id)
        .ok_or_else(|| CostarError::ActorNotFound {
            id: query_id.to_string(),
        })?;

    let others: Vec<&str> = matrix.actor_ids().filter(|id| *id != query_id).collect();
    let mut ranked: Vec<SimilarActor> = others
        .into_par_iter()
        .map(|id| {
            let vector = matrix.vector(id).unwrap_or_default();
            SimilarActor {
                id: id.to_string(),
                name: matrix.actor_name(id).unwrap_or(id).to_string(),
                distance: metric.distance(&query, &vector),
            }
        })
        .collect();

    ranked.sort_by(|x, y| {
        x.distance
            .partial_cmp(&y.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| x.id.cmp(&y.id))
    });
    ranked.truncate(k);
    Ok(ranked)
}

/// 1 − cos(a, b). A zero vector has no direction; treat it as maximally
/// distant rather than dividing by zero.
fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        1.0
    } else {
        1.0 - dot / (norm_a * norm_b)
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
