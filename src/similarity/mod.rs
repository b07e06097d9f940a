// src/similarity/mod.rs
//! Genre-based actor similarity: a separate analytics path over the
//! same record stream, independent of the co-star graph.

pub mod distance;
pub mod matrix;

pub use distance::{rank_similar, Metric, SimilarActor};
pub use matrix::GenreMatrix;
