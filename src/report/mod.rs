// src/report/mod.rs
pub mod console;
pub mod writer;

pub use writer::{export_edge_list, export_similar_actors, timestamped_path};
