// src/graph/mod.rs
pub mod builder;
pub mod centrality;
pub mod store;

pub use builder::{build_graph, BuildStats};
pub use store::CoStarGraph;
