pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod record;
pub mod report;
pub mod similarity;
