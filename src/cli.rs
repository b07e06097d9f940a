// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::similarity::Metric;

#[derive(Parser)]
#[command(name = "costar", version, about = "Actor co-star network analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Dataset path: line-delimited JSON, one movie per line
    #[arg(long, value_name = "FILE", global = true)]
    pub input: Option<PathBuf>,
    /// Directory CSV reports are written to
    #[arg(long, value_name = "DIR", global = true)]
    pub output_dir: Option<PathBuf>,
    /// Stop after this many records
    #[arg(long, value_name = "N", global = true)]
    pub limit: Option<usize>,
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the co-star graph and rank actors by degree centrality (default)
    Centrality {
        /// How many ranked actors to print
        #[arg(long, value_name = "K")]
        top: Option<usize>,
    },
    /// Rank the actors most similar to a query actor by genre appearances
    Similar {
        /// Query actor identifier (e.g. nm1165110)
        #[arg(long, value_name = "ID")]
        actor: Option<String>,
        #[arg(long, value_enum)]
        metric: Option<Metric>,
        /// How many neighbors to rank
        #[arg(long, value_name = "K")]
        top: Option<usize>,
    },
}
