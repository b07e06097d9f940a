// src/config.rs
//! Optional `costar.toml` settings. CLI flags override file values;
//! missing or invalid files fall back to defaults with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Deserialize;

use crate::similarity::Metric;

pub const CONFIG_FILE: &str = "costar.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_top")]
    pub top: usize,
    #[serde(default)]
    pub query_actor: Option<String>,
    #[serde(default = "default_metric")]
    pub metric: Metric,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            top: default_top(),
            query_actor: None,
            metric: default_metric(),
            limit: None,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("data/movies.json")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_top() -> usize {
    10
}
fn default_metric() -> Metric {
    Metric::Cosine
}

impl Config {
    /// Loads `costar.toml` from the working directory if present.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    pub fn parse(text: &str) -> Self {
        toml::from_str(text).unwrap_or_else(|e| {
            eprintln!(
                "{} invalid {CONFIG_FILE}, using defaults: {e}",
                "warning:".yellow().bold(),
            );
            Self::default()
        })
    }
}
