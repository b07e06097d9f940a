// src/record/mod.rs
//! Movie record model: one record per line of the input dataset.

pub mod reader;

pub use reader::{read_records, ReadStats, RecordReader};

use serde::{Deserialize, Deserializer};

/// A parsed movie record. The cast list is an ordered sequence of
/// (actor identifier, display name) pairs; identifiers are opaque
/// stable keys (`nm…` in the IMDB dump).
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_genres")]
    pub genres: Vec<String>,
    #[serde(default, alias = "casts")]
    pub actors: Vec<(String, String)>,
}

impl MovieRecord {
    /// Convenience constructor for in-memory record streams.
    #[must_use]
    pub fn with_cast(actors: Vec<(String, String)>) -> Self {
        Self {
            title: None,
            genres: Vec::new(),
            actors,
        }
    }
}

// Some dumps carry genres as a list, others as one comma-separated
// string. Both normalize to a trimmed, non-empty list.
#[derive(Deserialize)]
#[serde(untagged)]
enum GenreField {
    List(Vec<String>),
    Joined(String),
}

fn deserialize_genres<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<GenreField>::deserialize(deserializer)?;
    let items = match raw {
        Some(GenreField::List(items)) => items,
        Some(GenreField::Joined(joined)) => {
            joined.split(',').map(str::to_string).collect()
        }
        None => Vec::new(),
    };
    Ok(items
        .into_iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect())
}
