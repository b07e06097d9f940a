// src/similarity/matrix.rs
//! Actor × genre appearance-count feature matrix.

use std::collections::{BTreeSet, HashMap};

use crate::record::MovieRecord;

/// Per-actor genre appearance counts with a fixed, sorted column order.
///
/// Records missing either a cast or genres contribute nothing here;
/// every actor present in the matrix has at least one genre count.
#[derive(Debug, Default, Clone)]
pub struct GenreMatrix {
    genres: Vec<String>,
    counts: HashMap<String, HashMap<String, u32>>,
    names: HashMap<String, String>,
}

impl GenreMatrix {
    #[must_use]
    pub fn build(records: &[MovieRecord]) -> Self {
        let mut genre_set: BTreeSet<String> = BTreeSet::new();
        let mut counts: HashMap<String, HashMap<String, u32>> = HashMap::new();
        let mut names: HashMap<String, String> = HashMap::new();

        for record in records {
            if record.actors.is_empty() || record.genres.is_empty() {
                continue;
            }
            for genre in &record.genres {
                genre_set.insert(genre.clone());
            }
            for (id, name) in &record.actors {
                names.insert(id.clone(), name.clone());
                let row = counts.entry(id.clone()).or_default();
                for genre in &record.genres {
                    *row.entry(genre.clone()).or_default() += 1;
                }
            }
        }

        Self {
            genres: genre_set.into_iter().collect(),
            counts,
            names,
        }
    }

    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn genre_count(&self) -> usize {
        self.genres.len()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.counts.contains_key(id)
    }

    #[must_use]
    pub fn actor_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn actor_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }

    /// Dense row vector for one actor in sorted-genre column order, or
    /// `None` if the actor never appeared with a genre.
    #[must_use]
    pub fn vector(&self, id: &str) -> Option<Vec<f64>> {
        let row = self.counts.get(id)?;
        Some(
            self.genres
                .iter()
                .map(|genre| f64::from(row.get(genre).copied().unwrap_or(0)))
                .collect(),
        )
    }
}
