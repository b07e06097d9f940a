// src/graph/store.rs
//! The co-star graph structure and query interface.

use std::collections::{HashMap, HashSet};

use crate::error::{CostarError, Result};

/// Unordered actor pair, normalized so `{a, b}` and `{b, a}` hash alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    a: String,
    b: String,
}

impl EdgeKey {
    /// Invariant: `left() <= right()` lexicographically.
    #[must_use]
    pub fn new(x: &str, y: &str) -> Self {
        if x <= y {
            Self {
                a: x.to_string(),
                b: y.to_string(),
            }
        } else {
            Self {
                a: y.to_string(),
                b: x.to_string(),
            }
        }
    }

    #[must_use]
    pub fn left(&self) -> &str {
        &self.a
    }

    #[must_use]
    pub fn right(&self) -> &str {
        &self.b
    }
}

/// Undirected weighted graph of actors who have co-starred.
///
/// Node identity is the opaque actor identifier; the display name is an
/// attribute and may be overwritten, never the identity. Edge weight is
/// the number of records featuring both endpoints. The adjacency index
/// is kept in sync with the weight map so degree queries stay O(1) per
/// node.
///
/// Callers construct and own the instance; there is no ambient graph.
#[derive(Debug, Default, Clone)]
pub struct CoStarGraph {
    names: HashMap<String, String>,
    weights: HashMap<EdgeKey, u64>,
    adjacency: HashMap<String, HashSet<String>>,
}

impl CoStarGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the node, overwriting the display name if already seen.
    pub fn upsert_node(&mut self, id: &str, name: &str) {
        self.names.insert(id.to_string(), name.to_string());
    }

    #[must_use]
    pub fn has_node(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    #[must_use]
    pub fn node_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Order-independent edge presence check.
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.weights.contains_key(&EdgeKey::new(a, b))
    }

    /// Current co-appearance count, 0 when the edge is absent.
    #[must_use]
    pub fn edge_weight(&self, a: &str, b: &str) -> u64 {
        self.weights.get(&EdgeKey::new(a, b)).copied().unwrap_or(0)
    }

    /// Creates the edge with weight 1 or bumps an existing weight.
    /// Returns the new weight.
    ///
    /// Unseen endpoints are registered with the identifier standing in
    /// for the display name until an `upsert_node` supplies one; an
    /// edge can never reference a node the store does not know.
    ///
    /// # Errors
    /// Returns `CostarError::SelfLoop` when `a == b`; the store never
    /// holds self-loops.
    pub fn increment_edge(&mut self, a: &str, b: &str) -> Result<u64> {
        if a == b {
            return Err(CostarError::SelfLoop {
                actor: a.to_string(),
            });
        }
        for id in [a, b] {
            if !self.names.contains_key(id) {
                self.names.insert(id.to_string(), id.to_string());
            }
        }
        let weight = self.weights.entry(EdgeKey::new(a, b)).or_insert(0);
        *weight += 1;
        if *weight == 1 {
            self.adjacency
                .entry(a.to_string())
                .or_default()
                .insert(b.to_string());
            self.adjacency
                .entry(b.to_string())
                .or_default()
                .insert(a.to_string());
        }
        Ok(*weight)
    }

    /// Number of distinct co-stars of `id`.
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.adjacency.get(id).map_or(0, HashSet::len)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Restartable iterator over `(id, name)` pairs; order unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.names
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Restartable iterator over `(a, b, weight)` triples, each
    /// unordered pair exactly once.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u64)> + '_ {
        self.weights
            .iter()
            .map(|(key, &weight)| (key.left(), key.right(), weight))
    }
}
