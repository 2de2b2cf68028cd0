//! Shared value types for mining results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One observation of a pattern: the center word and the document it
/// appeared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub center: String,
    pub doc: String,
}

impl Occurrence {
    pub fn new(center: impl Into<String>, doc: impl Into<String>) -> Self {
        Occurrence {
            center: center.into(),
            doc: doc.into(),
        }
    }
}

/// Discovered patterns keyed by their context encoding.
///
/// Keys drop the center orbit, so distinct centers sharing the same
/// surrounding structure merge into one entry; the center survives in
/// each occurrence. Iteration is ordered by key; occurrence lists keep
/// discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTable {
    patterns: BTreeMap<String, Vec<Occurrence>>,
}

impl PatternTable {
    pub fn new() -> Self {
        PatternTable::default()
    }

    /// Append an occurrence under `key`.
    pub fn record(&mut self, key: impl Into<String>, occurrence: Occurrence) {
        self.patterns.entry(key.into()).or_default().push(occurrence);
    }

    /// Occurrences recorded under `key`.
    pub fn get(&self, key: &str) -> Option<&[Occurrence]> {
        self.patterns.get(key).map(|v| v.as_slice())
    }

    /// Number of occurrences recorded under `key`.
    pub fn support(&self, key: &str) -> usize {
        self.patterns.get(key).map(|v| v.len()).unwrap_or(0)
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Occurrence>)> {
        self.patterns.iter()
    }

    /// Pattern keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.patterns.keys()
    }

    /// The `n` patterns with the most occurrences, ties in key order.
    pub fn top_by_support(&self, n: usize) -> Vec<(&String, usize)> {
        let mut ranked: Vec<(&String, usize)> =
            self.patterns.iter().map(|(k, v)| (k, v.len())).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}
