//! Corpus-wide word frequency index.
//!
//! Counts every label in the corpus, then retains only the top fraction
//! of the distinct vocabulary. Labels outside the retained fraction
//! score zero during candidate ranking and never seed a search.

use std::collections::HashMap;

use lexorbit_core::tokenize::Tokenize;

use crate::corpus::Corpus;

/// The retained fraction of the corpus vocabulary, by frequency.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    retained: HashMap<String, u64>,
}

impl WordFrequencies {
    /// Count labels across the corpus and keep the top `retention_ratio`
    /// fraction of distinct labels.
    ///
    /// Ranking is by count descending, with first-appearance order
    /// breaking ties, so the retained set does not depend on hash order.
    pub fn build<T: Tokenize>(corpus: &Corpus, tokenizer: &T, retention_ratio: f64) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for doc in corpus.iter() {
            for sentence in tokenizer.labels(&doc.content) {
                for label in sentence {
                    let next_rank = first_seen.len();
                    first_seen.entry(label.clone()).or_insert(next_rank);
                    *counts.entry(label).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| first_seen[&a.0].cmp(&first_seen[&b.0]))
        });
        let keep = (ranked.len() as f64 * retention_ratio) as usize;
        ranked.truncate(keep);

        WordFrequencies {
            retained: ranked.into_iter().collect(),
        }
    }

    /// Frequency of a retained label.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.retained.get(label).copied()
    }

    /// Candidate-ranking score: the retained frequency, or zero.
    pub fn score(&self, label: &str) -> u64 {
        self.get(label).unwrap_or(0)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.retained.contains_key(label)
    }

    /// Number of retained labels.
    pub fn len(&self) -> usize {
        self.retained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }
}
