//! Search configuration — every knob of a mining run in one struct.
//!
//! Runs are configured by value, not by process-global state: build a
//! [`SearchConfig`], adjust fields or chain `with_*` calls, and hand it
//! to the engine. [`SearchConfig::validate`] runs before any corpus work
//! so a bad knob fails the run up front.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use regex::Regex;

use crate::error::{MineError, Result};
use crate::tokenize::english_stopwords;

/// Pruning threshold applied to iterations without an explicit entry.
pub const DEFAULT_PRUNE_THRESHOLD: u64 = 5;

/// Which extraction strategy the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphletKind {
    /// Iterative randomized expansion with per-iteration pruning.
    Pruned,
    /// Exhaustive per-document distance orbits, no expansion loop.
    Max,
}

impl FromStr for GraphletKind {
    type Err = MineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pruned" => Ok(GraphletKind::Pruned),
            "max" => Ok(GraphletKind::Max),
            other => Err(MineError::invalid_config(
                "graphlet_kind",
                other,
                "expected \"pruned\" or \"max\"",
            )),
        }
    }
}

/// Configuration for a mining run.
///
/// Fields are public; `Default` gives the profile used for raw-text
/// corpora (English stopwords, no tag requirement in the content
/// pattern). `with_*` builders cover the knobs tests and callers touch
/// most.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Upper bound on orbit distance for `Max` extraction.
    pub max_orbit_capacity: usize,
    /// Extraction strategy.
    pub graphlet_kind: GraphletKind,
    /// Pruning threshold per iteration index; missing entries fall back
    /// to [`DEFAULT_PRUNE_THRESHOLD`].
    pub freq_threshold_by_iteration: HashMap<usize, u64>,
    /// Number of expand-and-prune rounds before the run stops.
    pub max_iterations: usize,
    /// Hypothesis stack cap applied after each pruning pass.
    pub pruned_stack_size: usize,
    /// Seeds require a corpus frequency strictly above this.
    pub min_word_freq: u64,
    /// Fraction of the distinct vocabulary kept in the frequency index.
    pub word_selection_ratio: f64,
    /// Regex a label must match to count as a content word.
    pub content_word_pattern: String,
    /// Labels excluded from the content vocabulary.
    pub stopwords: HashSet<String>,
    /// Seed for the run's random choices; `None` draws one from the
    /// clock, so two unseeded runs explore differently.
    pub rng_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_orbit_capacity: 10,
            graphlet_kind: GraphletKind::Pruned,
            freq_threshold_by_iteration: HashMap::new(),
            max_iterations: 10,
            pruned_stack_size: 100_000,
            min_word_freq: 50,
            word_selection_ratio: 0.5,
            content_word_pattern: "^[A-z0-9]{3,}.*$".to_string(),
            stopwords: english_stopwords(),
            rng_seed: None,
        }
    }
}

impl SearchConfig {
    /// Fix the run seed for reproducible mining.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_min_word_freq(mut self, freq: u64) -> Self {
        self.min_word_freq = freq;
        self
    }

    pub fn with_graphlet_kind(mut self, kind: GraphletKind) -> Self {
        self.graphlet_kind = kind;
        self
    }

    pub fn with_stopwords(mut self, stopwords: HashSet<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set the pruning threshold for one iteration index.
    pub fn with_threshold(mut self, iteration: usize, threshold: u64) -> Self {
        self.freq_threshold_by_iteration.insert(iteration, threshold);
        self
    }

    /// Pruning threshold for the given iteration.
    pub fn threshold_for(&self, iteration: usize) -> u64 {
        self.freq_threshold_by_iteration
            .get(&iteration)
            .copied()
            .unwrap_or(DEFAULT_PRUNE_THRESHOLD)
    }

    /// Compile the content word pattern.
    pub fn content_regex(&self) -> Result<Regex> {
        Regex::new(&self.content_word_pattern).map_err(|e| {
            MineError::invalid_config(
                "content_word_pattern",
                &self.content_word_pattern,
                e.to_string(),
            )
        })
    }

    /// Check every knob, failing before any corpus work starts.
    pub fn validate(&self) -> Result<()> {
        self.content_regex()?;
        if !(self.word_selection_ratio > 0.0 && self.word_selection_ratio <= 1.0) {
            return Err(MineError::config_out_of_range(
                "word_selection_ratio",
                0.0,
                1.0,
                self.word_selection_ratio,
            ));
        }
        if self.max_iterations == 0 {
            return Err(MineError::invalid_config(
                "max_iterations",
                "0",
                "at least one iteration is required",
            ));
        }
        if self.pruned_stack_size == 0 {
            return Err(MineError::invalid_config(
                "pruned_stack_size",
                "0",
                "stack cap must be positive",
            ));
        }
        if self.max_orbit_capacity == 0 {
            return Err(MineError::invalid_config(
                "max_orbit_capacity",
                "0",
                "graphlets need at least one context orbit",
            ));
        }
        Ok(())
    }
}
