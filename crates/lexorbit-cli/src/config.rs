//! Configuration management for the Lexorbit CLI.

use anyhow::{Context, Result};
use lexorbit::prelude::{english_stopwords, GraphletKind, SearchConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Lexorbit project configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub graphlet: GraphletSection,
    #[serde(default)]
    pub tokenizer: TokenizerSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSection {
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_stack_size")]
    pub pruned_stack_size: usize,
    #[serde(default = "default_min_word_freq")]
    pub min_word_freq: u64,
    #[serde(default = "default_selection_ratio")]
    pub word_selection_ratio: f64,
    /// Pruning thresholds keyed by iteration index.
    #[serde(default)]
    pub freq_thresholds: HashMap<String, u64>,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphletSection {
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_orbit_capacity")]
    pub max_orbit_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerSection {
    #[serde(default = "default_content_pattern")]
    pub content_word_pattern: String,
    /// Stopwords added on top of the built-in English list.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

// Default value functions
fn default_max_iterations() -> usize { 10 }
fn default_stack_size() -> usize { 100_000 }
fn default_min_word_freq() -> u64 { 50 }
fn default_selection_ratio() -> f64 { 0.5 }
fn default_kind() -> String { "pruned".to_string() }
fn default_orbit_capacity() -> usize { 10 }
fn default_content_pattern() -> String { "^[A-z0-9]{3,}.*$".to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchSection::default(),
            graphlet: GraphletSection::default(),
            tokenizer: TokenizerSection::default(),
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            pruned_stack_size: default_stack_size(),
            min_word_freq: default_min_word_freq(),
            word_selection_ratio: default_selection_ratio(),
            freq_thresholds: HashMap::new(),
            rng_seed: None,
        }
    }
}

impl Default for GraphletSection {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            max_orbit_capacity: default_orbit_capacity(),
        }
    }
}

impl Default for TokenizerSection {
    fn default() -> Self {
        Self {
            content_word_pattern: default_content_pattern(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from lexorbit.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        if let Some(path) = find_config_file() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Build the engine configuration from this file.
    pub fn to_search_config(&self) -> Result<SearchConfig> {
        let kind: GraphletKind = self
            .graphlet
            .kind
            .parse()
            .with_context(|| format!("Unknown graphlet kind: {}", self.graphlet.kind))?;

        let mut thresholds = HashMap::new();
        for (key, value) in &self.search.freq_thresholds {
            let iteration: usize = key.parse().with_context(|| {
                format!("Bad iteration index in freq_thresholds: {}", key)
            })?;
            thresholds.insert(iteration, *value);
        }

        let mut stopwords = english_stopwords();
        for word in &self.tokenizer.extra_stopwords {
            stopwords.insert(word.clone());
        }

        Ok(SearchConfig {
            max_orbit_capacity: self.graphlet.max_orbit_capacity,
            graphlet_kind: kind,
            freq_threshold_by_iteration: thresholds,
            max_iterations: self.search.max_iterations,
            pruned_stack_size: self.search.pruned_stack_size,
            min_word_freq: self.search.min_word_freq,
            word_selection_ratio: self.search.word_selection_ratio,
            content_word_pattern: self.tokenizer.content_word_pattern.clone(),
            stopwords,
            rng_seed: self.search.rng_seed,
        })
    }
}

/// Find lexorbit.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join("lexorbit.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.search.max_iterations, 10);
        assert_eq!(config.search.min_word_freq, 50);
        assert_eq!(config.graphlet.kind, "pruned");
        assert!(config.search.freq_thresholds.is_empty());
    }

    #[test]
    fn thresholds_parse_from_string_keys() {
        let toml_text = r#"
            [search.freq_thresholds]
            0 = 3
            1 = 2
        "#;
        let config: Config = toml::from_str(toml_text).unwrap();
        let search = config.to_search_config().unwrap();
        assert_eq!(search.threshold_for(0), 3);
        assert_eq!(search.threshold_for(1), 2);
    }

    #[test]
    fn unknown_graphlet_kind_is_rejected() {
        let config: Config = toml::from_str("[graphlet]\nkind = \"spiral\"\n").unwrap();
        assert!(config.to_search_config().is_err());
    }

    #[test]
    fn extra_stopwords_extend_the_builtin_list() {
        let config: Config =
            toml::from_str("[tokenizer]\nextra_stopwords = [\"reuters\"]\n").unwrap();
        let search = config.to_search_config().unwrap();
        assert!(search.stopwords.contains("reuters"));
        assert!(search.stopwords.contains("the"));
    }
}
