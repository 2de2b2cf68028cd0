//! # Lexorbit
//!
//! Graphlet pattern mining over word co-occurrence graphs.
//!
//! Lexorbit turns each document into an undirected word graph, then runs
//! a randomized stack-based search over those graphs. Search states are
//! graphlets: a center word surrounded by concentric orbits of context
//! words. Graphlets that recur across the corpus under the same
//! canonical key survive pruning and end up in a pattern table.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexorbit::prelude::*;
//!
//! // Configure a small reproducible run
//! let config = SearchConfig::default()
//!     .with_seed(7)
//!     .with_min_word_freq(1)
//!     .with_max_iterations(3)
//!     .with_threshold(0, 0)
//!     .with_threshold(1, 0)
//!     .with_threshold(2, 0);
//!
//! // Mine the built-in demo corpus
//! let corpus = Corpus::from_embedded();
//! let mut miner = GraphletMiner::new(config).unwrap();
//! miner.run(&corpus, &PlainTokenizer);
//!
//! for (key, support) in miner.table().top_by_support(5) {
//!     println!("{} ({} occurrences)", key, support);
//! }
//! ```
//!
//! ## Architecture
//!
//! Lexorbit is organized into several crates:
//!
//! - [`lexorbit_core`] - Graphlets, canonical keys, tokenizers, search
//!   configuration
//! - [`lexorbit_runtime`] - Corpus loading, word graphs, the mining
//!   engine, table export
//!
//! ## Key Concepts
//!
//! ### The search loop
//!
//! | Phase  | What happens |
//! |--------|--------------|
//! | Seed   | Every frequent content word starts a one-node graphlet in its document |
//! | Expand | A random orbit contributes its graph neighbors; the best-scoring new content word joins the next orbit, functional neighbors ride along masked |
//! | Record | Successors are deduplicated corpus-wide and tallied under their context key |
//! | Prune  | Keys at or below the iteration's threshold drop out; the hypothesis stack is capped |
//!
//! ### Canonical keys
//!
//! A graphlet encodes each orbit as sorted, deduplicated labels, with
//! functional words collapsed into one mask token. The context key drops
//! the center, so different centers sharing the same surroundings merge
//! into one pattern:
//!
//! ```text
//! 1:<FUNC_OR_STOP_WORD>;market|2:rallied
//! ```
//!
//! ## Persistence
//!
//! Mined tables round-trip through delimited rows or JSON:
//!
//! ```rust,ignore
//! use lexorbit::prelude::*;
//! use std::path::Path;
//!
//! write_tsv(miner.table(), Path::new("patterns.tsv")).unwrap();
//! let reloaded = read_tsv(Path::new("patterns.tsv")).unwrap();
//! ```

// Re-export all subcrates
pub use lexorbit_core as core;
pub use lexorbit_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use lexorbit::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lexorbit_core::config::{GraphletKind, SearchConfig, DEFAULT_PRUNE_THRESHOLD};
    pub use lexorbit_core::graphlet::{Graphlet, EMPTY_ORBIT_TOKEN, MASK_TOKEN};
    pub use lexorbit_core::tokenize::{
        english_stopwords, PlainTokenizer, TaggedLineTokenizer, TaggedToken, Tokenize,
    };
    pub use lexorbit_core::types::{Occurrence, PatternTable};

    // Error types
    pub use lexorbit_core::error::{MineError, Result};

    // Runtime
    pub use lexorbit_runtime::corpus::{Corpus, CorpusDocument};
    pub use lexorbit_runtime::export::{
        parse_pattern_key, parse_render_pattern, read_json, read_tsv, to_render_pattern,
        write_json, write_tsv,
    };
    pub use lexorbit_runtime::freq::WordFrequencies;
    pub use lexorbit_runtime::search::{GraphletMiner, Hypothesis, MinerStats};
    pub use lexorbit_runtime::wordgraph::WordGraph;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
