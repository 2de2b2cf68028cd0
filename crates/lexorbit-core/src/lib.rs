//! # Lexorbit Core
//!
//! Core types for graphlet pattern mining over word co-occurrence graphs.
//!
//! This crate defines the vocabulary shared across the framework:
//!
//! - **[`Graphlet`](graphlet::Graphlet)** — a center word with ordered
//!   orbits of context labels, and its canonical string encoding
//! - **[`Tokenize`](tokenize::Tokenize)** — the seam for plugging in a
//!   tokenizer/tagger, with plain-text and pre-tagged defaults
//! - **[`SearchConfig`](config::SearchConfig)** — every knob of a mining
//!   run in one validated struct
//! - **[`PatternTable`](types::PatternTable)** — discovered patterns and
//!   where they occurred
//!
//! ## Quick Start
//!
//! ```rust
//! use lexorbit_core::prelude::*;
//! use std::collections::HashSet;
//!
//! let mut graphlet = Graphlet::new("market_NN");
//! graphlet.place("rally_NN", 1);
//! graphlet.place("the_DT", 1);
//!
//! let content: HashSet<String> =
//!     ["market_NN".to_string(), "rally_NN".to_string()].into_iter().collect();
//! assert_eq!(
//!     graphlet.context_key(&content),
//!     "1:<FUNC_OR_STOP_WORD>;rally_NN"
//! );
//! ```

pub mod config;
pub mod error;
pub mod graphlet;
pub mod tokenize;
pub mod types;
pub mod prelude;
