//! # Lexorbit Runtime
//!
//! Corpus indexing, the word graph, and the mining engine.
//!
//! The runtime turns documents into graphs, runs the graphlet search
//! over them, and writes the resulting pattern tables out. All the pure
//! vocabulary (graphlets, keys, configuration) lives in `lexorbit-core`.

pub mod corpus;
pub mod export;
pub mod freq;
pub mod search;
pub mod wordgraph;
