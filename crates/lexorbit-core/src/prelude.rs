//! Lexorbit Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use lexorbit_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::config::{GraphletKind, SearchConfig, DEFAULT_PRUNE_THRESHOLD};
pub use crate::graphlet::{Graphlet, EMPTY_ORBIT_TOKEN, MASK_TOKEN};
pub use crate::tokenize::{
    english_stopwords, PlainTokenizer, TaggedLineTokenizer, TaggedToken, Tokenize,
};
pub use crate::types::{Occurrence, PatternTable};

// Re-export error types
pub use crate::error::{MineError, Result};
