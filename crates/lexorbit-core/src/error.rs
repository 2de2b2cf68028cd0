//! Error types for lexorbit operations.
//!
//! Provides structured error handling instead of panics.

use std::error::Error;
use std::fmt;

/// Result type for lexorbit operations.
pub type Result<T> = std::result::Result<T, MineError>;

/// Errors that can occur during graphlet mining.
#[derive(Debug, Clone)]
pub enum MineError {
    /// Word graph construction errors.
    Construction(ConstructionError),
    /// Orbit access errors.
    Orbit(OrbitError),
    /// Configuration errors.
    Config(ConfigError),
    /// I/O errors (wrapped).
    Io(String),
    /// Pattern format errors.
    Format(String),
}

impl fmt::Display for MineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MineError::Construction(e) => write!(f, "Construction error: {}", e),
            MineError::Orbit(e) => write!(f, "Orbit error: {}", e),
            MineError::Config(e) => write!(f, "Config error: {}", e),
            MineError::Io(msg) => write!(f, "I/O error: {}", msg),
            MineError::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl Error for MineError {}

impl From<std::io::Error> for MineError {
    fn from(e: std::io::Error) -> Self {
        MineError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for MineError {
    fn from(e: serde_json::Error) -> Self {
        MineError::Format(e.to_string())
    }
}

/// Word graph construction errors.
///
/// Construction failures are recoverable at the corpus level: the engine
/// skips the offending document and continues with the rest.
#[derive(Debug, Clone)]
pub enum ConstructionError {
    /// Tokenization produced no tokens for the document.
    EmptyDocument(String),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::EmptyDocument(id) => {
                write!(f, "document {} produced no tokens", id)
            }
        }
    }
}

/// Orbit access errors.
///
/// These indicate a caller bug, not bad input: orbit indices are always
/// derived from the graphlet's own orbit count.
#[derive(Debug, Clone)]
pub enum OrbitError {
    /// Orbit index outside the graphlet's current range.
    OutOfRange { orbit: usize, count: usize },
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitError::OutOfRange { orbit, count } => {
                write!(f, "orbit {} out of range (graphlet has {})", orbit, count)
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Invalid value.
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Missing required field.
    MissingField(String),
    /// Out of range.
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
            ConfigError::MissingField(field) => write!(f, "Missing required field: {}", field),
            ConfigError::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(
                    f,
                    "{} out of range: {} (must be {}-{})",
                    field, value, min, max
                )
            }
        }
    }
}

// Convenience constructors
impl MineError {
    pub fn empty_document(id: impl Into<String>) -> Self {
        MineError::Construction(ConstructionError::EmptyDocument(id.into()))
    }

    pub fn orbit_out_of_range(orbit: usize, count: usize) -> Self {
        MineError::Orbit(OrbitError::OutOfRange { orbit, count })
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MineError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn config_out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        MineError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }
}
