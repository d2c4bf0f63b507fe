//! Error types for instance generation.

use std::path::Path;
use thiserror::Error;

/// A configuration parameter that violates one of the generator invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error(
        "demand bounds must satisfy min < light threshold < heavy max, \
         got {min_demand} / {light_max_demand} / {heavy_max_demand}"
    )]
    DemandBoundsOrder {
        min_demand: f64,
        light_max_demand: f64,
        heavy_max_demand: f64,
    },

    #[error("max_rejection_attempts must be at least 1")]
    ZeroRejectionAttempts,
}

/// Top-level error type for the generator and its file collaborators.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The near-region rejection loop ran out of attempts without finding
    /// a point inside the map.
    #[error("Sampling exhausted after {attempts} rejected near-region draws")]
    SamplingExhausted { attempts: u64 },

    #[error("Batch of {count} files starting at index {start} runs past the last index")]
    IndexOverflow { start: u64, count: u64 },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeneratorError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn io_at(action: &str, path: &Path, source: std::io::Error) -> Self {
        Self::io(format!("{} {}", action, path.display()), source)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeneratorError>;
