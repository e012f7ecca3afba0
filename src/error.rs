//! Error types for Mail Insight.

use crate::pipeline::types::Category;

/// Top-level error type.
///
/// The analysis pipeline itself is total — `analyze` never fails — so
/// errors only surface at construction time (model training) or on the
/// binary side (loading configuration files).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Training error: {0}")]
    Training(#[from] TrainingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while building the category model.
///
/// Every training set must contain exactly one exemplar per category,
/// and every exemplar must survive preprocessing with at least one token.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("Training set is empty")]
    EmptySet,

    #[error("Duplicate training example for category {0}")]
    DuplicateCategory(Category),

    #[error("No training example for category {0}")]
    MissingCategory(Category),

    #[error("Training example for category {0} has no usable tokens after preprocessing")]
    EmptyExample(Category),
}

/// Configuration-related errors (file loading, parsing).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read training file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse training file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
