//! Error types for truthserum-core.

use thiserror::Error;

/// A violation of the topic table invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("topic key {0:?} must be lowercase, trimmed and non-empty")]
    MalformedKey(String),
    #[error("duplicate topic key {0:?}")]
    DuplicateKey(String),
    #[error("topic {0:?} has no synonyms")]
    EmptySynonyms(String),
    #[error("topic {topic:?} has malformed synonym {synonym:?}")]
    MalformedSynonym { topic: String, synonym: String },
}

/// Failure to load or validate the user configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Source(#[from] config::ConfigError),
    #[error("invalid config: {0}")]
    Invalid(String),
}
