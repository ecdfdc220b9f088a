//! Error types for truthserum-search.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A request was built without any text column to match against.
    #[error("search request has no fields to match")]
    NoFields,
    #[error("limit must be between 1 and {max}, got {got}")]
    InvalidLimit { got: usize, max: usize },
    #[error("corpus i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("corpus line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
