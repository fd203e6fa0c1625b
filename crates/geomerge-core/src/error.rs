// crates/geomerge-core/src/error.rs

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Everything that can go wrong while building the table, merging, or
/// writing the result. All variants are fatal; there is no retry layer.
#[derive(Debug, Error)]
pub enum MergeError {
    /// An input path could not be opened.
    #[error("{0}")]
    NotFound(String),

    /// A retained fragment line was not valid JSON once wrapped in braces.
    #[error("invalid fragment at line {line}: {source}")]
    Fragment {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A parsed record lacks `properties` or `nam` (or `nam` is not a string).
    #[error("missing key '{key}' in {context}")]
    MissingKey { key: &'static str, context: String },

    /// A target feature's name has no entry in the property table.
    #[error("no property record for name '{0}'")]
    UnknownName(String),

    /// The target document is not valid JSON or not a feature collection.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
