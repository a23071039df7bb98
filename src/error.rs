//! Error types for word_network.

use thiserror::Error;

/// Errors raised while loading or querying a word network.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading an input file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The edge list could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The vertex list held no words.
    #[error("vertex list is empty")]
    EmptyVocabulary,

    /// An edge record names a word that is not in the vertex list.
    #[error("edge on line {line} references unknown word {word:?}")]
    UnknownEdgeEndpoint { line: u64, word: String },

    /// A vertex id outside `[0, vertex_count)`.
    #[error("vertex id {id} out of range for {vertex_count} vertices")]
    VertexOutOfRange { id: usize, vertex_count: usize },

    /// A query named a word that is not in the graph.
    #[error("The word {0} does not exist in the graph.")]
    WordNotFound(String),

    /// Both words exist but are not connected.
    #[error("Unable to find shortest path from {from} to {to}.")]
    NoPath { from: String, to: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for query misses the caller is expected to report and move past.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, Error::WordNotFound(_) | Error::NoPath { .. })
    }
}

/// Result type alias for word network operations.
pub type Result<T> = std::result::Result<T, Error>;
