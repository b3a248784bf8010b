//! Error types for SVG icon extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a whole extraction run.
///
/// Per-file failures never surface here; they degrade to null records in the
/// scanned corpus.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Icons directory not found or not a directory.
    #[error("icons directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to build the bounded worker pool.
    #[error("failed to build worker pool: {message}")]
    WorkerPool { message: String },

    /// Failed to write the base corpus file.
    #[error("failed to write corpus {path}: {source}")]
    CorpusWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the base corpus.
    #[error("failed to serialize corpus: {source}")]
    CorpusSerialize {
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
