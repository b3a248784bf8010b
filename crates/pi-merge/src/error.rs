//! Error types for corpus merging.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a merge run.
///
/// Only the base corpus is mandatory; override-side failures degrade to an
/// empty corpus and never surface here.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Base corpus file could not be read.
    #[error("failed to read base corpus {path}: {source}")]
    BaseCorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Base corpus file could not be parsed.
    #[error("failed to parse base corpus {path}: {source}")]
    BaseCorpusParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MergeError>;
