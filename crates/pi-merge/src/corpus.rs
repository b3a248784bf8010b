//! Corpus file loading and the top-level merge entry point.
//!
//! The base corpus is mandatory: read or parse failures are fatal. The
//! override corpus is optional: any failure degrades to an empty corpus with
//! a diagnostic so the base-only path always completes.

use std::path::Path;

use tracing::warn;

use pi_model::Corpus;

use crate::engine::{MergeMode, MergeReport, merge_corpora};
use crate::error::{MergeError, Result};

/// Loads the mandatory base corpus.
pub fn load_base_corpus(path: &Path) -> Result<Corpus> {
    let data = std::fs::read_to_string(path).map_err(|e| MergeError::BaseCorpusRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&data).map_err(|e| MergeError::BaseCorpusParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Loads the optional override corpus, falling back to empty.
pub fn load_override_corpus(path: &Path) -> Corpus {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) => {
            warn!(path = %path.display(), %error, "override corpus unavailable, using base only");
            return Corpus::new();
        }
    };
    match serde_json::from_str(&data) {
        Ok(corpus) => corpus,
        Err(error) => {
            warn!(path = %path.display(), %error, "override corpus unparsable, using base only");
            Corpus::new()
        }
    }
}

/// Loads both corpora and merges them.
pub fn prepare_merged(base_path: &Path, override_path: &Path, mode: MergeMode) -> Result<MergeReport> {
    let base = load_base_corpus(base_path)?;
    let source = load_override_corpus(override_path);
    Ok(merge_corpora(&base, &source, mode))
}
