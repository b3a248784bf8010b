//! Merged corpus serialization.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pi_model::MergedCorpus;

/// Writes the merged corpus as pretty-printed JSON, creating parent
/// directories. This file is the sole contract downstream generators
/// depend on.
pub fn write_merged_json(merged: &MergedCorpus, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(merged).context("serialize merged corpus")?;
    std::fs::write(output_path, json)
        .with_context(|| format!("write {}", output_path.display()))?;
    debug!(path = %output_path.display(), icons = merged.len(), "wrote merged json");
    Ok(())
}
