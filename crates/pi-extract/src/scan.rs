//! Directory scanning with a bounded worker pool.
//!
//! Every discovered `.svg` file yields exactly one corpus entry: accepted
//! icons carry their extracted layers, everything else maps to an explicit
//! null record so downstream diffing can see the icon was considered.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use pi_model::{Corpus, IconRecord, LayerEntry, LegacyRecord};

use crate::error::{ExtractError, Result};
use crate::svg::extract_icon;

/// Default ceiling for concurrent in-flight file reads. Directories may hold
/// thousands of icons; unbounded fan-out risks exhausting file descriptors.
pub const DEFAULT_CONCURRENCY: usize = 50;

/// How extracted draw-commands become corpus records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordMode {
    /// Every draw-command becomes its own array layer.
    #[default]
    Array,
    /// The first two draw-commands map to the legacy before/after roles.
    Legacy,
}

/// Scan configuration.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Concurrency ceiling for per-file processing, clamped to at least 1.
    pub concurrency: usize,
    /// Output record shape.
    pub mode: RecordMode,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            mode: RecordMode::default(),
        }
    }
}

/// Observational counters accumulated over one scan. No effect on output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Number of `.svg` files discovered.
    pub total: usize,
    /// Icons accepted with at least one draw-command.
    pub accepted: usize,
    /// Icons rejected by a validation rule.
    pub rejected: usize,
    /// Files that failed to read or parse at the I/O level.
    pub read_errors: usize,
    /// Distribution of layer counts across accepted icons.
    pub layer_counts: BTreeMap<usize, usize>,
}

/// Result of scanning one icons directory.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// One entry per discovered file, keyed by icon name.
    pub corpus: Corpus,
    pub stats: ScanStats,
}

/// Outcome of processing one file. Never escapes the task that produced it.
struct FileOutcome {
    name: String,
    paths: Option<Vec<String>>,
    read_error: bool,
}

/// Lists all `.svg` files in a directory, sorted by file name.
pub fn list_svg_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExtractError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ExtractError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| ExtractError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Scans an icons directory into a base corpus with bounded parallelism.
///
/// Per-file failures degrade to null records; only an unreadable directory
/// or a worker-pool construction failure aborts the scan.
pub fn scan_icon_dir(dir: &Path, options: &ScanOptions) -> Result<ScanReport> {
    let files = list_svg_files(dir)?;
    debug!(count = files.len(), dir = %dir.display(), "scanning icons directory");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.concurrency.max(1))
        .build()
        .map_err(|e| ExtractError::WorkerPool {
            message: e.to_string(),
        })?;

    let outcomes: Vec<FileOutcome> =
        pool.install(|| files.par_iter().map(|path| process_file(path)).collect());

    let mut stats = ScanStats {
        total: outcomes.len(),
        ..ScanStats::default()
    };
    let mut corpus = Corpus::new();
    for outcome in outcomes {
        let record = match outcome.paths {
            Some(paths) => {
                stats.accepted += 1;
                *stats.layer_counts.entry(paths.len()).or_insert(0) += 1;
                build_record(paths, options.mode)
            }
            None => {
                stats.rejected += 1;
                if outcome.read_error {
                    stats.read_errors += 1;
                }
                IconRecord::Null
            }
        };
        corpus.insert(outcome.name, record);
    }

    Ok(ScanReport { corpus, stats })
}

/// Processes one file, converting every failure into a null outcome.
fn process_file(path: &Path) -> FileOutcome {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            warn!(file = %path.display(), %error, "failed to read icon file");
            return FileOutcome {
                name,
                paths: None,
                read_error: true,
            };
        }
    };

    match extract_icon(&content) {
        Ok(paths) => FileOutcome {
            name,
            paths: Some(paths),
            read_error: false,
        },
        Err(rejection) => {
            debug!(file = %path.display(), %rejection, "skipping icon");
            FileOutcome {
                name,
                paths: None,
                read_error: false,
            }
        }
    }
}

/// Builds the corpus record for an accepted icon in the requested mode.
fn build_record(paths: Vec<String>, mode: RecordMode) -> IconRecord {
    match mode {
        RecordMode::Array => IconRecord::Array(paths.into_iter().map(LayerEntry::Path).collect()),
        RecordMode::Legacy => {
            let mut paths = paths.into_iter();
            IconRecord::Legacy(LegacyRecord {
                path_before: paths.next(),
                path_after: paths.next(),
                ..LegacyRecord::default()
            })
        }
    }
}

/// Serializes a corpus as pretty-printed JSON, creating parent directories.
pub fn write_base_corpus(path: &Path, corpus: &Corpus) -> Result<()> {
    let json = serde_json::to_string_pretty(corpus)
        .map_err(|source| ExtractError::CorpusSerialize { source })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ExtractError::CorpusWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, json).map_err(|e| ExtractError::CorpusWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
