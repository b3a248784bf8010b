//! End-to-end run logic for the two subcommands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use pi_extract::{RecordMode, ScanOptions, ScanStats, scan_icon_dir, write_base_corpus};
use pi_merge::{MergeMode, load_base_corpus, load_override_corpus, merge_corpora};
use pi_model::Corpus;
use pi_output::{write_csharp, write_css, write_html, write_merged_json};

use crate::config::GenerateOptions;

/// Inputs for the `build` subcommand.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub icons_dir: PathBuf,
    pub output: PathBuf,
    pub concurrency: usize,
    pub legacy: bool,
}

/// Outcome of a `build` run.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub output: PathBuf,
    pub stats: ScanStats,
}

/// Scans the icons directory and writes the base corpus.
pub fn run_build(request: &BuildRequest) -> Result<BuildResult> {
    let options = ScanOptions {
        concurrency: request.concurrency,
        mode: if request.legacy {
            RecordMode::Legacy
        } else {
            RecordMode::Array
        },
    };
    let report = scan_icon_dir(&request.icons_dir, &options)?;
    write_base_corpus(&request.output, &report.corpus)?;
    info!(
        accepted = report.stats.accepted,
        rejected = report.stats.rejected,
        output = %request.output.display(),
        "base corpus written"
    );
    Ok(BuildResult {
        output: request.output.clone(),
        stats: report.stats,
    })
}

/// One generated output file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub kind: &'static str,
    pub path: PathBuf,
}

/// Outcome of a `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub merged: usize,
    pub omitted: Vec<String>,
    pub outputs: Vec<GeneratedFile>,
}

/// Merges the corpora and writes every requested projection.
pub fn run_generate(options: &GenerateOptions) -> Result<GenerateResult> {
    let base = load_base_corpus(&options.base)?;
    let source = match &options.source {
        Some(path) => load_override_corpus(path),
        None => Corpus::new(),
    };
    let mode = if options.add_new {
        MergeMode::IncludeNew
    } else {
        MergeMode::UpdateExisting
    };
    let report = merge_corpora(&base, &source, mode);
    info!(
        merged = report.merged.len(),
        omitted = report.omitted.len(),
        "corpora merged"
    );

    let mut outputs = Vec::new();
    if let Some(path) = &options.json_path {
        write_merged_json(&report.merged, path)?;
        outputs.push(GeneratedFile {
            kind: "JSON",
            path: path.clone(),
        });
    }
    if let Some(path) = &options.css_path {
        write_css(&report.merged, path)?;
        outputs.push(GeneratedFile {
            kind: "CSS",
            path: path.clone(),
        });
    }
    if let Some(path) = &options.html_path {
        let css_path = options
            .css_path
            .as_deref()
            .context("HTML generation requires CSS to be specified")?;
        let css_href = relative_href(path, css_path);
        write_html(&report.merged, &css_href, path)?;
        outputs.push(GeneratedFile {
            kind: "HTML",
            path: path.clone(),
        });
    }
    if let Some(path) = &options.csharp_path {
        write_csharp(&report.merged, path, &options.csharp)?;
        outputs.push(GeneratedFile {
            kind: "C#",
            path: path.clone(),
        });
    }

    Ok(GenerateResult {
        merged: report.merged.len(),
        omitted: report.omitted,
        outputs,
    })
}

/// Stylesheet reference for the preview page, relative to the page's own
/// directory. Falls back to the stylesheet path verbatim when the two paths
/// cannot be related (one absolute, one relative).
fn relative_href(html_path: &Path, css_path: &Path) -> String {
    if html_path.is_absolute() != css_path.is_absolute() {
        return css_path.to_string_lossy().into_owned();
    }
    let html_dir = html_path.parent().unwrap_or_else(|| Path::new(""));
    let css_dir = css_path.parent().unwrap_or_else(|| Path::new(""));

    let mut html_parts = html_dir.components().peekable();
    let mut css_parts = css_dir.components().peekable();
    while let (Some(a), Some(b)) = (html_parts.peek(), css_parts.peek()) {
        if a != b {
            break;
        }
        html_parts.next();
        css_parts.next();
    }

    let mut href = PathBuf::new();
    for _ in html_parts {
        href.push("..");
    }
    for part in css_parts {
        href.push(part);
    }
    if let Some(name) = css_path.file_name() {
        href.push(name);
    }
    href.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_is_bare_name_in_same_directory() {
        assert_eq!(
            relative_href(Path::new("out/bi.html"), Path::new("out/bi.css")),
            "bi.css"
        );
    }

    #[test]
    fn href_climbs_out_of_the_page_directory() {
        assert_eq!(
            relative_href(Path::new("out/pages/bi.html"), Path::new("out/bi.css")),
            "../bi.css"
        );
    }

    #[test]
    fn href_descends_into_a_sibling_directory() {
        assert_eq!(
            relative_href(Path::new("out/bi.html"), Path::new("out/styles/bi.css")),
            "styles/bi.css"
        );
        assert_eq!(
            relative_href(Path::new("pages/bi.html"), Path::new("styles/bi.css")),
            "../styles/bi.css"
        );
    }

    #[test]
    fn unrelatable_paths_fall_back_to_the_stylesheet_path() {
        assert_eq!(
            relative_href(Path::new("out/bi.html"), Path::new("/srv/bi.css")),
            "/srv/bi.css"
        );
    }
}
