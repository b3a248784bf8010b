//! Config file loading and option resolution for the `generate` command.
//!
//! A `path-icons.config.json` file supplies defaults; CLI flags always win.
//! Each output target is either a boolean (enabled with a derived default
//! path) or an explicit path string, matching the original config contract.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use pi_output::CsharpOptions;

/// Default config file looked up next to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "path-icons.config.json";

/// One output target: enabled/disabled or an explicit path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OutputTarget {
    Enabled(bool),
    Path(PathBuf),
}

/// C# generator settings from the config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsharpConfig {
    pub namespace: Option<String>,
    pub attr_name: Option<String>,
}

/// The config file contents. All keys optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub verbose: Option<bool>,
    pub json: Option<OutputTarget>,
    pub css: Option<OutputTarget>,
    pub html: Option<OutputTarget>,
    pub csharp: Option<OutputTarget>,
    pub csharp_options: Option<CsharpConfig>,
}

/// Loads a config file; a missing file yields the empty config.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Ok(FileConfig::default());
        }
        Err(error) => {
            return Err(error).with_context(|| format!("load config file {}", path.display()));
        }
    };
    serde_json::from_str(&data).with_context(|| format!("parse config file {}", path.display()))
}

/// `generate` inputs before config merging. Mirrors the CLI surface:
/// `None` means "not given", `Some(None)` means "enabled with the default
/// path", `Some(Some(path))` means an explicit path.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub input: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub add_new: bool,
    pub json: Option<Option<PathBuf>>,
    pub css: Option<Option<PathBuf>>,
    pub html: Option<Option<PathBuf>>,
    pub csharp: Option<Option<PathBuf>>,
}

/// Fully-resolved `generate` options.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Mandatory base corpus file.
    pub base: PathBuf,
    /// Optional override corpus file.
    pub source: Option<PathBuf>,
    /// Include icons present only in the override corpus.
    pub add_new: bool,
    pub json_path: Option<PathBuf>,
    pub css_path: Option<PathBuf>,
    pub html_path: Option<PathBuf>,
    pub csharp_path: Option<PathBuf>,
    pub csharp: CsharpOptions,
}

/// Merges CLI values over the config file and derives output paths.
pub fn resolve_generate(request: &GenerateRequest, config: &FileConfig) -> Result<GenerateOptions> {
    let Some(base) = request.input.clone().or_else(|| config.input.clone()) else {
        bail!("base corpus is required; pass BASE_JSON or set \"input\" in {DEFAULT_CONFIG_FILE}");
    };
    let source = request.source.clone().or_else(|| config.source.clone());
    let out_dir = request
        .out_dir
        .clone()
        .or_else(|| config.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from("dist"));
    let stem = base
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("path-icons")
        .to_string();

    let json_path = resolve_target(&request.json, config.json.as_ref(), &out_dir, &stem, "json");
    let css_path = resolve_target(&request.css, config.css.as_ref(), &out_dir, &stem, "css");
    let html_path = resolve_target(&request.html, config.html.as_ref(), &out_dir, &stem, "html");
    let csharp_path = resolve_target(&request.csharp, config.csharp.as_ref(), &out_dir, &stem, "cs");

    if html_path.is_some() && css_path.is_none() {
        bail!("HTML generation requires CSS to be specified");
    }

    let defaults = CsharpOptions::default();
    let csharp = match config.csharp_options.as_ref() {
        Some(options) => CsharpOptions {
            namespace: options.namespace.clone().unwrap_or(defaults.namespace),
            attr_name: options.attr_name.clone().unwrap_or(defaults.attr_name),
        },
        None => defaults,
    };

    Ok(GenerateOptions {
        base,
        source,
        add_new: request.add_new,
        json_path,
        css_path,
        html_path,
        csharp_path,
        csharp,
    })
}

/// Resolves one output target with CLI-over-config precedence.
fn resolve_target(
    cli: &Option<Option<PathBuf>>,
    config: Option<&OutputTarget>,
    out_dir: &Path,
    stem: &str,
    extension: &str,
) -> Option<PathBuf> {
    let default_path = || out_dir.join(format!("{stem}.{extension}"));
    match cli {
        Some(Some(path)) => Some(path.clone()),
        Some(None) => Some(default_path()),
        None => match config {
            Some(OutputTarget::Path(path)) => Some(path.clone()),
            Some(OutputTarget::Enabled(true)) => Some(default_path()),
            Some(OutputTarget::Enabled(false)) | None => None,
        },
    }
}
