//! CLI argument definitions for the path-icons generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pi_cli::config::GenerateRequest;
use pi_extract::DEFAULT_CONCURRENCY;

#[derive(Parser)]
#[command(
    name = "path-icons",
    version,
    about = "path-icons - Build a canonical icon corpus and generate outputs",
    long_about = "Convert a directory of SVG icon definitions into a canonical JSON corpus,\n\
                  reconcile it with a hand-maintained override corpus, and generate\n\
                  CSS, HTML preview, and C# enum outputs from the merged data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan an SVG icons directory and write the base corpus JSON.
    Build(BuildArgs),

    /// Merge a base corpus with an override corpus and generate outputs.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Directory containing one SVG file per icon.
    #[arg(value_name = "ICONS_DIR")]
    pub icons_dir: PathBuf,

    /// Output path for the base corpus JSON.
    #[arg(long = "output", value_name = "PATH", default_value = "dist/bi.json")]
    pub output: PathBuf,

    /// Ceiling for concurrent in-flight file reads.
    #[arg(long = "concurrency", value_name = "N", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Emit legacy before/after records instead of layer arrays.
    #[arg(long = "legacy")]
    pub legacy: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the base corpus JSON (falls back to "input" in the config file).
    #[arg(value_name = "BASE_JSON")]
    pub input: Option<PathBuf>,

    /// Config file path (default: path-icons.config.json when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override corpus JSON; absence is tolerated.
    #[arg(long = "source", value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Include icons present only in the override corpus.
    #[arg(long = "add-new")]
    pub add_new: bool,

    /// Output directory for derived default paths.
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Write the merged corpus JSON (optionally to an explicit path).
    #[arg(long = "json", value_name = "PATH", num_args = 0..=1)]
    pub json: Option<Option<PathBuf>>,

    /// Generate CSS rules (optionally to an explicit path).
    #[arg(long = "css", value_name = "PATH", num_args = 0..=1)]
    pub css: Option<Option<PathBuf>>,

    /// Generate an HTML preview page (requires --css).
    #[arg(long = "html", value_name = "PATH", num_args = 0..=1)]
    pub html: Option<Option<PathBuf>>,

    /// Generate a C# enum declaration (optionally to an explicit path).
    #[arg(long = "csharp", value_name = "PATH", num_args = 0..=1)]
    pub csharp: Option<Option<PathBuf>>,
}

impl GenerateArgs {
    /// The config-independent request this invocation describes.
    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            input: self.input.clone(),
            source: self.source.clone(),
            out_dir: self.out_dir.clone(),
            add_new: self.add_new,
            json: self.json.clone(),
            css: self.css.clone(),
            html: self.html.clone(),
            csharp: self.csharp.clone(),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
