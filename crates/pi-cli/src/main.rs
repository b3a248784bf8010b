//! path-icons CLI.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use pi_cli::config::{DEFAULT_CONFIG_FILE, FileConfig, load_config, resolve_generate};
use pi_cli::logging::{LogConfig, LogFormat, apply_config_verbose, init_logging};
use pi_cli::pipeline::{
    BuildRequest, BuildResult, GenerateResult, run_build, run_generate,
};

mod cli;
mod summary;

use crate::cli::{BuildArgs, Cli, Command, GenerateArgs, LogFormatArg, LogLevelArg};
use crate::summary::{print_build_summary, print_generate_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let mut log_config = log_config_from_cli(&cli);

    // The config file participates in the logging level, so generate loads
    // it before the subscriber is installed.
    let generate_config = match &cli.command {
        Command::Generate(args) => match load_generate_config(args) {
            Ok(config) => Some(config),
            Err(error) => {
                eprintln!("error: {error:#}");
                std::process::exit(1);
            }
        },
        Command::Build(_) => None,
    };
    if let Some(config) = &generate_config {
        let cli_chose_level = cli.verbosity.is_present() || cli.log_level.is_some();
        apply_config_verbose(&mut log_config, config.verbose, cli_chose_level);
    }

    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let show_distribution = log_config.level_filter >= LevelFilter::DEBUG;
    let exit_code = match cli.command {
        Command::Build(args) => match run_build_command(&args) {
            Ok(result) => {
                print_build_summary(&result, show_distribution);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Generate(args) => {
            let config = generate_config.unwrap_or_default();
            match run_generate_command(&args, &config) {
                Ok(result) => {
                    print_generate_summary(&result);
                    0
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
    };
    std::process::exit(exit_code);
}

fn run_build_command(args: &BuildArgs) -> anyhow::Result<BuildResult> {
    run_build(&BuildRequest {
        icons_dir: args.icons_dir.clone(),
        output: args.output.clone(),
        concurrency: args.concurrency,
        legacy: args.legacy,
    })
}

fn load_generate_config(args: &GenerateArgs) -> anyhow::Result<FileConfig> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    load_config(&config_path)
}

fn run_generate_command(args: &GenerateArgs, config: &FileConfig) -> anyhow::Result<GenerateResult> {
    let options = resolve_generate(&args.to_request(), config)?;
    run_generate(&options)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
