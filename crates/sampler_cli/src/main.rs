//! Beta Sampler CLI - Command Line Adapter for the Beta Sampler
//!
//! # Commands
//!
//! - `beta-sampler sample` - Draw samples from Beta(alpha, beta)
//! - `beta-sampler summary` - Compare sample moments with the exact distribution
//! - `beta-sampler cdf --x <x>` - Evaluate the distribution function and density
//! - `beta-sampler check` - Show resolved settings
//!
//! Settings resolve from CLI arguments, then `BETA_SAMPLER_*` environment
//! variables, then a TOML settings file, then defaults.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_settings, CliOverrides, LogLevel, OutputFormat};

/// Beta distribution sampler CLI
#[derive(Parser)]
#[command(name = "beta-sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file path (defaults to beta_sampler.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

/// Sampler arguments shared by every command
#[derive(Args, Debug)]
struct SamplerArgs {
    /// First shape parameter
    #[arg(short, long)]
    alpha: Option<f64>,

    /// Second shape parameter
    #[arg(short, long)]
    beta: Option<f64>,

    /// Seed for a reproducible stream
    #[arg(short, long)]
    seed: Option<u32>,

    /// Output format (table, json, csv)
    #[arg(short, long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw samples from Beta(alpha, beta)
    Sample {
        #[command(flatten)]
        sampler: SamplerArgs,

        /// Number of draws
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Compare sample moments and CDF with the exact distribution
    Summary {
        #[command(flatten)]
        sampler: SamplerArgs,

        /// Number of draws
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Evaluate the distribution function and density at a point
    Cdf {
        #[command(flatten)]
        sampler: SamplerArgs,

        /// Point in [0, 1]
        #[arg(short, long)]
        x: f64,
    },

    /// Check resolved settings
    Check {
        #[command(flatten)]
        sampler: SamplerArgs,
    },
}

impl Commands {
    fn overrides(&self, log_level: Option<LogLevel>) -> CliOverrides {
        let (args, count) = match self {
            Commands::Sample { sampler, count } | Commands::Summary { sampler, count } => {
                (sampler, *count)
            }
            Commands::Cdf { sampler, .. } | Commands::Check { sampler } => (sampler, None),
        };
        CliOverrides {
            alpha: args.alpha,
            beta: args.beta,
            seed: args.seed,
            count,
            format: args.format,
            log_level,
        }
    }
}

fn parse_log_level(s: &str) -> std::result::Result<LogLevel, String> {
    s.parse().map_err(|e: CliError| e.to_string())
}

fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse().map_err(|e: CliError| e.to_string())
}

fn init_tracing(level: LogLevel, verbose: bool) {
    let default_level = if verbose { LogLevel::Debug } else { level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = cli.command.overrides(cli.log_level);
    let settings = build_settings(cli.config.as_deref(), &overrides)?;

    init_tracing(settings.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?settings, "settings resolved");

    match cli.command {
        Commands::Sample { .. } => commands::sample::run(&settings),
        Commands::Summary { .. } => commands::summary::run(&settings),
        Commands::Cdf { x, .. } => commands::cdf::run(&settings, x),
        Commands::Check { .. } => commands::check::run(&settings),
    }
}
