//! CLI settings management
//!
//! Resolves sampler settings from a TOML file, environment variables and
//! command-line arguments.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use sampler_core::distributions::{BetaConfig, DEFAULT_ALPHA, DEFAULT_BETA};

use crate::{CliError, Result};

/// Settings file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "beta_sampler.toml";

/// Upper bound on draws per command.
pub const MAX_COUNT: usize = 10_000_000;

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "BETA_SAMPLER_";

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Resolved CLI settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    /// First shape parameter
    pub alpha: f64,
    /// Second shape parameter
    pub beta: f64,
    /// Seed; entropy-seeded when absent
    pub seed: Option<u32>,
    /// Number of draws
    pub count: usize,
    /// Output format
    pub format: OutputFormat,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            seed: None,
            count: 10,
            format: OutputFormat::Table,
            log_level: LogLevel::Info,
        }
    }
}

/// Values given on the command line; `None` defers to lower layers
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub seed: Option<u32>,
    pub count: Option<usize>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<LogLevel>,
}

impl CliSettings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `BETA_SAMPLER_*` variables from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(alpha) = var("ALPHA") {
            self.alpha = parse_env("ALPHA", &alpha)?;
        }
        if let Some(beta) = var("BETA") {
            self.beta = parse_env("BETA", &beta)?;
        }
        if let Some(seed) = var("SEED") {
            self.seed = Some(parse_env("SEED", &seed)?);
        }
        if let Some(count) = var("COUNT") {
            self.count = parse_env("COUNT", &count)?;
        }
        if let Some(format) = var("FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(alpha) = cli.alpha {
            self.alpha = alpha;
        }
        if let Some(beta) = cli.beta {
            self.beta = beta;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(count) = cli.count {
            self.count = count;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
    }

    /// Validate every setting, including the draw count
    pub fn validate(&self) -> Result<()> {
        self.beta_config()?;
        self.validate_count()
    }

    /// Validate the draw count; only commands that sample need it
    pub fn validate_count(&self) -> Result<()> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(CliError::Config(format!(
                "Invalid count {}: must be in range [1, {}]",
                self.count, MAX_COUNT
            )));
        }
        Ok(())
    }

    /// Sampler configuration described by these settings
    pub fn beta_config(&self) -> Result<BetaConfig> {
        Ok(BetaConfig::builder()
            .alpha(self.alpha)
            .beta(self.beta)
            .maybe_seed(self.seed)
            .build()?)
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid value for {}{}: {}", ENV_PREFIX, name, value))
    })
}

/// Build settings from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (explicit path, else `beta_sampler.toml` if present)
/// 4. Default values
///
/// Shapes are validated here. The draw count is left to the commands that
/// draw, via [`CliSettings::validate_count`].
pub fn build_settings(config_file: Option<&Path>, cli: &CliOverrides) -> Result<CliSettings> {
    let mut settings = match config_file {
        Some(path) => CliSettings::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            CliSettings::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => CliSettings::default(),
    };

    settings.apply_env()?;
    settings.merge_with_cli(cli);
    settings.beta_config()?;

    Ok(settings)
}
