//! Summary command implementation
//!
//! Draws a batch of samples and compares its moments and empirical CDF with
//! the exact Beta distribution.

use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

use sampler_core::distributions::BetaSampler;
use sampler_core::special::ks_distance;

use super::sample::describe_seed;
use crate::config::{CliSettings, OutputFormat};
use crate::Result;

/// Sample statistics against their theoretical values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub alpha: f64,
    pub beta: f64,
    pub count: usize,
    pub nan_count: usize,
    pub sample_mean: f64,
    pub sample_variance: f64,
    pub mean: f64,
    pub variance: f64,
    pub ks_distance: f64,
}

/// Run the summary command
pub fn run(settings: &CliSettings) -> Result<()> {
    info!(
        "Summarising {} draws of Beta({}, {}), seed {}",
        settings.count,
        settings.alpha,
        settings.beta,
        describe_seed(settings.seed)
    );

    settings.validate_count()?;
    let mut sampler = BetaSampler::from_config(&settings.beta_config()?)?;
    let summary = summarise(&mut sampler, settings.count)?;
    if summary.nan_count > 0 {
        warn!("{} draws were NaN (double-zero Gamma underflow)", summary.nan_count);
    }

    let stdout = std::io::stdout();
    write_summary(stdout.lock(), settings.format, &summary)
}

/// Draw `count` samples and compute their summary
pub fn summarise(sampler: &mut BetaSampler, count: usize) -> Result<Summary> {
    let draws: Vec<f64> = (0..count).map(|_| sampler.generate()).collect();
    let finite: Vec<f64> = draws.iter().copied().filter(|v| !v.is_nan()).collect();

    let n = finite.len().max(1) as f64;
    let sample_mean = finite.iter().sum::<f64>() / n;
    let sample_variance = finite.iter().map(|&x| (x - sample_mean).powi(2)).sum::<f64>() / n;

    Ok(Summary {
        alpha: sampler.alpha(),
        beta: sampler.beta(),
        count,
        nan_count: draws.len() - finite.len(),
        sample_mean,
        sample_variance,
        mean: sampler.mean(),
        variance: sampler.variance(),
        ks_distance: ks_distance(sampler.alpha(), sampler.beta(), &finite)?,
    })
}

/// Write a summary to `out` in the given format
pub fn write_summary<W: Write>(mut out: W, format: OutputFormat, summary: &Summary) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, summary)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.serialize(summary)?;
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "Beta({}, {}), {} draws", summary.alpha, summary.beta, summary.count)?;
            writeln!(out, "┌──────────┬──────────────┬──────────────┐")?;
            writeln!(out, "│ Moment   │ Sample       │ Exact        │")?;
            writeln!(out, "├──────────┼──────────────┼──────────────┤")?;
            writeln!(
                out,
                "│ Mean     │ {:<12.6} │ {:<12.6} │",
                summary.sample_mean, summary.mean
            )?;
            writeln!(
                out,
                "│ Variance │ {:<12.6} │ {:<12.6} │",
                summary.sample_variance, summary.variance
            )?;
            writeln!(out, "└──────────┴──────────────┴──────────────┘")?;
            writeln!(out, "KS distance: {:.6}", summary.ks_distance)?;
            if summary.nan_count > 0 {
                writeln!(out, "NaN draws: {}", summary.nan_count)?;
            }
        }
    }
    Ok(())
}
