//! CDF command implementation
//!
//! Evaluates the Beta distribution function and density at a point. Draws
//! nothing, so the configured count and seed are not consulted.

use serde::Serialize;
use std::io::Write;
use tracing::info;

use sampler_core::special::{beta_pdf, inc_beta};

use crate::config::{CliSettings, OutputFormat};
use crate::Result;

/// Distribution values at a point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointEvaluation {
    pub alpha: f64,
    pub beta: f64,
    pub x: f64,
    pub cdf: f64,
    pub pdf: f64,
}

/// Run the cdf command
pub fn run(settings: &CliSettings, x: f64) -> Result<()> {
    info!("Evaluating Beta({}, {}) at x = {}", settings.alpha, settings.beta, x);

    let evaluation = evaluate(settings.alpha, settings.beta, x)?;
    let stdout = std::io::stdout();
    write_evaluation(stdout.lock(), settings.format, &evaluation)
}

/// Evaluate CDF and density at `x`
pub fn evaluate(alpha: f64, beta: f64, x: f64) -> Result<PointEvaluation> {
    Ok(PointEvaluation {
        alpha,
        beta,
        x,
        cdf: inc_beta(alpha, beta, x)?,
        pdf: beta_pdf(alpha, beta, x)?,
    })
}

fn write_evaluation<W: Write>(mut out: W, format: OutputFormat, eval: &PointEvaluation) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, eval)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.serialize(eval)?;
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "Beta({}, {}) at x = {}", eval.alpha, eval.beta, eval.x)?;
            writeln!(out, "  CDF: {:.10}", eval.cdf)?;
            writeln!(out, "  PDF: {:.10}", eval.pdf)?;
        }
    }
    Ok(())
}
