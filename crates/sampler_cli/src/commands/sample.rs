//! Sample command implementation
//!
//! Draws samples from the configured Beta distribution and prints them.

use serde::Serialize;
use std::io::Write;
use tracing::info;

use sampler_core::distributions::BetaSampler;

use crate::config::{CliSettings, OutputFormat};
use crate::Result;

/// JSON payload for the sample command
#[derive(Debug, Serialize)]
struct SampleOutput<'a> {
    alpha: f64,
    beta: f64,
    seed: Option<u32>,
    samples: &'a [f64],
}

/// Run the sample command
pub fn run(settings: &CliSettings) -> Result<()> {
    info!("Sampling Beta({}, {})", settings.alpha, settings.beta);
    info!("  Seed: {}", describe_seed(settings.seed));
    info!("  Count: {}", settings.count);

    settings.validate_count()?;
    let mut sampler = BetaSampler::from_config(&settings.beta_config()?)?;
    let samples: Vec<f64> = (0..settings.count).map(|_| sampler.generate()).collect();

    let stdout = std::io::stdout();
    write_samples(stdout.lock(), settings, &samples)?;

    info!("Sampling complete");
    Ok(())
}

/// Write `samples` to `out` in the configured format
pub fn write_samples<W: Write>(mut out: W, settings: &CliSettings, samples: &[f64]) -> Result<()> {
    match settings.format {
        OutputFormat::Json => {
            let payload = SampleOutput {
                alpha: settings.alpha,
                beta: settings.beta,
                seed: settings.seed,
                samples,
            };
            serde_json::to_writer_pretty(&mut out, &payload)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["index", "value"])?;
            for (i, value) in samples.iter().enumerate() {
                writer.write_record([i.to_string(), value.to_string()])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "┌──────────┬──────────────────────┐")?;
            writeln!(out, "│ Index    │ Value                │")?;
            writeln!(out, "├──────────┼──────────────────────┤")?;
            for (i, value) in samples.iter().enumerate() {
                writeln!(out, "│ {:<8} │ {:<20.16} │", i, value)?;
            }
            writeln!(out, "└──────────┴──────────────────────┘")?;
        }
    }
    Ok(())
}

pub(crate) fn describe_seed(seed: Option<u32>) -> String {
    seed.map_or_else(|| "entropy".to_string(), |s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(format: OutputFormat) -> CliSettings {
        CliSettings {
            seed: Some(3),
            count: 3,
            format,
            ..CliSettings::default()
        }
    }

    #[test]
    fn test_json_output_round_trips() {
        let samples = [0.25, 0.5, 0.75];
        let mut buffer = Vec::new();
        write_samples(&mut buffer, &settings(OutputFormat::Json), &samples).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["seed"], 3);
        assert_eq!(parsed["samples"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["samples"][1], 0.5);
    }

    #[test]
    fn test_csv_output_has_header_and_rows() {
        let mut buffer = Vec::new();
        write_samples(&mut buffer, &settings(OutputFormat::Csv), &[0.1, 0.9]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["index,value", "0,0.1", "1,0.9"]);
    }

    #[test]
    fn test_table_output_lists_every_sample() {
        let mut buffer = Vec::new();
        write_samples(&mut buffer, &settings(OutputFormat::Table), &[0.1, 0.2, 0.3]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 3 + 4);
        assert!(text.contains("0.3000000000000000"));
    }

    #[test]
    fn test_describe_seed() {
        assert_eq!(describe_seed(None), "entropy");
        assert_eq!(describe_seed(Some(12)), "12");
    }
}
