//! # Beta Sampling
//!
//! Draws Beta(alpha, beta) variates from two Gamma variates sharing one
//! pseudo-random stream.
//!
//! ## Module Structure
//!
//! - [`beta`]: [`BetaSampler`], the stateful generator
//! - [`gamma`]: [`sample_gamma`], the Gamma algorithm both shapes share
//! - [`config`]: [`BetaConfig`] and its builder
//! - [`error`]: [`SamplerError`]
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::distributions::{BetaConfig, BetaSampler};
//!
//! let config = BetaConfig::builder().alpha(5.0).beta(1.0).seed(1).build()?;
//! let mut sampler = BetaSampler::from_config(&config)?;
//!
//! let draws: Vec<f64> = (0..1000).map(|_| sampler.generate()).collect();
//! let mean = draws.iter().sum::<f64>() / draws.len() as f64;
//! assert!((mean - sampler.mean()).abs() < 0.05);
//! # Ok::<(), sampler_core::distributions::SamplerError>(())
//! ```

pub mod beta;
pub mod config;
pub mod error;
pub mod gamma;

pub use beta::BetaSampler;
pub use config::{BetaConfig, BetaConfigBuilder, DEFAULT_ALPHA, DEFAULT_BETA};
pub use error::SamplerError;
pub use gamma::sample_gamma;
