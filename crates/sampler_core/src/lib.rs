//! # sampler_core: Beta-Distributed Pseudo-Random Sampling
//!
//! Provides a seedable generator of Beta(alpha, beta) variates, built from
//! two Gamma(shape, 1) draws over one shared bit stream:
//!
//! - [`rng`]: the seeded bit generator (`SamplerRng`)
//! - [`distributions`]: `BetaSampler`, `sample_gamma`, configuration and errors
//! - [`special`]: Beta function, regularised incomplete beta (the Beta CDF)
//!   and the Beta density
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::distributions::BetaSampler;
//! use sampler_core::special::inc_beta;
//!
//! let mut sampler = BetaSampler::with_seed(2.0, 2.0, 42)?;
//! let x = sampler.generate();
//! assert!((0.0..=1.0).contains(&x));
//!
//! // Beta(2, 2) is symmetric about one half
//! let median_cdf = inc_beta(2.0, 2.0, 0.5)?;
//! assert!((median_cdf - 0.5).abs() < 1e-6);
//! # Ok::<(), sampler_core::distributions::SamplerError>(())
//! ```
//!
//! ## Thread Safety
//!
//! A sampler is a single-owner value. All mutation goes through `&mut self`;
//! use one sampler per thread or wrap it in a mutex.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for `BetaConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod rng;
pub mod special;
