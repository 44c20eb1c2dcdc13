//! # Random Number Generation Infrastructure
//!
//! This module provides the pseudo-random bit source shared by every draw a
//! [`BetaSampler`](crate::distributions::BetaSampler) makes.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Generators accept a 32-bit seed and replay the same
//!   stream for the same seed
//! - **Fresh by default**: Unseeded generators draw their state from OS entropy
//! - **Static dispatch**: [`SamplerRng`] wraps a concrete `StdRng` and hands
//!   out the uniform and normal draws the Gamma kernel consumes
//!
//! All documentation in this crate uses British English spelling
//! ("initialise", "behaviour", "parameterise").
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::SamplerRng;
//!
//! let mut rng = SamplerRng::from_seed(12345);
//!
//! let uniform_value = rng.gen_uniform();
//! let normal_value = rng.gen_normal();
//! assert!((0.0..1.0).contains(&uniform_value));
//! assert!(normal_value.is_finite());
//! ```

mod prng;

pub use prng::SamplerRng;
