//! Beta sampler configuration.
//!
//! This module provides [`BetaConfig`] and its builder, the validated set of
//! inputs a [`BetaSampler`](super::BetaSampler) is constructed from.

use super::error::{validate_shape, SamplerError};

/// Default first shape parameter.
pub const DEFAULT_ALPHA: f64 = 2.0;

/// Default second shape parameter.
pub const DEFAULT_BETA: f64 = 2.0;

/// Beta sampler configuration.
///
/// Immutable once built. Use [`BetaConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use sampler_core::distributions::BetaConfig;
///
/// let config = BetaConfig::builder()
///     .alpha(0.5)
///     .beta(3.0)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.alpha(), 0.5);
/// assert_eq!(config.beta(), 3.0);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaConfig {
    /// First shape parameter.
    alpha: f64,
    /// Second shape parameter.
    beta: f64,
    /// Optional seed for reproducibility.
    seed: Option<u32>,
}

impl Default for BetaConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            seed: None,
        }
    }
}

impl BetaConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> BetaConfigBuilder {
        BetaConfigBuilder::default()
    }

    /// Returns the first shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the second shape parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// Needed for instances that bypassed the builder (deserialised input).
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`] if either shape is not
    /// strictly positive and finite.
    pub fn validate(&self) -> Result<(), SamplerError> {
        validate_shape("alpha", self.alpha)?;
        validate_shape("beta", self.beta)?;
        Ok(())
    }
}

/// Builder for [`BetaConfig`].
///
/// Unset shapes fall back to [`DEFAULT_ALPHA`] and [`DEFAULT_BETA`].
#[derive(Clone, Debug, Default)]
pub struct BetaConfigBuilder {
    alpha: Option<f64>,
    beta: Option<f64>,
    seed: Option<u32>,
}

impl BetaConfigBuilder {
    /// Sets the first shape parameter.
    #[inline]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Sets the second shape parameter.
    #[inline]
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u32>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`] for a non-positive or
    /// non-finite shape.
    pub fn build(self) -> Result<BetaConfig, SamplerError> {
        let config = BetaConfig {
            alpha: self.alpha.unwrap_or(DEFAULT_ALPHA),
            beta: self.beta.unwrap_or(DEFAULT_BETA),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
