//! Beta(alpha, beta) sampler built on the Gamma-ratio identity.
//!
//! If X ~ Gamma(alpha, 1) and Y ~ Gamma(beta, 1) are independent, then
//! X / (X + Y) ~ Beta(alpha, beta). Both Gamma draws consume the same
//! [`SamplerRng`] stream, alpha's first.

use tracing::debug;

use super::config::{BetaConfig, DEFAULT_ALPHA, DEFAULT_BETA};
use super::error::{validate_shape, SamplerError};
use super::gamma::sample_gamma;
use crate::rng::SamplerRng;

/// Pseudo-random generator of Beta(alpha, beta) variates.
///
/// Owns its bit generator exclusively. Every mutating method takes
/// `&mut self`; share an instance across threads only behind external
/// synchronisation.
///
/// # Examples
///
/// ```rust
/// use sampler_core::distributions::BetaSampler;
///
/// let mut sampler = BetaSampler::new(2.0, 5.0)?;
/// sampler.seed(42);
///
/// let x = sampler.generate();
/// assert!((sampler.min()..=sampler.max()).contains(&x));
///
/// sampler.set_params(0.5, 0.5)?;
/// assert_eq!(sampler.alpha(), 0.5);
/// assert_eq!(sampler.beta(), 0.5);
/// # Ok::<(), sampler_core::distributions::SamplerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BetaSampler {
    rng: SamplerRng,
    alpha: f64,
    beta: f64,
}

impl Default for BetaSampler {
    /// Beta(2, 2) seeded from OS entropy.
    fn default() -> Self {
        Self {
            rng: SamplerRng::from_entropy(),
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
        }
    }
}

impl BetaSampler {
    /// Creates a sampler seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`] if either shape is not
    /// strictly positive and finite.
    pub fn new(alpha: f64, beta: f64) -> Result<Self, SamplerError> {
        let alpha = validate_shape("alpha", alpha)?;
        let beta = validate_shape("beta", beta)?;
        debug!(alpha, beta, "beta sampler initialised from entropy");
        Ok(Self {
            rng: SamplerRng::from_entropy(),
            alpha,
            beta,
        })
    }

    /// Creates a sampler with a deterministic stream.
    ///
    /// Same as [`BetaSampler::new`] followed by [`BetaSampler::seed`].
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`] for an invalid shape.
    pub fn with_seed(alpha: f64, beta: f64, seed: u32) -> Result<Self, SamplerError> {
        let alpha = validate_shape("alpha", alpha)?;
        let beta = validate_shape("beta", beta)?;
        debug!(alpha, beta, seed, "beta sampler initialised from seed");
        Ok(Self {
            rng: SamplerRng::from_seed(seed),
            alpha,
            beta,
        })
    }

    /// Creates a sampler from a configuration.
    ///
    /// Seeds deterministically when the configuration carries a seed, from
    /// entropy otherwise.
    ///
    /// # Errors
    ///
    /// Revalidates the shapes, since a deserialised [`BetaConfig`] may not
    /// have passed through its builder.
    pub fn from_config(config: &BetaConfig) -> Result<Self, SamplerError> {
        match config.seed() {
            Some(seed) => Self::with_seed(config.alpha(), config.beta(), seed),
            None => Self::new(config.alpha(), config.beta()),
        }
    }

    /// Replaces the generator state with the stream for `value`.
    ///
    /// Shape parameters are untouched.
    pub fn seed(&mut self, value: u32) {
        debug!(seed = value, "beta sampler reseeded");
        self.rng.reseed(value);
    }

    /// Replaces both shape parameters.
    ///
    /// The generator keeps its stream position: the next draw continues the
    /// same uniform stream under the new shapes.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`] and leaves both parameters
    /// unchanged if either value is invalid.
    pub fn set_params(&mut self, alpha: f64, beta: f64) -> Result<(), SamplerError> {
        let alpha = validate_shape("alpha", alpha)?;
        let beta = validate_shape("beta", beta)?;
        debug!(alpha, beta, "beta sampler reparameterised");
        self.alpha = alpha;
        self.beta = beta;
        Ok(())
    }

    /// Draws one Beta(alpha, beta) variate.
    ///
    /// The result lies in [0, 1]. If both Gamma draws underflow to exactly
    /// zero (only plausible for tiny shapes) the ratio is `NaN`, which is
    /// returned unchanged.
    #[inline]
    pub fn generate(&mut self) -> f64 {
        let x = sample_gamma(&mut self.rng, self.alpha);
        let y = sample_gamma(&mut self.rng, self.beta);
        gamma_ratio(x, y)
    }

    /// Lower bound of the support.
    #[inline]
    pub fn min(&self) -> f64 {
        0.0
    }

    /// Upper bound of the support.
    #[inline]
    pub fn max(&self) -> f64 {
        1.0
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

    /// Distribution mean, alpha / (alpha + beta).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Distribution variance, alpha·beta / ((alpha + beta)² (alpha + beta + 1)).
    #[inline]
    pub fn variance(&self) -> f64 {
        let sum = self.alpha + self.beta;
        self.alpha * self.beta / (sum * sum * (sum + 1.0))
    }

    /// Returns the last explicit seed, or `None` while entropy-seeded.
    #[inline]
    pub fn seed_value(&self) -> Option<u32> {
        self.rng.seed()
    }
}

/// x / (x + y) without forming the sum, which overflows for huge shapes.
///
/// Divides by the larger operand, so 0/0 is the only `NaN` case.
#[inline]
fn gamma_ratio(x: f64, y: f64) -> f64 {
    if x >= y {
        1.0 / (1.0 + y / x)
    } else {
        let r = x / y;
        r / (1.0 + r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_shapes() {
        let sampler = BetaSampler::default();
        assert_eq!(sampler.alpha(), 2.0);
        assert_eq!(sampler.beta(), 2.0);
        assert_eq!(sampler.seed_value(), None);
    }

    #[test]
    fn test_beta_accessor_is_independent_of_alpha() {
        let sampler = BetaSampler::new(3.0, 7.0).unwrap();
        assert_eq!(sampler.alpha(), 3.0);
        assert_eq!(sampler.beta(), 7.0);
    }

    #[test]
    fn test_new_rejects_non_positive_shapes() {
        assert_eq!(
            BetaSampler::new(0.0, 1.0).unwrap_err(),
            SamplerError::InvalidParameter {
                name: "alpha",
                value: 0.0
            }
        );
        assert!(matches!(
            BetaSampler::with_seed(1.0, -1.0, 3),
            Err(SamplerError::InvalidParameter { name: "beta", .. })
        ));
    }

    #[test]
    fn test_set_params_failure_leaves_state_unchanged() {
        let mut sampler = BetaSampler::with_seed(2.0, 3.0, 1).unwrap();
        let err = sampler.set_params(4.0, f64::NAN);
        assert!(err.is_err());
        assert_eq!(sampler.alpha(), 2.0);
        assert_eq!(sampler.beta(), 3.0);
    }

    #[test]
    fn test_seed_keeps_shapes() {
        let mut sampler = BetaSampler::new(0.7, 1.3).unwrap();
        sampler.seed(77);
        assert_eq!(sampler.alpha(), 0.7);
        assert_eq!(sampler.beta(), 1.3);
        assert_eq!(sampler.seed_value(), Some(77));
    }

    #[test]
    fn test_generate_does_not_touch_shapes() {
        let mut sampler = BetaSampler::with_seed(1.5, 2.5, 4).unwrap();
        for _ in 0..100 {
            sampler.generate();
        }
        assert_eq!(sampler.alpha(), 1.5);
        assert_eq!(sampler.beta(), 2.5);
    }

    #[test]
    fn test_generate_matches_gamma_ratio() {
        let mut sampler = BetaSampler::with_seed(2.0, 5.0, 10).unwrap();
        let mut rng = SamplerRng::from_seed(10);

        for _ in 0..20 {
            let x = sample_gamma(&mut rng, 2.0);
            let y = sample_gamma(&mut rng, 5.0);
            assert_relative_eq!(sampler.generate(), x / (x + y), max_relative = 1e-15);
        }
    }

    #[test]
    fn test_gamma_ratio_edges() {
        assert_eq!(gamma_ratio(0.0, 2.0), 0.0);
        assert_eq!(gamma_ratio(2.0, 0.0), 1.0);
        assert_eq!(gamma_ratio(3.0, 3.0), 0.5);
        assert!(gamma_ratio(0.0, 0.0).is_nan());
        assert_relative_eq!(gamma_ratio(1.0, 3.0), 0.25);
    }

    #[test]
    fn test_gamma_ratio_does_not_overflow() {
        assert_eq!(gamma_ratio(f64::MAX, f64::MAX), 0.5);
        assert_relative_eq!(gamma_ratio(1.5e308, 0.5e308), 0.75);
        assert_relative_eq!(gamma_ratio(0.5e308, 1.5e308), 0.25);
    }

    #[test]
    fn test_huge_symmetric_shapes_centre_on_half() {
        for shape in [1e300, 1e308] {
            let mut sampler = BetaSampler::with_seed(shape, shape, 1).unwrap();
            let mean = (0..1_000).map(|_| sampler.generate()).sum::<f64>() / 1_000.0;
            assert_relative_eq!(mean, 0.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_from_config_with_seed_matches_with_seed() {
        let config = BetaConfig::builder()
            .alpha(3.0)
            .beta(1.0)
            .seed(123)
            .build()
            .unwrap();
        let mut a = BetaSampler::from_config(&config).unwrap();
        let mut b = BetaSampler::with_seed(3.0, 1.0, 123).unwrap();
        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_bounds_are_fixed() {
        let mut sampler = BetaSampler::with_seed(0.2, 9.0, 5).unwrap();
        assert_eq!(sampler.min(), 0.0);
        assert_eq!(sampler.max(), 1.0);
        sampler.set_params(40.0, 0.1).unwrap();
        sampler.generate();
        assert_eq!(sampler.min(), 0.0);
        assert_eq!(sampler.max(), 1.0);
    }

    #[test]
    fn test_analytic_moments() {
        let sampler = BetaSampler::new(2.0, 3.0).unwrap();
        assert_relative_eq!(sampler.mean(), 0.4);
        assert_relative_eq!(sampler.variance(), 0.04);
    }
}
