//! Statistical and behavioural properties of the Beta sampler.
//!
//! # Test Categories
//!
//! 1. **Bounds**: every draw lies in [0, 1], or is `NaN` on double underflow
//! 2. **Determinism**: a seed fixes the stream, pinned to known values
//! 3. **Moments and shape**: sample means and histograms match Beta(a, b)
//! 4. **Stream continuity**: reparameterising never rewinds or skips the stream
//! 5. **Goodness of fit**: Kolmogorov–Smirnov distance against the exact CDF

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use sampler_core::distributions::BetaSampler;
use sampler_core::special::ks_distance;

fn draws(sampler: &mut BetaSampler, n: usize) -> Vec<f64> {
    (0..n).map(|_| sampler.generate()).collect()
}

fn sample_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_draws_within_support() {
    let shapes = [(2.0, 2.0), (0.5, 0.5), (5.0, 1.0), (0.1, 30.0), (100.0, 100.0)];

    for (seed, &(a, b)) in shapes.iter().enumerate() {
        let mut sampler = BetaSampler::with_seed(a, b, seed as u32).unwrap();
        for value in draws(&mut sampler, 10_000) {
            if value.is_nan() {
                continue;
            }
            assert!(
                (sampler.min()..=sampler.max()).contains(&value),
                "draw {} outside [0, 1] for Beta({}, {})",
                value,
                a,
                b
            );
        }
    }
}

#[test]
fn test_tiny_shapes_return_nan_without_panicking() {
    // Both Gamma draws underflow to zero almost every time
    let mut sampler = BetaSampler::with_seed(1e-5, 1e-5, 1).unwrap();
    let values = draws(&mut sampler, 2_000);

    let nan_count = values.iter().filter(|v| v.is_nan()).count();
    assert!(nan_count > 1_000, "only {} NaN draws", nan_count);
    assert!(values
        .iter()
        .filter(|v| !v.is_nan())
        .all(|v| (0.0..=1.0).contains(v)));
    assert!(ks_distance(1e-5, 1e-5, &values).is_ok());
}

#[test]
fn test_huge_shapes_do_not_collapse_to_zero() {
    let mut sampler = BetaSampler::with_seed(1e308, 1e308, 1).unwrap();
    for value in draws(&mut sampler, 5) {
        assert_eq!(value, 0.5);
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_fixed_seed_reproduces_sequence() {
    let run = || {
        let mut sampler = BetaSampler::default();
        sampler.seed(42);
        sampler.set_params(2.0, 2.0).unwrap();
        draws(&mut sampler, 1_000)
    };

    assert_eq!(run(), run());
}

#[test]
fn test_seed_one_first_draw_is_reproducible() {
    let first = || {
        let mut sampler = BetaSampler::new(2.0, 2.0).unwrap();
        sampler.seed(1);
        sampler.generate()
    };

    let v1 = first();
    assert_relative_eq!(v1, 0.7635440349551548, max_relative = 1e-12);
    assert_eq!(v1, first());
}

#[test]
fn test_seed_42_stream_is_pinned() {
    let mut sampler = BetaSampler::with_seed(2.0, 2.0, 42).unwrap();
    let expected = [0.46418881495252495, 0.32937889222376665, 0.08333785942915722];
    for (value, expected) in draws(&mut sampler, 3).into_iter().zip(expected) {
        assert_relative_eq!(value, expected, max_relative = 1e-12);
    }

    // Shapes below one take the boosted Gamma path
    let mut sampler = BetaSampler::with_seed(0.5, 0.5, 42).unwrap();
    let expected = [0.7568162607040726, 0.49999367083587154, 0.00037751769624936443];
    for (value, expected) in draws(&mut sampler, 3).into_iter().zip(expected) {
        assert_relative_eq!(value, expected, max_relative = 1e-12);
    }
}

#[test]
fn test_reseed_rewinds_stream() {
    let mut sampler = BetaSampler::with_seed(3.0, 4.0, 8).unwrap();
    let initial = draws(&mut sampler, 50);
    sampler.seed(8);
    assert_eq!(draws(&mut sampler, 50), initial);
}

#[test]
fn test_unseeded_samplers_differ() {
    let mut a = BetaSampler::default();
    let mut b = BetaSampler::default();
    assert_ne!(draws(&mut a, 16), draws(&mut b, 16));
}

// ============================================================================
// Moments and shape
// ============================================================================

#[test]
fn test_symmetric_mean() {
    let mut sampler = BetaSampler::with_seed(2.0, 2.0, 2024).unwrap();
    let mean = sample_mean(&draws(&mut sampler, 100_000));
    assert_abs_diff_eq!(mean, 0.5, epsilon = 0.01);
}

#[test]
fn test_skewed_mean() {
    let mut sampler = BetaSampler::with_seed(5.0, 1.0, 2025).unwrap();
    let mean = sample_mean(&draws(&mut sampler, 100_000));
    assert_abs_diff_eq!(mean, 5.0 / 6.0, epsilon = 0.02);
}

#[test]
fn test_sample_variance_matches_analytic() {
    let mut sampler = BetaSampler::with_seed(2.0, 5.0, 31).unwrap();
    let values = draws(&mut sampler, 100_000);
    let mean = sample_mean(&values);
    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;

    assert_abs_diff_eq!(mean, sampler.mean(), epsilon = 0.005);
    assert_abs_diff_eq!(variance, sampler.variance(), epsilon = 0.002);
}

#[test]
fn test_u_shaped_histogram() {
    let mut sampler = BetaSampler::with_seed(2.0, 2.0, 77).unwrap();
    sampler.set_params(0.5, 0.5).unwrap();

    let mut bins = [0usize; 10];
    for value in draws(&mut sampler, 50_000) {
        let index = ((value * 10.0) as usize).min(9);
        bins[index] += 1;
    }

    let middle = bins[4] + bins[5];
    assert!(bins[0] > 2 * bins[4], "bins: {:?}", bins);
    assert!(bins[9] > 2 * bins[5], "bins: {:?}", bins);
    assert!(bins[0] + bins[9] > 2 * middle, "bins: {:?}", bins);
}

// ============================================================================
// Stream continuity under reparameterisation
// ============================================================================

#[test]
fn test_set_params_does_not_perturb_stream() {
    let mut plain = BetaSampler::with_seed(2.0, 2.0, 7).unwrap();
    let mut interleaved = BetaSampler::with_seed(2.0, 2.0, 7).unwrap();

    assert_eq!(draws(&mut plain, 25), draws(&mut interleaved, 25));

    plain.set_params(5.0, 1.0).unwrap();

    // Extra reparameterisations at the same stream position
    interleaved.set_params(0.3, 9.0).unwrap();
    interleaved.set_params(40.0, 40.0).unwrap();
    interleaved.set_params(5.0, 1.0).unwrap();

    assert_eq!(draws(&mut plain, 100), draws(&mut interleaved, 100));
}

#[test]
fn test_set_params_does_not_rewind_stream() {
    let mut fresh = BetaSampler::with_seed(2.0, 2.0, 11).unwrap();
    let first = draws(&mut fresh, 5);

    let mut sampler = BetaSampler::with_seed(2.0, 2.0, 11).unwrap();
    draws(&mut sampler, 5);
    sampler.set_params(2.0, 2.0).unwrap();

    assert_ne!(draws(&mut sampler, 5), first);
}

#[test]
fn test_min_max_are_constant() {
    let mut sampler = BetaSampler::default();
    for (a, b) in [(0.5, 0.5), (9.0, 2.0), (1.0, 1.0)] {
        sampler.set_params(a, b).unwrap();
        sampler.generate();
        assert_eq!(sampler.min(), 0.0);
        assert_eq!(sampler.max(), 1.0);
    }
}

// ============================================================================
// Goodness of fit
// ============================================================================

#[test]
fn test_ks_distance_against_exact_cdf() {
    // Critical value at 1% for n = 20_000 is about 1.63 / sqrt(n) = 0.0115
    for (seed, (a, b)) in [(2.0, 2.0), (0.5, 0.5), (5.0, 1.0), (0.7, 3.0)]
        .into_iter()
        .enumerate()
    {
        let mut sampler = BetaSampler::with_seed(a, b, 1000 + seed as u32).unwrap();
        let distance = ks_distance(a, b, &draws(&mut sampler, 20_000)).unwrap();
        assert!(distance < 0.02, "KS distance {} for Beta({}, {})", distance, a, b);
    }
}

#[test]
fn test_ks_distance_for_large_shapes() {
    // 1% critical value for n = 2_000 is about 0.036
    let (a, b) = (1e6, 1e6);
    let mut sampler = BetaSampler::with_seed(a, b, 1).unwrap();
    let distance = ks_distance(a, b, &draws(&mut sampler, 2_000)).unwrap();
    assert!(distance < 0.036, "KS distance {} for Beta({}, {})", distance, a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property test: any valid shapes and seed keep draws inside [0, 1].
    #[test]
    fn prop_draws_within_support(
        seed in any::<u32>(),
        a in 0.05f64..50.0,
        b in 0.05f64..50.0,
    ) {
        let mut sampler = BetaSampler::with_seed(a, b, seed).unwrap();
        for _ in 0..1_000 {
            let v = sampler.generate();
            prop_assert!(v.is_nan() || (0.0..=1.0).contains(&v), "draw {} (a={}, b={})", v, a, b);
        }
    }

    /// Property test: two samplers with the same seed agree draw for draw.
    #[test]
    fn prop_seed_determinism(seed in any::<u32>(), a in 0.1f64..10.0, b in 0.1f64..10.0) {
        let mut s1 = BetaSampler::with_seed(a, b, seed).unwrap();
        let mut s2 = BetaSampler::with_seed(a, b, seed).unwrap();
        for _ in 0..100 {
            prop_assert_eq!(s1.generate(), s2.generate());
        }
    }
}
