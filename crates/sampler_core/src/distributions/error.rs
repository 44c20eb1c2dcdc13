//! Error types for sampling and special-function evaluation.
//!
//! This module provides:
//! - `SamplerError`: invalid shape parameters, out-of-domain arguments and
//!   non-convergent series

use thiserror::Error;

/// Sampler errors.
///
/// # Variants
/// - `InvalidParameter`: Non-positive or non-finite shape parameter
/// - `DomainError`: Argument outside a function's domain
/// - `NotConverged`: Continued fraction did not converge
///
/// # Examples
/// ```
/// use sampler_core::distributions::SamplerError;
///
/// let err = SamplerError::InvalidParameter { name: "alpha", value: -1.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'alpha' = -1: must be positive and finite"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SamplerError {
    /// Shape parameter is zero, negative, NaN or infinite.
    #[error("Invalid parameter '{name}' = {value}: must be positive and finite")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Function argument outside its domain.
    #[error("Argument '{name}' = {value} is outside the function domain")]
    DomainError {
        /// Argument name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Iterative evaluation exhausted its budget.
    #[error("Failed to converge after {iterations} iterations")]
    NotConverged {
        /// Number of iterations performed
        iterations: usize,
    },
}

/// Checks that a shape parameter is strictly positive and finite.
pub(crate) fn validate_shape(name: &'static str, value: f64) -> Result<f64, SamplerError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SamplerError::InvalidParameter { name, value })
    }
}
