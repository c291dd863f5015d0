//! Mean-shift importance sampling for Gaussian variates.
//!
//! Variates are drawn from `N(μ, 1)` instead of `N(0, 1)` and each carries
//! the likelihood ratio `φ(x) / φ(x − μ) = exp(−μx + μ²/2)`, which keeps an
//! estimator of a standard-normal expectation unbiased while pushing
//! samples towards the region that matters (deep out-of-the-money payoffs,
//! rare default events).

use super::{Draw, GaussianTransform, ScalarGenerator};
use crate::error::ConfigError;

/// Gaussian transform shifted by a constant drift, with likelihood-ratio
/// weights.
///
/// Reflecting a shifted variate about its mean changes its weight, so this
/// generator reports itself as asymmetric and cannot be used in antithetic
/// mode.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::transform::{InverseCumulativeGaussian, ScalarGenerator, ShiftedGaussian};
/// use pricer_sampling::uniform::StdUniformSource;
///
/// let inner = InverseCumulativeGaussian::new(StdUniformSource::from_seed(1));
/// let mut shifted = ShiftedGaussian::new(inner, 1.5).unwrap();
///
/// let draw = shifted.next_draw();
/// assert!(draw.weight > 0.0 && draw.weight.is_finite());
/// assert!(!shifted.is_symmetric());
/// ```
#[derive(Clone, Debug)]
pub struct ShiftedGaussian<G> {
    inner: G,
    drift: f64,
}

impl<G: GaussianTransform> ShiftedGaussian<G> {
    /// Shifts the variates of `inner` by `drift`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `drift` is NaN or
    /// infinite.
    pub fn new(inner: G, drift: f64) -> Result<Self, ConfigError> {
        if !drift.is_finite() {
            tracing::warn!(drift, "rejected importance-sampling drift");
            return Err(ConfigError::InvalidParameter {
                name: "drift",
                value: format!("must be finite, got {}", drift),
            });
        }
        Ok(Self { inner, drift })
    }

    /// Returns the mean shift μ.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Returns a reference to the wrapped Gaussian transform.
    #[inline]
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: GaussianTransform> ScalarGenerator for ShiftedGaussian<G> {
    #[inline]
    fn next_draw(&mut self) -> Draw {
        let z = self.inner.next_draw();
        let mu = self.drift;
        // exp(−μx + μ²/2) with x = z + μ, factored so no inf − inf arises
        let ratio = (-mu * (z.value + 0.5 * mu)).exp();

        Draw {
            value: z.value + mu,
            weight: (z.weight * ratio).clamp(f64::MIN_POSITIVE, f64::MAX),
        }
    }

    fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.inner.reset(seed)
    }

    #[inline]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    #[inline]
    fn mirror(&self, value: f64) -> f64 {
        2.0 * self.drift - value
    }

    fn is_symmetric(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "shifted Gaussian"
    }
}
