//! Box–Muller Gaussian transform.
//!
//! Consumes two uniform draws per pair of independent standard normal
//! deviates. The second deviate of each pair is cached and returned by the
//! following call without touching the source.
//!
//! # Algorithm Reference
//!
//! - Box, G. E. P. & Muller, M. E. (1958). "A Note on the Generation of
//!   Random Normal Deviates". Annals of Mathematical Statistics 29(2).

use std::f64::consts::TAU;

use super::{Draw, GaussianTransform, ScalarGenerator, MIN_UNIFORM};
use crate::error::ConfigError;
use crate::uniform::UniformSource;

/// Standard Gaussian transform by the Box–Muller method.
///
/// The radius uniform is clamped into `[MIN_UNIFORM, 1]` before the
/// logarithm, so a zero draw yields a finite radius.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::transform::{BoxMullerGaussian, ScalarGenerator};
/// use pricer_sampling::uniform::StdUniformSource;
///
/// let mut gaussian = BoxMullerGaussian::new(StdUniformSource::from_seed(42));
/// let first = gaussian.next_draw();
/// let second = gaussian.next_draw(); // served from cache
/// assert!(first.value.is_finite() && second.value.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct BoxMullerGaussian<S> {
    source: S,
    cached: Option<f64>,
}

impl<S: UniformSource> BoxMullerGaussian<S> {
    /// Wraps `source` with an empty cache.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: None,
        }
    }

    /// Returns a reference to the underlying source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether the next call will be served from the cached deviate.
    #[inline]
    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }
}

impl<S: UniformSource> ScalarGenerator for BoxMullerGaussian<S> {
    #[inline]
    fn next_draw(&mut self) -> Draw {
        if let Some(value) = self.cached.take() {
            return Draw::unweighted(value);
        }

        let u1 = self.source.next_uniform().clamp(MIN_UNIFORM, 1.0);
        let u2 = self.source.next_uniform();

        let radius = (-2.0 * u1.ln()).sqrt();
        let (sin, cos) = (TAU * u2).sin_cos();

        self.cached = Some(radius * sin);
        Draw::unweighted(radius * cos)
    }

    fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.source.reset(seed)?;
        self.cached = None;
        Ok(())
    }

    #[inline]
    fn seed(&self) -> u64 {
        self.source.seed()
    }

    #[inline]
    fn mirror(&self, value: f64) -> f64 {
        -value
    }

    fn is_symmetric(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "Box-Muller Gaussian"
    }
}

impl<S: UniformSource> GaussianTransform for BoxMullerGaussian<S> {}
