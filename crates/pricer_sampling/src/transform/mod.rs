//! # Distribution Transforms
//!
//! Scalar generators that wrap a [`UniformSource`](crate::uniform::UniformSource)
//! and turn one or two raw draws into a variate of a target distribution.
//!
//! ## Design Rationale
//!
//! - **Static dispatch**: every transform is generic over its source, so a
//!   full Source → Transform → Array stack is monomorphised and the hot
//!   path carries no virtual calls.
//! - **Total generation**: [`ScalarGenerator::next_draw`] never fails.
//!   Boundary uniforms where an inverse CDF is undefined are clamped to
//!   the nearest finite deviate.
//! - **Mirroring**: each transform knows its own antithetic reflection
//!   (`1 − u` for uniforms, `−x` for standard Gaussians) and whether that
//!   reflection is valid at all.
//!
//! ## Module Structure
//!
//! - [`UniformTransform`]: identity, one draw per variate
//! - [`InverseCumulativeGaussian`]: Acklam inverse CDF, one draw per variate
//! - [`BoxMullerGaussian`]: two draws per pair of variates
//! - [`ShiftedGaussian`]: mean-shift importance sampling with weights

mod box_muller;
mod identity;
mod inverse_cumulative;
mod shifted;

pub use box_muller::BoxMullerGaussian;
pub use identity::UniformTransform;
pub use inverse_cumulative::{inverse_normal_cdf, InverseCumulativeGaussian, MIN_UNIFORM};
pub use shifted::ShiftedGaussian;

use crate::error::ConfigError;

/// One scalar variate together with its importance weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Draw {
    /// Variate drawn from the target distribution.
    pub value: f64,
    /// Likelihood-ratio weight; exactly 1.0 without importance sampling.
    pub weight: f64,
}

impl Draw {
    /// A draw with unit weight.
    #[inline]
    pub fn unweighted(value: f64) -> Self {
        Self { value, weight: 1.0 }
    }
}

/// A stream of scalar variates from a fixed distribution.
pub trait ScalarGenerator {
    /// Returns the next variate and its weight.
    fn next_draw(&mut self) -> Draw;

    /// Restarts the underlying stream from `seed` and discards any cached
    /// variate.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError::InvalidSeed`] from the uniform source.
    fn reset(&mut self, seed: u64) -> Result<(), ConfigError>;

    /// Returns the seed most recently applied to the underlying source.
    fn seed(&self) -> u64;

    /// Antithetic reflection of `value`.
    fn mirror(&self, value: f64) -> f64;

    /// Whether [`mirror`](Self::mirror) yields a valid antithetic partner
    /// with an unchanged weight.
    fn is_symmetric(&self) -> bool;

    /// Human-readable distribution name, used in diagnostics.
    fn name(&self) -> &'static str;
}

/// Marker for generators whose variates are standard normal with unit
/// weight.
pub trait GaussianTransform: ScalarGenerator {}
