//! # Array and Path Generators
//!
//! The composition point of the pipeline: given a scalar generator and a
//! dimension count `N`, produce one [`Sample`] of `N` ordered variates per
//! call, with the per-draw weights multiplied into the sample weight.
//!
//! ## Module Structure
//!
//! - [`Sample`]: ordered values plus importance weight
//! - [`RandomArrayGenerator`]: independent draws, optional antithetic mode
//! - [`CorrelatedArrayGenerator`]: multivariate normal with mean and
//!   covariance

mod correlated;
mod generator;
mod sample;

pub use correlated::CorrelatedArrayGenerator;
pub use generator::{GaussianArrayGenerator, RandomArrayGenerator};
pub use sample::Sample;

/// Maximum number of variates per sample.
pub const MAX_DIMENSION: usize = 100_000;

/// Phase of the antithetic state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The next sample draws fresh randomness.
    #[default]
    Fresh,
    /// The next sample mirrors the previous fresh one.
    Mirror,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_default() {
        assert_eq!(Phase::default(), Phase::Fresh);
    }

    #[test]
    fn test_sample_accessors() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0], 0.5);
        assert_eq!(sample.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(sample[1], 2.0);
        assert_eq!(sample.weight(), 0.5);
        assert!(!sample.is_empty());
    }
}
