//! Random array generator with optional antithetic mirroring.

use super::{Phase, Sample, MAX_DIMENSION};
use crate::error::ConfigError;
use crate::transform::{InverseCumulativeGaussian, ScalarGenerator};
use crate::uniform::StdUniformSource;

/// Default choice for the Gaussian random array generator.
pub type GaussianArrayGenerator<S = StdUniformSource> =
    RandomArrayGenerator<InverseCumulativeGaussian<S>>;

/// Produces one [`Sample`] of `dimension` variates per call.
///
/// Draws are taken from the wrapped scalar generator in index order and
/// their weights are multiplied into the sample weight. In antithetic mode
/// the generator alternates between two phases:
///
/// - [`Phase::Fresh`]: draw `dimension` new variates, remember them, and
///   switch to `Mirror`.
/// - [`Phase::Mirror`]: emit the mirrored copy of the remembered variates
///   with the same weight, consuming no randomness, and switch back.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::array::GaussianArrayGenerator;
/// use pricer_sampling::transform::InverseCumulativeGaussian;
/// use pricer_sampling::uniform::StdUniformSource;
///
/// let gaussian = InverseCumulativeGaussian::new(StdUniformSource::from_seed(42));
/// let mut generator = GaussianArrayGenerator::antithetic(gaussian, 3).unwrap();
///
/// let fresh = generator.next_sample();
/// let mirror = generator.next_sample();
/// for i in 0..3 {
///     assert_eq!(mirror[i], -fresh[i]);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RandomArrayGenerator<G> {
    generator: G,
    dimension: usize,
    antithetic: bool,
    phase: Phase,
    /// Values of the last fresh sample, replayed mirrored in `Mirror`.
    stored: Vec<f64>,
    stored_weight: f64,
}

impl<G: ScalarGenerator> RandomArrayGenerator<G> {
    /// Creates a plain (non-antithetic) array generator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimension`] if `dimension` is 0 or
    /// greater than [`MAX_DIMENSION`].
    pub fn new(generator: G, dimension: usize) -> Result<Self, ConfigError> {
        Self::build(generator, dimension, false)
    }

    /// Creates an antithetic array generator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimension`] for an out-of-range
    /// dimension and [`ConfigError::AsymmetricAntithetic`] if the scalar
    /// generator cannot be mirrored without changing its weights.
    pub fn antithetic(generator: G, dimension: usize) -> Result<Self, ConfigError> {
        Self::build(generator, dimension, true)
    }

    fn build(generator: G, dimension: usize, antithetic: bool) -> Result<Self, ConfigError> {
        if dimension == 0 || dimension > MAX_DIMENSION {
            tracing::warn!(dimension, "rejected array dimension");
            return Err(ConfigError::InvalidDimension(dimension));
        }
        if antithetic && !generator.is_symmetric() {
            tracing::warn!(
                distribution = generator.name(),
                "rejected antithetic sampling of asymmetric distribution"
            );
            return Err(ConfigError::AsymmetricAntithetic(generator.name()));
        }

        tracing::debug!(
            distribution = generator.name(),
            dimension,
            antithetic,
            seed = generator.seed(),
            "array generator initialised"
        );

        Ok(Self {
            generator,
            dimension,
            antithetic,
            phase: Phase::Fresh,
            stored: Vec::with_capacity(if antithetic { dimension } else { 0 }),
            stored_weight: 1.0,
        })
    }

    /// Number of variates per sample.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether mirrored samples are interleaved.
    #[inline]
    pub fn is_antithetic(&self) -> bool {
        self.antithetic
    }

    /// Phase of the antithetic state machine; always `Fresh` in plain mode.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns a reference to the wrapped scalar generator.
    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates the next sample.
    pub fn next_sample(&mut self) -> Sample<f64> {
        match self.phase {
            Phase::Fresh => {
                let mut values = Vec::with_capacity(self.dimension);
                let mut weight = 1.0;
                for _ in 0..self.dimension {
                    let draw = self.generator.next_draw();
                    values.push(draw.value);
                    weight *= draw.weight;
                }
                // Long products of likelihood ratios can leave the normal range.
                let weight = weight.clamp(f64::MIN_POSITIVE, f64::MAX);

                if self.antithetic {
                    self.stored.clear();
                    self.stored.extend_from_slice(&values);
                    self.stored_weight = weight;
                    self.phase = Phase::Mirror;
                }
                Sample::new(values, weight)
            }
            Phase::Mirror => {
                let values = self
                    .stored
                    .iter()
                    .map(|&value| self.generator.mirror(value))
                    .collect();
                self.phase = Phase::Fresh;
                Sample::new(values, self.stored_weight)
            }
        }
    }

    /// Generates `count` consecutive samples.
    ///
    /// Antithetic pairs are kept in order; an odd `count` leaves the
    /// generator in `Mirror` so the next call completes the pair.
    pub fn fill_samples(&mut self, count: usize) -> Vec<Sample<f64>> {
        (0..count).map(|_| self.next_sample()).collect()
    }

    /// Restarts the stream from `seed` and returns to [`Phase::Fresh`],
    /// discarding any pending mirror.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError::InvalidSeed`] from the uniform source; the
    /// generator state is left untouched in that case.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.generator.reset(seed)?;
        self.phase = Phase::Fresh;
        self.stored.clear();
        self.stored_weight = 1.0;
        tracing::debug!(seed, dimension = self.dimension, "array generator reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{ShiftedGaussian, UniformTransform};
    use crate::uniform::{CountingSource, MinStdSource, UniformSource};

    fn gaussian(seed: u64) -> InverseCumulativeGaussian<StdUniformSource> {
        InverseCumulativeGaussian::new(StdUniformSource::from_seed(seed))
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            GaussianArrayGenerator::new(gaussian(1), 0).unwrap_err(),
            ConfigError::InvalidDimension(0)
        );
        assert!(matches!(
            GaussianArrayGenerator::antithetic(gaussian(1), MAX_DIMENSION + 1),
            Err(ConfigError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_asymmetric_antithetic_rejected() {
        let shifted = ShiftedGaussian::new(gaussian(1), 0.5).unwrap();
        assert_eq!(
            RandomArrayGenerator::antithetic(shifted.clone(), 4).unwrap_err(),
            ConfigError::AsymmetricAntithetic("shifted Gaussian")
        );
        assert!(RandomArrayGenerator::new(shifted, 4).is_ok());
    }

    #[test]
    fn test_plain_mode_draws_in_index_order() {
        let mut generator = GaussianArrayGenerator::new(gaussian(8), 4).unwrap();
        let mut reference = gaussian(8);

        for _ in 0..3 {
            let sample = generator.next_sample();
            assert_eq!(sample.len(), 4);
            assert_eq!(sample.weight(), 1.0);
            for i in 0..4 {
                assert_eq!(sample[i], reference.next_draw().value);
            }
            assert_eq!(generator.phase(), Phase::Fresh);
        }
    }

    #[test]
    fn test_antithetic_state_machine() {
        let source = CountingSource::new(StdUniformSource::from_seed(21));
        let mut generator =
            GaussianArrayGenerator::antithetic(InverseCumulativeGaussian::new(source), 3).unwrap();
        assert_eq!(generator.phase(), Phase::Fresh);

        let fresh = generator.next_sample();
        assert_eq!(generator.phase(), Phase::Mirror);
        assert_eq!(generator.generator().source().draws(), 3);

        let mirror = generator.next_sample();
        assert_eq!(generator.phase(), Phase::Fresh);
        assert_eq!(generator.generator().source().draws(), 3);

        for i in 0..3 {
            assert_eq!(mirror[i], -fresh[i]);
        }
        assert_eq!(mirror.weight(), fresh.weight());

        let next = generator.next_sample();
        assert_eq!(generator.generator().source().draws(), 6);
        assert_ne!(next, fresh);
    }

    #[test]
    fn test_uniform_mirror_is_complement() {
        let transform = UniformTransform::new(MinStdSource::new(77).unwrap());
        let mut generator = RandomArrayGenerator::antithetic(transform, 5).unwrap();

        let fresh = generator.next_sample();
        let mirror = generator.next_sample();
        for i in 0..5 {
            assert_eq!(mirror[i], 1.0 - fresh[i]);
        }
    }

    #[test]
    fn test_reset_clears_pending_mirror() {
        let mut generator = GaussianArrayGenerator::antithetic(gaussian(13), 2).unwrap();
        let first = generator.next_sample();
        assert_eq!(generator.phase(), Phase::Mirror);

        generator.reset(13).unwrap();
        assert_eq!(generator.phase(), Phase::Fresh);
        assert_eq!(generator.next_sample(), first);
    }

    #[test]
    fn test_failed_reset_keeps_state() {
        let transform = UniformTransform::new(MinStdSource::new(5).unwrap());
        let mut generator = RandomArrayGenerator::antithetic(transform, 2).unwrap();
        let fresh = generator.next_sample();

        assert!(generator.reset(0).is_err());
        assert_eq!(generator.phase(), Phase::Mirror);
        assert_eq!(generator.generator().source().seed(), 5);

        let mirror = generator.next_sample();
        assert_eq!(mirror[0], 1.0 - fresh[0]);
    }

    #[test]
    fn test_weights_multiply() {
        let shifted = ShiftedGaussian::new(gaussian(4), 0.3).unwrap();
        let mut generator = RandomArrayGenerator::new(shifted, 3).unwrap();

        let mut reference = ShiftedGaussian::new(gaussian(4), 0.3).unwrap();
        let expected: f64 = (0..3).map(|_| reference.next_draw().weight).product();

        let sample = generator.next_sample();
        approx::assert_relative_eq!(sample.weight(), expected, max_relative = 1e-14);
    }

    #[test]
    fn test_fill_samples_keeps_pairs() {
        let mut batch = GaussianArrayGenerator::antithetic(gaussian(30), 2).unwrap();
        let mut single = GaussianArrayGenerator::antithetic(gaussian(30), 2).unwrap();

        let samples = batch.fill_samples(5);
        assert_eq!(samples.len(), 5);
        for sample in &samples {
            assert_eq!(*sample, single.next_sample());
        }
        assert_eq!(batch.phase(), Phase::Mirror);
    }
}
