//! Runtime-configured generator stacks.

use super::config::{DistributionKind, SamplerConfig, SourceKind};
use crate::array::{GaussianArrayGenerator, Phase, RandomArrayGenerator, Sample};
use crate::error::ConfigError;
use crate::transform::{
    BoxMullerGaussian, InverseCumulativeGaussian, ScalarGenerator, ShiftedGaussian,
    UniformTransform,
};
use crate::uniform::{MinStdSource, StdUniformSource, UniformSource};

/// One monomorphised Source → Transform → Array stack per distribution.
#[derive(Clone, Debug)]
enum Stack<S> {
    Uniform(RandomArrayGenerator<UniformTransform<S>>),
    Gaussian(GaussianArrayGenerator<S>),
    BoxMuller(RandomArrayGenerator<BoxMullerGaussian<S>>),
    Shifted(RandomArrayGenerator<ShiftedGaussian<InverseCumulativeGaussian<S>>>),
}

macro_rules! dispatch {
    ($stack:expr, $generator:ident => $body:expr) => {
        match $stack {
            Stack::Uniform($generator) => $body,
            Stack::Gaussian($generator) => $body,
            Stack::BoxMuller($generator) => $body,
            Stack::Shifted($generator) => $body,
        }
    };
}

impl<S: UniformSource> Stack<S> {
    fn build(source: S, config: &SamplerConfig) -> Result<Self, ConfigError> {
        let dimension = config.dimension();
        let antithetic = config.antithetic();

        fn array<G: ScalarGenerator>(
            generator: G,
            dimension: usize,
            antithetic: bool,
        ) -> Result<RandomArrayGenerator<G>, ConfigError> {
            if antithetic {
                RandomArrayGenerator::antithetic(generator, dimension)
            } else {
                RandomArrayGenerator::new(generator, dimension)
            }
        }

        Ok(match config.distribution() {
            DistributionKind::Uniform => {
                Stack::Uniform(array(UniformTransform::new(source), dimension, antithetic)?)
            }
            DistributionKind::Gaussian => Stack::Gaussian(array(
                InverseCumulativeGaussian::new(source),
                dimension,
                antithetic,
            )?),
            DistributionKind::BoxMullerGaussian => Stack::BoxMuller(array(
                BoxMullerGaussian::new(source),
                dimension,
                antithetic,
            )?),
            DistributionKind::ShiftedGaussian { drift } => {
                let shifted = ShiftedGaussian::new(InverseCumulativeGaussian::new(source), drift)?;
                Stack::Shifted(array(shifted, dimension, antithetic)?)
            }
        })
    }

    #[inline]
    fn next_sample(&mut self) -> Sample<f64> {
        dispatch!(self, generator => generator.next_sample())
    }

    fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        dispatch!(self, generator => generator.reset(seed))
    }

    fn phase(&self) -> Phase {
        dispatch!(self, generator => generator.phase())
    }

    fn seed(&self) -> u64 {
        dispatch!(self, generator => generator.generator().seed())
    }
}

#[derive(Clone, Debug)]
enum Backend {
    Std(Stack<StdUniformSource>),
    MinStd(Stack<MinStdSource>),
}

/// A fully configured generator stack.
///
/// The concrete Source → Transform → Array composition is selected once,
/// in [`SamplerHandle::new`]; generation then runs on statically dispatched
/// code. A handle must not be shared between workers; build one per worker
/// from [`SamplerConfig::for_worker`].
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::sampler::{construct, DistributionKind};
///
/// let mut handle = construct(42, 5, DistributionKind::Gaussian, false).unwrap();
/// let sample = handle.generate();
/// assert_eq!(sample.len(), 5);
/// assert_eq!(sample.weight(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct SamplerHandle {
    config: SamplerConfig,
    backend: Backend,
}

impl SamplerHandle {
    /// Builds the stack described by `config`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] raised by validation or by any
    /// layer of the stack.
    pub fn new(config: &SamplerConfig) -> Result<Self, ConfigError> {
        config.validate().inspect_err(|err| {
            tracing::warn!(error = %err, "rejected sampler configuration");
        })?;

        let backend = match config.source() {
            SourceKind::StdRng => Backend::Std(Stack::build(
                StdUniformSource::from_seed(config.seed()),
                config,
            )?),
            SourceKind::MinStd => Backend::MinStd(Stack::build(
                MinStdSource::new(config.seed())?,
                config,
            )?),
        };

        tracing::debug!(
            seed = config.seed(),
            dimension = config.dimension(),
            kind = %config.distribution(),
            source = ?config.source(),
            antithetic = config.antithetic(),
            "sampler constructed"
        );

        Ok(Self {
            config: config.clone(),
            backend,
        })
    }

    /// Generates the next sample.
    #[inline]
    pub fn generate(&mut self) -> Sample<f64> {
        match &mut self.backend {
            Backend::Std(stack) => stack.next_sample(),
            Backend::MinStd(stack) => stack.next_sample(),
        }
    }

    /// Restarts the stream from `seed`, clearing any pending mirror.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeed`] if the source rejects `seed`;
    /// the handle is unchanged in that case.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        match &mut self.backend {
            Backend::Std(stack) => stack.reset(seed),
            Backend::MinStd(stack) => stack.reset(seed),
        }
    }

    /// The configuration the handle was built from.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Number of variates per sample.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.config.dimension()
    }

    /// Seed most recently applied to the stream.
    pub fn seed(&self) -> u64 {
        match &self.backend {
            Backend::Std(stack) => stack.seed(),
            Backend::MinStd(stack) => stack.seed(),
        }
    }

    /// Phase of the antithetic state machine.
    pub fn phase(&self) -> Phase {
        match &self.backend {
            Backend::Std(stack) => stack.phase(),
            Backend::MinStd(stack) => stack.phase(),
        }
    }
}

/// Builds a sampler from its four construction parameters, using the
/// default `StdRng` source.
///
/// # Errors
///
/// See [`SamplerConfig::validate`].
pub fn construct(
    seed: u64,
    dimension: usize,
    distribution: DistributionKind,
    antithetic: bool,
) -> Result<SamplerHandle, ConfigError> {
    let config = SamplerConfig::builder()
        .seed(seed)
        .dimension(dimension)
        .distribution(distribution)
        .antithetic(antithetic)
        .build()?;
    SamplerHandle::new(&config)
}

/// Generates the next sample from `handle`.
#[inline]
pub fn generate(handle: &mut SamplerHandle) -> Sample<f64> {
    handle.generate()
}

/// Restarts `handle` from `seed`.
///
/// # Errors
///
/// See [`SamplerHandle::reset`].
pub fn reset(handle: &mut SamplerHandle, seed: u64) -> Result<(), ConfigError> {
    handle.reset(seed)
}
