//! Sampler configuration.
//!
//! This module provides configuration types and builders for the sampling
//! stacks handed out by [`SamplerHandle`](super::SamplerHandle).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::array::MAX_DIMENSION;
use crate::error::ConfigError;
use crate::uniform::{stream_seed, MinStdSource};

/// Target distribution of the generated variates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DistributionKind {
    /// Uniform on [0, 1); mirror `1 − u`.
    Uniform,

    /// Standard normal by inverse CDF; mirror `−x`.
    #[default]
    Gaussian,

    /// Standard normal by the Box–Muller method; mirror `−x`.
    BoxMullerGaussian,

    /// Normal with unit variance shifted by `drift`, carrying
    /// likelihood-ratio weights. Not usable in antithetic mode.
    ShiftedGaussian {
        /// Mean shift μ.
        drift: f64,
    },
}

impl DistributionKind {
    /// Whether the distribution supports antithetic mirroring.
    pub fn is_symmetric(&self) -> bool {
        !matches!(self, Self::ShiftedGaussian { .. })
    }

    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Gaussian => "Gaussian",
            Self::BoxMullerGaussian => "Box-Muller Gaussian",
            Self::ShiftedGaussian { .. } => "shifted Gaussian",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShiftedGaussian { drift } => write!(f, "shifted Gaussian (drift {})", drift),
            other => f.write_str(other.name()),
        }
    }
}

/// Uniform source backing a sampler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SourceKind {
    /// `rand::rngs::StdRng`; every seed is valid.
    #[default]
    StdRng,
    /// Park–Miller minimal standard; seeds must not be multiples of
    /// `2^31 − 1`.
    MinStd,
}

/// Sampler configuration.
///
/// Immutable configuration of one generator stack.
/// Use [`SamplerConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::sampler::{DistributionKind, SamplerConfig};
///
/// let config = SamplerConfig::builder()
///     .seed(42)
///     .dimension(252)
///     .distribution(DistributionKind::Gaussian)
///     .antithetic(true)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.dimension(), 252);
/// assert!(config.antithetic());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Seed of the uniform source.
    seed: u64,
    /// Number of variates per sample.
    dimension: usize,
    /// Target distribution.
    #[cfg_attr(feature = "serde", serde(default))]
    distribution: DistributionKind,
    /// Uniform source algorithm.
    #[cfg_attr(feature = "serde", serde(default))]
    source: SourceKind,
    /// Whether mirrored samples are interleaved.
    #[cfg_attr(feature = "serde", serde(default))]
    antithetic: bool,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of variates per sample.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the target distribution.
    #[inline]
    pub fn distribution(&self) -> DistributionKind {
        self.distribution
    }

    /// Returns the uniform source algorithm.
    #[inline]
    pub fn source(&self) -> SourceKind {
        self.source
    }

    /// Returns whether antithetic sampling is enabled.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `dimension` is 0 or greater than [`MAX_DIMENSION`]
    /// - the seed is unusable by the selected source
    /// - a distribution parameter is outside its domain
    /// - antithetic sampling is requested for an asymmetric distribution
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 || self.dimension > MAX_DIMENSION {
            return Err(ConfigError::InvalidDimension(self.dimension));
        }
        if self.source == SourceKind::MinStd {
            MinStdSource::new(self.seed)?;
        }
        if let DistributionKind::ShiftedGaussian { drift } = self.distribution {
            if !drift.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name: "drift",
                    value: format!("must be finite, got {}", drift),
                });
            }
        }
        if self.antithetic && !self.distribution.is_symmetric() {
            return Err(ConfigError::AsymmetricAntithetic(self.distribution.name()));
        }
        Ok(())
    }

    /// Configuration of worker `index` in a parallel run.
    ///
    /// Identical to `self` except for the seed, which is derived with
    /// [`stream_seed`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeed`] if the derived seed is unusable
    /// by the selected source.
    pub fn for_worker(&self, index: usize) -> Result<Self, ConfigError> {
        let worker = Self {
            seed: stream_seed(self.seed, index),
            ..self.clone()
        };
        worker.validate()?;
        Ok(worker)
    }

    /// Parses and validates a TOML document.
    ///
    /// `distribution`, `source` and `antithetic` are optional and default to
    /// the inverse-CDF Gaussian, `StdRng` and `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_sampling::sampler::{DistributionKind, SamplerConfig};
    ///
    /// let config = SamplerConfig::from_toml_str(
    ///     r#"
    ///     seed = 7
    ///     dimension = 12
    ///     antithetic = true
    ///
    ///     [distribution]
    ///     kind = "box_muller_gaussian"
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.distribution(), DistributionKind::BoxMullerGaussian);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and any
    /// validation error of [`validate`](Self::validate).
    #[cfg(feature = "serde")]
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(document).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`SamplerConfig`].
///
/// Provides a fluent API with validation at build time.
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    seed: Option<u64>,
    dimension: Option<usize>,
    distribution: DistributionKind,
    source: SourceKind,
    antithetic: bool,
}

impl SamplerConfigBuilder {
    /// Sets the seed of the uniform source.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of variates per sample.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Number of variates in [1, 100_000]
    #[inline]
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Sets the target distribution.
    #[inline]
    pub fn distribution(mut self, distribution: DistributionKind) -> Self {
        self.distribution = distribution;
        self
    }

    /// Sets the uniform source algorithm.
    #[inline]
    pub fn source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }

    /// Enables or disables antithetic sampling.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the seed or dimension is not set, or if
    /// [`SamplerConfig::validate`] fails.
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let seed = self.seed.ok_or(ConfigError::InvalidParameter {
            name: "seed",
            value: "must be specified".to_string(),
        })?;

        let dimension = self.dimension.ok_or(ConfigError::InvalidParameter {
            name: "dimension",
            value: "must be specified".to_string(),
        })?;

        let config = SamplerConfig {
            seed,
            dimension,
            distribution: self.distribution,
            source: self.source,
            antithetic: self.antithetic,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = SamplerConfig::builder().seed(1).dimension(5).build().unwrap();

        assert_eq!(config.seed(), 1);
        assert_eq!(config.dimension(), 5);
        assert_eq!(config.distribution(), DistributionKind::Gaussian);
        assert_eq!(config.source(), SourceKind::StdRng);
        assert!(!config.antithetic());
    }

    #[test]
    fn test_config_missing_seed() {
        let result = SamplerConfig::builder().dimension(5).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "seed", .. })
        ));
    }

    #[test]
    fn test_config_missing_dimension() {
        let result = SamplerConfig::builder().seed(1).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "dimension",
                ..
            })
        ));
    }

    #[test]
    fn test_config_invalid_dimension() {
        let result = SamplerConfig::builder().seed(1).dimension(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidDimension(0))));

        let result = SamplerConfig::builder()
            .seed(1)
            .dimension(MAX_DIMENSION + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidDimension(_))));
    }

    #[test]
    fn test_config_invalid_min_std_seed() {
        let result = SamplerConfig::builder()
            .seed(0)
            .dimension(3)
            .source(SourceKind::MinStd)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidSeed { seed: 0, .. })));
    }

    #[test]
    fn test_config_rejects_asymmetric_antithetic() {
        let result = SamplerConfig::builder()
            .seed(1)
            .dimension(3)
            .distribution(DistributionKind::ShiftedGaussian { drift: 1.0 })
            .antithetic(true)
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConfigError::AsymmetricAntithetic("shifted Gaussian")
        );
    }

    #[test]
    fn test_config_rejects_non_finite_drift() {
        let result = SamplerConfig::builder()
            .seed(1)
            .dimension(3)
            .distribution(DistributionKind::ShiftedGaussian { drift: f64::NAN })
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "drift", .. })
        ));
    }

    #[test]
    fn test_for_worker_offsets_seed() {
        let config = SamplerConfig::builder().seed(100).dimension(2).build().unwrap();

        let worker = config.for_worker(3).unwrap();
        assert_eq!(worker.seed(), 103);
        assert_eq!(worker.dimension(), 2);
    }

    #[test]
    fn test_for_worker_validates_derived_seed() {
        let config = SamplerConfig::builder()
            .seed(2_147_483_646)
            .dimension(2)
            .source(SourceKind::MinStd)
            .build()
            .unwrap();

        assert!(config.for_worker(0).is_ok());
        assert!(matches!(
            config.for_worker(1),
            Err(ConfigError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn test_distribution_display() {
        assert_eq!(DistributionKind::Gaussian.to_string(), "Gaussian");
        assert_eq!(
            DistributionKind::ShiftedGaussian { drift: 0.5 }.to_string(),
            "shifted Gaussian (drift 0.5)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_defaults() {
        let config = SamplerConfig::from_toml_str("seed = 3\ndimension = 4\n").unwrap();

        assert_eq!(config.distribution(), DistributionKind::Gaussian);
        assert_eq!(config.source(), SourceKind::StdRng);
        assert!(!config.antithetic());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_shifted() {
        let config = SamplerConfig::from_toml_str(
            "seed = 3\ndimension = 4\nsource = \"min_std\"\n\n[distribution]\nkind = \"shifted_gaussian\"\ndrift = 1.25\n",
        )
        .unwrap();

        assert_eq!(config.source(), SourceKind::MinStd);
        assert_eq!(
            config.distribution(),
            DistributionKind::ShiftedGaussian { drift: 1.25 }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            SamplerConfig::from_toml_str("dimension = 4"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SamplerConfig::from_toml_str("seed = 1\ndimension = 0"),
            Err(ConfigError::InvalidDimension(0))
        ));
    }
}
