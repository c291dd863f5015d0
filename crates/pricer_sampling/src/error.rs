//! Error types for sampler construction.
//!
//! Every error in this crate is a configuration error: it is raised once,
//! synchronously, when a source, transform or array generator is built (or
//! re-seeded). Generation itself is total and never fails; numerically
//! degenerate uniform draws are absorbed by clamping inside the transforms.

use thiserror::Error;

/// Configuration error for the sampling pipeline.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::ConfigError;
///
/// let err = ConfigError::InvalidDimension(0);
/// assert!(err.to_string().contains("Invalid dimension 0"));
/// ```
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Dimension count outside the valid range [1, MAX_DIMENSION].
    #[error("Invalid dimension {0}: must be in range [1, 100_000]")]
    InvalidDimension(usize),

    /// Seed rejected by the uniform source.
    #[error("Invalid seed {seed}: {reason}")]
    InvalidSeed {
        /// The rejected seed.
        seed: u64,
        /// Why the source cannot use it.
        reason: &'static str,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Antithetic mirroring requested for a distribution that is not
    /// symmetric about its mean.
    #[error("Antithetic sampling is not supported for the {0} distribution")]
    AsymmetricAntithetic(&'static str),

    /// Covariance matrix is malformed or not positive definite.
    #[error("Invalid covariance matrix: {0}")]
    InvalidCovariance(String),

    /// A replay source was given no values.
    #[error("Replay sequence must contain at least one value")]
    EmptySequence,

    /// Configuration document could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(String),
}
