//! # pricer_sampling: Sample-Path Generation for Monte Carlo Pricing
//!
//! ## Role
//!
//! pricer_sampling turns a stream of uniform pseudo-random numbers into
//! multi-dimensional, distribution-correct sample paths for Monte Carlo
//! valuation. It is organised as three composable layers:
//!
//! - **Uniform Source** (`uniform`): seedable streams in [0, 1)
//! - **Distribution Transform** (`transform`): uniform draws to target
//!   variates, optionally with importance weights
//! - **Array/Path Generator** (`array`): one ordered sample of `N` variates
//!   per call, with antithetic mirroring
//!
//! The [`sampler`] module selects a concrete stack from runtime
//! configuration, and [`parallel`] builds one independent stack per worker.
//!
//! ## Guarantees
//!
//! - **Reproducibility**: a fixed seed and call sequence gives bit-identical
//!   samples.
//! - **Fail fast**: invalid configuration is rejected with a [`ConfigError`]
//!   at construction; generation never fails.
//! - **Finite output**: boundary uniforms are clamped, so deviates and
//!   weights are always finite, and weights are strictly positive.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_sampling::array::GaussianArrayGenerator;
//! use pricer_sampling::transform::InverseCumulativeGaussian;
//! use pricer_sampling::uniform::StdUniformSource;
//!
//! let gaussian = InverseCumulativeGaussian::new(StdUniformSource::from_seed(42));
//! let mut paths = GaussianArrayGenerator::antithetic(gaussian, 252).unwrap();
//!
//! let sample = paths.next_sample();
//! assert_eq!(sample.len(), 252);
//! assert_eq!(sample.weight(), 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialisation of the configuration types and
//!   `SamplerConfig::from_toml_str`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod error;
pub mod parallel;
pub mod sampler;
pub mod transform;
pub mod uniform;

pub use array::{GaussianArrayGenerator, Phase, RandomArrayGenerator, Sample};
pub use error::ConfigError;
pub use sampler::{construct, generate, reset, DistributionKind, SamplerConfig, SamplerHandle};
