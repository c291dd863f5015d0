//! # Sampler Facade
//!
//! Runtime entry point for pricing and valuation code: describe a stack
//! with a [`SamplerConfig`] (seed, dimension, distribution, source,
//! antithetic flag), build it once, then call `generate` for as many
//! samples as required.
//!
//! ```rust
//! use pricer_sampling::sampler::{construct, generate, reset, DistributionKind};
//!
//! let mut handle = construct(7, 3, DistributionKind::Gaussian, true).unwrap();
//! let first = generate(&mut handle);
//! let mirror = generate(&mut handle);
//! assert_eq!(mirror[0], -first[0]);
//!
//! reset(&mut handle, 7).unwrap();
//! assert_eq!(generate(&mut handle), first);
//! ```

mod config;
mod handle;

pub use config::{DistributionKind, SamplerConfig, SamplerConfigBuilder, SourceKind};
pub use handle::{construct, generate, reset, SamplerHandle};
