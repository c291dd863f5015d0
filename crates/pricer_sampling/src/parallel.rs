//! Independent generator stacks for parallel Monte Carlo runs.
//!
//! Parallelism never shares a generator: every worker owns a complete
//! stack built from [`SamplerConfig::for_worker`], so worker `i` draws from
//! the stream seeded with `stream_seed(master, i)`. Results are returned in
//! worker order and are identical from run to run regardless of how Rayon
//! schedules the workers.
//!
//! # Example
//!
//! ```rust
//! use pricer_sampling::parallel::par_generate;
//! use pricer_sampling::sampler::SamplerConfig;
//!
//! let config = SamplerConfig::builder().seed(42).dimension(8).build().unwrap();
//! let per_worker = par_generate(&config, 4, 100).unwrap();
//!
//! assert_eq!(per_worker.len(), 4);
//! assert!(per_worker.iter().all(|samples| samples.len() == 100));
//! ```

use rayon::prelude::*;

use crate::array::Sample;
use crate::error::ConfigError;
use crate::sampler::{SamplerConfig, SamplerHandle};

/// Builds one independent handle per worker.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidParameter`] if `n_workers` is zero, and
/// any error raised while building a worker's stack.
pub fn worker_handles(
    config: &SamplerConfig,
    n_workers: usize,
) -> Result<Vec<SamplerHandle>, ConfigError> {
    if n_workers == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "n_workers",
            value: "must be at least 1".to_string(),
        });
    }

    let handles = (0..n_workers)
        .map(|index| SamplerHandle::new(&config.for_worker(index)?))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        master_seed = config.seed(),
        n_workers,
        "worker sampler stacks constructed"
    );
    Ok(handles)
}

/// Generates `samples_per_worker` samples on each of `n_workers` stacks in
/// parallel.
///
/// # Errors
///
/// See [`worker_handles`].
pub fn par_generate(
    config: &SamplerConfig,
    n_workers: usize,
    samples_per_worker: usize,
) -> Result<Vec<Vec<Sample<f64>>>, ConfigError> {
    let handles = worker_handles(config, n_workers)?;

    Ok(handles
        .into_par_iter()
        .map(|mut handle| {
            (0..samples_per_worker)
                .map(|_| handle.generate())
                .collect::<Vec<_>>()
        })
        .collect())
}
