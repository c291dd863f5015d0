//! # Uniform Sources
//!
//! The leaf layer of the sampling pipeline: deterministic, seedable streams
//! of values in [0, 1).
//!
//! ## Contract
//!
//! - **Reproducibility**: two sources built with the same seed produce
//!   identical, unbounded sequences of draws.
//! - **Restart**: [`UniformSource::reset`] reinitialises the stream to a
//!   state fully determined by the seed.
//! - **Validation**: a seed the source cannot use is rejected when the
//!   source is built or reset, never when a draw is taken.
//! - **Thread affinity**: a source is not shared between workers. Each
//!   worker owns its own instance seeded with [`stream_seed`].
//!
//! ## Module Structure
//!
//! - [`StdUniformSource`]: wrapper around `rand::rngs::StdRng` (default)
//! - [`MinStdSource`]: Park–Miller minimal standard with Bays–Durham shuffle
//! - [`SequenceSource`], [`CountingSource`]: replay and draw accounting

mod min_std;
mod replay;
mod std_source;

pub use min_std::MinStdSource;
pub use replay::{CountingSource, SequenceSource};
pub use std_source::StdUniformSource;

use crate::error::ConfigError;

/// A seedable stream of uniform draws.
pub trait UniformSource {
    /// Returns the next draw, in [0, 1) for every production source.
    fn next_uniform(&mut self) -> f64;

    /// Restarts the stream from `seed`.
    ///
    /// On error the source keeps its previous state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeed`] if the source cannot be seeded
    /// with `seed`.
    fn reset(&mut self, seed: u64) -> Result<(), ConfigError>;

    /// Returns the seed most recently applied.
    fn seed(&self) -> u64;

    /// Fills the buffer with consecutive draws.
    ///
    /// Empty buffers are handled gracefully (no operation).
    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }
}

/// Derives the seed of worker `stream_index` from a master seed.
///
/// Consecutive workers receive consecutive seeds, so stacks built from the
/// same master seed never share a stream.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::uniform::stream_seed;
///
/// assert_eq!(stream_seed(100, 0), 100);
/// assert_eq!(stream_seed(100, 3), 103);
/// assert_eq!(stream_seed(u64::MAX, 1), 0);
/// ```
#[inline]
pub fn stream_seed(master_seed: u64, stream_index: usize) -> u64 {
    master_seed.wrapping_add(stream_index as u64)
}
