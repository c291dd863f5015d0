//! Deterministic replay and draw-accounting sources.
//!
//! [`SequenceSource`] feeds a fixed list of values back verbatim, which
//! makes it possible to drive a transform with exact boundary draws.
//! [`CountingSource`] wraps any other source and records how many draws
//! have been consumed from it.

use super::UniformSource;
use crate::error::ConfigError;

/// Source that replays a fixed list of values cyclically.
///
/// Values are returned exactly as given and are not range-checked, so
/// draws of exactly `0.0` or `1.0` can be injected. The seed does not
/// affect the values; [`reset`](UniformSource::reset) rewinds to the first
/// element and records the seed.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::uniform::{SequenceSource, UniformSource};
///
/// let mut source = SequenceSource::new(vec![0.0, 1.0]).unwrap();
/// assert_eq!(source.next_uniform(), 0.0);
/// assert_eq!(source.next_uniform(), 1.0);
/// assert_eq!(source.next_uniform(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
    seed: u64,
}

impl SequenceSource {
    /// Creates a replay source over `values`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySequence`] if `values` is empty.
    pub fn new(values: Vec<f64>) -> Result<Self, ConfigError> {
        if values.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        Ok(Self {
            values,
            cursor: 0,
            seed: 0,
        })
    }

    /// Position of the next value to be replayed.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for SequenceSource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }

    fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.cursor = 0;
        self.seed = seed;
        Ok(())
    }

    #[inline]
    fn seed(&self) -> u64 {
        self.seed
    }
}

/// Wrapper that counts the draws taken from an inner source.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::uniform::{CountingSource, StdUniformSource, UniformSource};
///
/// let mut source = CountingSource::new(StdUniformSource::from_seed(1));
/// source.next_uniform();
/// source.next_uniform();
/// assert_eq!(source.draws(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct CountingSource<S> {
    inner: S,
    draws: u64,
}

impl<S: UniformSource> CountingSource<S> {
    /// Wraps `inner` with a zeroed draw counter.
    pub fn new(inner: S) -> Self {
        Self { inner, draws: 0 }
    }

    /// Number of draws consumed since construction or the last reset.
    #[inline]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Returns a reference to the wrapped source.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: UniformSource> UniformSource for CountingSource<S> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.draws += 1;
        self.inner.next_uniform()
    }

    fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.inner.reset(seed)?;
        self.draws = 0;
        Ok(())
    }

    #[inline]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }
}
