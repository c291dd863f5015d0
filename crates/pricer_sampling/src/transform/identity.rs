use super::{Draw, ScalarGenerator};
use crate::error::ConfigError;
use crate::uniform::UniformSource;

/// Identity transform: emits the uniform draws themselves.
///
/// Lets a bare uniform source sit in the scalar-generator slot of an array
/// generator. The antithetic mirror of `u` is `1 − u`.
#[derive(Clone, Debug)]
pub struct UniformTransform<S> {
    source: S,
}

impl<S: UniformSource> UniformTransform<S> {
    /// Wraps `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the underlying source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: UniformSource> ScalarGenerator for UniformTransform<S> {
    #[inline]
    fn next_draw(&mut self) -> Draw {
        Draw::unweighted(self.source.next_uniform())
    }

    fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.source.reset(seed)
    }

    #[inline]
    fn seed(&self) -> u64 {
        self.source.seed()
    }

    #[inline]
    fn mirror(&self, value: f64) -> f64 {
        1.0 - value
    }

    fn is_symmetric(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}
