//! Park–Miller minimal-standard generator with Bays–Durham shuffle.
//!
//! Lehmer recurrence `x ← 16807·x mod (2^31 − 1)`, evaluated with Schrage's
//! factorisation to stay inside 64-bit integer arithmetic, followed by a
//! 32-entry shuffle table that breaks up low-order serial correlation.
//!
//! # Reference
//!
//! - Park, S. K. & Miller, K. W. (1988). "Random Number Generators: Good Ones
//!   Are Hard to Find". Communications of the ACM 31(10).
//! - Bays, C. & Durham, S. D. (1976). "Improving a Poor Random Number
//!   Generator". ACM Transactions on Mathematical Software 2(1).

use super::UniformSource;
use crate::error::ConfigError;

const MULTIPLIER: i64 = 16_807;
const MODULUS: i64 = 2_147_483_647;
// Schrage decomposition: MODULUS = MULTIPLIER * SCHRAGE_Q + SCHRAGE_R
const SCHRAGE_Q: i64 = 127_773;
const SCHRAGE_R: i64 = 2_836;
const TABLE_SIZE: usize = 32;
const TABLE_DIVISOR: i64 = 1 + (MODULUS - 1) / TABLE_SIZE as i64;
const WARM_UP: usize = 8;

/// Minimal-standard uniform source.
///
/// Draws lie strictly inside (0, 1). The seed is reduced modulo
/// `2^31 − 1`; seeds that reduce to zero would lock the recurrence at zero
/// and are rejected with [`ConfigError::InvalidSeed`].
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::uniform::{MinStdSource, UniformSource};
///
/// let mut source = MinStdSource::new(42).unwrap();
/// let u = source.next_uniform();
/// assert!(u > 0.0 && u < 1.0);
///
/// assert!(MinStdSource::new(0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MinStdSource {
    state: i64,
    last: i64,
    table: [i64; TABLE_SIZE],
    seed: u64,
}

impl MinStdSource {
    /// Creates a source seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeed`] if `seed` is a multiple of
    /// `2^31 − 1` (including zero).
    pub fn new(seed: u64) -> Result<Self, ConfigError> {
        let mut source = Self {
            state: 1,
            last: 0,
            table: [0; TABLE_SIZE],
            seed,
        };
        source.reset(seed)?;
        Ok(source)
    }

    #[inline]
    fn advance(&mut self) -> i64 {
        let k = self.state / SCHRAGE_Q;
        self.state = MULTIPLIER * (self.state - k * SCHRAGE_Q) - SCHRAGE_R * k;
        if self.state < 0 {
            self.state += MODULUS;
        }
        self.state
    }
}

impl UniformSource for MinStdSource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        let fresh = self.advance();
        let slot = (self.last / TABLE_DIVISOR) as usize;
        self.last = self.table[slot];
        self.table[slot] = fresh;
        self.last as f64 / MODULUS as f64
    }

    fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        let reduced = (seed % MODULUS as u64) as i64;
        if reduced == 0 {
            tracing::warn!(seed, "rejected minimal-standard seed");
            return Err(ConfigError::InvalidSeed {
                seed,
                reason: "must not be a multiple of 2^31 - 1",
            });
        }

        self.state = reduced;
        for _ in 0..WARM_UP {
            self.advance();
        }
        for slot in (0..TABLE_SIZE).rev() {
            self.table[slot] = self.advance();
        }
        self.last = self.table[0];
        self.seed = seed;
        Ok(())
    }

    #[inline]
    fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_seeds() {
        assert!(matches!(
            MinStdSource::new(0),
            Err(ConfigError::InvalidSeed { seed: 0, .. })
        ));
        assert!(MinStdSource::new(MODULUS as u64).is_err());
        assert!(MinStdSource::new(2 * MODULUS as u64).is_err());
        assert!(MinStdSource::new(1).is_ok());
    }

    #[test]
    fn test_open_unit_interval() {
        let mut source = MinStdSource::new(2024).unwrap();
        for _ in 0..10_000 {
            let u = source.next_uniform();
            assert!(u > 0.0 && u < 1.0, "draw {} outside (0, 1)", u);
        }
    }

    #[test]
    fn test_lehmer_recurrence() {
        // 16807^1 mod (2^31 - 1) from x0 = 1, then the classic 10,000th value.
        let mut source = MinStdSource::new(1).unwrap();
        source.state = 1;
        assert_eq!(source.advance(), 16_807);

        source.state = 1;
        let mut x = 0;
        for _ in 0..10_000 {
            x = source.advance();
        }
        assert_eq!(x, 1_043_618_065);
    }

    #[test]
    fn test_reset_replays_and_failed_reset_keeps_state() {
        let mut source = MinStdSource::new(99).unwrap();
        let first: Vec<f64> = (0..16).map(|_| source.next_uniform()).collect();

        source.reset(99).unwrap();
        let replay: Vec<f64> = (0..16).map(|_| source.next_uniform()).collect();
        assert_eq!(first, replay);

        let mut twin = source.clone();
        assert!(source.reset(0).is_err());
        assert_eq!(source.seed(), 99);
        assert_eq!(source.next_uniform(), twin.next_uniform());
    }

    #[test]
    fn test_sample_mean() {
        let mut source = MinStdSource::new(17).unwrap();
        let n = 100_000;
        let mean = (0..n).map(|_| source.next_uniform()).sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean {} too far from 0.5", mean);
    }
}
