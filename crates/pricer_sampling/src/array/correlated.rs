//! Correlated Gaussian arrays with a mean vector and covariance matrix.
//!
//! Each independent standard normal sample `z` is mapped to `μ + L z`,
//! where `L` is the lower Cholesky factor of the covariance matrix.

use super::{RandomArrayGenerator, Sample};
use crate::error::ConfigError;
use crate::transform::GaussianTransform;

/// Relative tolerance for the symmetry check on the covariance matrix.
const SYMMETRY_TOLERANCE: f64 = 1e-12;

/// Multivariate normal array generator.
///
/// Wraps a standard Gaussian [`RandomArrayGenerator`]. Antithetic mode
/// carries over: the mirror of `μ + L z` is `μ − L z`, the reflection of
/// the sample about the mean.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::array::{CorrelatedArrayGenerator, GaussianArrayGenerator};
/// use pricer_sampling::transform::InverseCumulativeGaussian;
/// use pricer_sampling::uniform::StdUniformSource;
///
/// let gaussian = InverseCumulativeGaussian::new(StdUniformSource::from_seed(42));
/// let inner = GaussianArrayGenerator::new(gaussian, 2).unwrap();
///
/// let mut generator = CorrelatedArrayGenerator::new(
///     inner,
///     vec![0.0, 1.0],
///     vec![vec![1.0, 0.5], vec![0.5, 2.0]],
/// )
/// .unwrap();
///
/// assert_eq!(generator.next_sample().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct CorrelatedArrayGenerator<G> {
    inner: RandomArrayGenerator<G>,
    mean: Vec<f64>,
    /// Lower-triangular factor, row `i` holds `i + 1` entries.
    cholesky: Vec<Vec<f64>>,
}

impl<G: GaussianTransform> CorrelatedArrayGenerator<G> {
    /// Builds the generator from a standard Gaussian array generator, a
    /// mean vector and a covariance matrix.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDimension`] if `mean` does not match the
    ///   dimension of `inner`
    /// - [`ConfigError::InvalidCovariance`] if the matrix is not square of
    ///   that dimension, contains non-finite entries, is not symmetric, or
    ///   is not positive definite
    pub fn new(
        inner: RandomArrayGenerator<G>,
        mean: Vec<f64>,
        covariance: Vec<Vec<f64>>,
    ) -> Result<Self, ConfigError> {
        let n = inner.dimension();
        if mean.len() != n {
            tracing::warn!(expected = n, actual = mean.len(), "mean vector dimension mismatch");
            return Err(ConfigError::InvalidDimension(mean.len()));
        }
        if mean.iter().any(|m| !m.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "mean",
                value: "entries must be finite".to_string(),
            });
        }

        let cholesky = cholesky_lower(&covariance, n).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected covariance matrix");
        })?;

        tracing::debug!(dimension = n, antithetic = inner.is_antithetic(), "correlated generator initialised");

        Ok(Self {
            inner,
            mean,
            cholesky,
        })
    }

    /// Number of variates per sample.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.mean.len()
    }

    /// Mean vector μ.
    #[inline]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Returns the wrapped standard Gaussian array generator.
    #[inline]
    pub fn inner(&self) -> &RandomArrayGenerator<G> {
        &self.inner
    }

    /// Generates the next correlated sample.
    pub fn next_sample(&mut self) -> Sample<f64> {
        let (z, weight) = self.inner.next_sample().into_parts();

        let values = self
            .cholesky
            .iter()
            .zip(&self.mean)
            .map(|(row, &mu)| mu + row.iter().zip(&z).map(|(l, x)| l * x).sum::<f64>())
            .collect();

        Sample::new(values, weight)
    }

    /// Restarts the underlying stream; see [`RandomArrayGenerator::reset`].
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError::InvalidSeed`] from the uniform source.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.inner.reset(seed)
    }
}

/// Lower Cholesky factor of a symmetric positive definite matrix.
fn cholesky_lower(matrix: &[Vec<f64>], n: usize) -> Result<Vec<Vec<f64>>, ConfigError> {
    if matrix.len() != n || matrix.iter().any(|row| row.len() != n) {
        return Err(ConfigError::InvalidCovariance(format!(
            "expected a {n}x{n} matrix"
        )));
    }
    if matrix.iter().flatten().any(|v| !v.is_finite()) {
        return Err(ConfigError::InvalidCovariance(
            "entries must be finite".to_string(),
        ));
    }
    for i in 0..n {
        for j in 0..i {
            let (a, b) = (matrix[i][j], matrix[j][i]);
            let scale = a.abs().max(b.abs()).max(1.0);
            if (a - b).abs() > SYMMETRY_TOLERANCE * scale {
                return Err(ConfigError::InvalidCovariance(format!(
                    "not symmetric at ({i}, {j})"
                )));
            }
        }
    }

    let mut l: Vec<Vec<f64>> = (0..n).map(|i| vec![0.0; i + 1]).collect();
    for i in 0..n {
        for j in 0..=i {
            let mut sum = matrix[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum <= 0.0 {
                    return Err(ConfigError::InvalidCovariance(format!(
                        "not positive definite (pivot {i} is {sum})"
                    )));
                }
                l[i][i] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }
    Ok(l)
}
