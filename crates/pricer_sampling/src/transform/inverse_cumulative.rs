//! Inverse-CDF Gaussian transform.
//!
//! One uniform draw per variate, mapped through Acklam's rational
//! approximation of the inverse standard normal CDF.
//!
//! # Algorithm Reference
//!
//! - Acklam, P. J. (2003). "An algorithm for computing the inverse normal
//!   cumulative distribution function". Relative error below 1.15e-9 over
//!   the whole open unit interval.

use super::{Draw, GaussianTransform, ScalarGenerator};
use crate::error::ConfigError;
use crate::uniform::UniformSource;

/// Smallest probability fed to the inverse CDF.
///
/// Uniform draws are clamped into `[MIN_UNIFORM, 1 − MIN_UNIFORM]`, which
/// bounds the emitted deviates to roughly ±8.13.
pub const MIN_UNIFORM: f64 = f64::EPSILON;

const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];
const P_LOW: f64 = 0.024_25;
const P_HIGH: f64 = 1.0 - P_LOW;

#[inline]
fn tail(q: f64) -> f64 {
    C[0].mul_add(q, C[1])
        .mul_add(q, C[2])
        .mul_add(q, C[3])
        .mul_add(q, C[4])
        .mul_add(q, C[5])
        / D[0].mul_add(q, D[1]).mul_add(q, D[2]).mul_add(q, D[3]).mul_add(q, 1.0)
}

/// Inverse of the standard normal CDF.
///
/// The argument is clamped into `[MIN_UNIFORM, 1 − MIN_UNIFORM]` first, so
/// the result is finite for every input in [0, 1], including both ends.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::transform::inverse_normal_cdf;
///
/// assert_eq!(inverse_normal_cdf(0.5), 0.0);
/// assert!((inverse_normal_cdf(0.975) - 1.959_964).abs() < 1e-6);
/// assert!(inverse_normal_cdf(0.0).is_finite());
/// ```
#[inline]
pub fn inverse_normal_cdf(p: f64) -> f64 {
    let p = p.clamp(MIN_UNIFORM, 1.0 - MIN_UNIFORM);

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        A[0].mul_add(r, A[1])
            .mul_add(r, A[2])
            .mul_add(r, A[3])
            .mul_add(r, A[4])
            .mul_add(r, A[5])
            * q
            / B[0]
                .mul_add(r, B[1])
                .mul_add(r, B[2])
                .mul_add(r, B[3])
                .mul_add(r, B[4])
                .mul_add(r, 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// Standard Gaussian transform by inversion.
///
/// The default Gaussian scalar generator: consumes exactly one uniform draw
/// per variate and emits unit weights.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::transform::{InverseCumulativeGaussian, ScalarGenerator};
/// use pricer_sampling::uniform::StdUniformSource;
///
/// let mut gaussian = InverseCumulativeGaussian::new(StdUniformSource::from_seed(42));
/// let draw = gaussian.next_draw();
/// assert!(draw.value.is_finite());
/// assert_eq!(draw.weight, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct InverseCumulativeGaussian<S> {
    source: S,
}

impl<S: UniformSource> InverseCumulativeGaussian<S> {
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

impl<S: UniformSource> ScalarGenerator for InverseCumulativeGaussian<S> {
    #[inline]
    fn next_draw(&mut self) -> Draw {
        Draw::unweighted(inverse_normal_cdf(self.source.next_uniform()))
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
        -value
    }

    fn is_symmetric(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "Gaussian"
    }
}

impl<S: UniformSource> GaussianTransform for InverseCumulativeGaussian<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniform::{CountingSource, SequenceSource, StdUniformSource};
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_quantiles() {
        // Φ⁻¹ reference values to 9 significant digits
        let cases = [
            (0.001, -3.090_232_306),
            (0.01, -2.326_347_874),
            (0.025, -1.959_963_985),
            (0.1, -1.281_551_566),
            (0.5, 0.0),
            (0.9, 1.281_551_566),
            (0.975, 1.959_963_985),
            (0.999, 3.090_232_306),
        ];

        for (p, expected) in cases {
            assert_relative_eq!(inverse_normal_cdf(p), expected, epsilon = 1e-8, max_relative = 1e-8);
        }
    }

    #[test]
    fn test_boundary_clamping() {
        let low = inverse_normal_cdf(0.0);
        let high = inverse_normal_cdf(1.0);

        assert!(low.is_finite() && low < -8.0, "low deviate {}", low);
        assert!(high.is_finite() && high > 8.0, "high deviate {}", high);
        assert_relative_eq!(low, -high, max_relative = 1e-12);
    }

    #[test]
    fn test_out_of_range_inputs_stay_finite() {
        assert!(inverse_normal_cdf(-0.5).is_finite());
        assert!(inverse_normal_cdf(1.5).is_finite());
    }

    #[test]
    fn test_one_draw_per_variate() {
        let source = CountingSource::new(StdUniformSource::from_seed(3));
        let mut gaussian = InverseCumulativeGaussian::new(source);

        for _ in 0..7 {
            gaussian.next_draw();
        }
        assert_eq!(gaussian.source().draws(), 7);
    }

    #[test]
    fn test_stubbed_boundary_draws() {
        let source = SequenceSource::new(vec![0.0, 1.0]).unwrap();
        let mut gaussian = InverseCumulativeGaussian::new(source);

        let first = gaussian.next_draw();
        let second = gaussian.next_draw();

        assert!(first.value.is_finite() && first.value < -8.0);
        assert!(second.value.is_finite() && second.value > 8.0);
        assert_eq!(first.weight, 1.0);
        assert_eq!(second.weight, 1.0);
    }

    #[test]
    fn test_sample_moments() {
        let mut gaussian = InverseCumulativeGaussian::new(StdUniformSource::from_seed(42));
        let n = 100_000;
        let values: Vec<f64> = (0..n).map(|_| gaussian.next_draw().value).collect();

        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

        assert!(mean.abs() < 0.02, "mean {} too far from 0", mean);
        assert!((variance - 1.0).abs() < 0.02, "variance {} too far from 1", variance);
    }
}
