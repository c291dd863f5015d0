/// One generated path or vector together with its importance weight.
///
/// Index `i` of [`values`](Self::values) always corresponds to the same risk
/// factor or time step. Samples are created fresh by every generation call
/// and cannot be modified once returned; use [`into_parts`](Self::into_parts)
/// to take ownership of the buffer.
///
/// # Examples
///
/// ```rust
/// use pricer_sampling::array::Sample;
///
/// let sample = Sample::new(vec![0.1, -0.2], 1.0);
/// assert_eq!(sample.len(), 2);
/// assert_eq!(sample.weight(), 1.0);
///
/// let (values, weight) = sample.into_parts();
/// assert_eq!(values, vec![0.1, -0.2]);
/// assert_eq!(weight, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Sample<T> {
    values: Vec<T>,
    weight: f64,
}

impl<T> Sample<T> {
    /// Creates a sample from its values and weight.
    #[inline]
    pub fn new(values: Vec<T>, weight: f64) -> Self {
        Self { values, weight }
    }

    /// The ordered variates.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The importance weight; 1.0 without importance sampling.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of dimensions.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sample has no dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the sample, returning its values and weight.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, f64) {
        (self.values, self.weight)
    }
}

impl<T> std::ops::Index<usize> for Sample<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}
