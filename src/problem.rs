use crate::{
    error::{Result, SvmErr},
    sparse::SparseVector,
};

/// A labeled set of sparse training examples.
///
/// Besides the examples it carries `d`, a per-feature divisor that scales the
/// regularization term of the classification gradient. Every feature referenced by
/// an example must have a non-zero divisor, otherwise the gradient divides by zero.
#[derive(Debug, Clone)]
pub struct Problem {
    dim: usize,
    ys: Vec<f64>,
    xs: Vec<SparseVector>,
    d: Vec<f64>,
}

impl Problem {
    /// Creates a new `Problem`.
    ///
    /// # Arguments
    /// * `dim` - The dimensionality of the feature space.
    /// * `ys` - One label per example, `±1` for classification or a real target for regression.
    /// * `xs` - One sparse vector per example.
    /// * `d` - The per-feature regularization divisors, `dim` of them.
    ///
    /// # Returns
    /// A `ShapeMismatch` error if `ys` and `xs` differ in length or `d` isn't `dim` long.
    pub fn new(dim: usize, ys: Vec<f64>, xs: Vec<SparseVector>, d: Vec<f64>) -> Result<Self> {
        if ys.len() != xs.len() {
            return Err(SvmErr::ShapeMismatch {
                what: "labels",
                got: ys.len(),
                expected: xs.len(),
            });
        }

        if d.len() != dim {
            return Err(SvmErr::ShapeMismatch {
                what: "divisors",
                got: d.len(),
                expected: dim,
            });
        }

        Ok(Self { dim, ys, xs, d })
    }

    /// Creates a new `Problem` whose divisors are the per-feature occurrence counts.
    ///
    /// # Arguments
    /// * `dim` - The dimensionality of the feature space.
    /// * `ys` - One label per example.
    /// * `xs` - One sparse vector per example.
    ///
    /// # Returns
    /// A `ShapeMismatch` error if `ys` and `xs` differ in length.
    ///
    /// # Panics
    /// If an example references an index beyond `dim`.
    pub fn with_occurrence_counts(
        dim: usize,
        ys: Vec<f64>,
        xs: Vec<SparseVector>,
    ) -> Result<Self> {
        let mut d = vec![0.; dim];
        for feat in xs.iter().flatten() {
            d[feat.position()] += 1.;
        }

        Self::new(dim, ys, xs, d)
    }

    /// The amount of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn label(&self, i: usize) -> f64 {
        self.ys[i]
    }

    #[inline]
    pub fn example(&self, i: usize) -> &SparseVector {
        &self.xs[i]
    }

    #[inline]
    pub fn labels(&self) -> &[f64] {
        &self.ys
    }

    #[inline]
    pub fn examples(&self) -> &[SparseVector] {
        &self.xs
    }

    #[inline]
    pub fn divisors(&self) -> &[f64] {
        &self.d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_label_count_mismatch() {
        let xs = vec![SparseVector::from_pairs([(1, 1.)])];
        let err = Problem::new(1, vec![1., -1.], xs, vec![1.]).unwrap_err();

        assert!(matches!(
            err,
            SvmErr::ShapeMismatch {
                what: "labels",
                got: 2,
                expected: 1
            }
        ));
    }

    #[test]
    fn rejects_divisor_count_mismatch() {
        let xs = vec![SparseVector::from_pairs([(1, 1.)])];
        let err = Problem::new(2, vec![1.], xs, vec![1.]).unwrap_err();

        assert!(matches!(err, SvmErr::ShapeMismatch { what: "divisors", .. }));
    }

    #[test]
    fn occurrence_counts() {
        let xs = vec![
            SparseVector::from_pairs([(1, 0.5), (3, 2.)]),
            SparseVector::from_pairs([(3, 1.)]),
        ];

        let prob = Problem::with_occurrence_counts(3, vec![1., -1.], xs).unwrap();
        assert_eq!(prob.divisors(), [1., 0., 2.]);
        assert_eq!(prob.len(), 2);
        assert_eq!(prob.dim(), 3);
    }
}
