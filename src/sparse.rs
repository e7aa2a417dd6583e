/// A single non-zero entry of a sparse feature vector.
///
/// `index` is 1-based, it addresses the dense weight at position `index - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub index: usize,
    pub value: f64,
}

impl Feature {
    pub const fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }

    /// The 0-based dense position this entry maps to.
    #[inline]
    pub fn position(&self) -> usize {
        self.index - 1
    }
}

/// An immutable, explicit-length sparse vector.
///
/// Indices are expected to be strictly increasing and within the dimensionality of
/// whatever weight vector the vector is later combined with. Neither is verified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    features: Box<[Feature]>,
}

impl SparseVector {
    /// Creates a new `SparseVector`.
    ///
    /// # Arguments
    /// * `features` - The non-zero entries, ordered by index.
    ///
    /// # Returns
    /// A new `SparseVector` instance.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features: features.into_boxed_slice(),
        }
    }

    /// Builds a sparse vector out of `(index, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let features = pairs
            .into_iter()
            .map(|(index, value)| Feature::new(index, value))
            .collect();

        Self::new(features)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// The largest index referenced by this vector, `0` if it's empty.
    pub fn max_index(&self) -> usize {
        self.features.last().map_or(0, |feat| feat.index)
    }
}

impl<'a> IntoIterator for &'a SparseVector {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

/// Computes the dot product between a dense weight vector and a sparse vector.
///
/// # Arguments
/// * `w` - The dense weights, indexed 0-based.
/// * `x` - The sparse vector, indexed 1-based.
///
/// # Returns
/// The sum of `w[index - 1] * value` over the entries of `x`.
///
/// # Panics
/// If an index of `x` is `0` or exceeds `w.len()`.
pub fn inner_product(w: &[f64], x: &SparseVector) -> f64 {
    x.iter().map(|feat| w[feat.position()] * feat.value).sum()
}

/// Copies into `dst` the coordinates of `src` that `x` touches.
///
/// Positions of `dst` that `x` doesn't reference keep their previous contents.
///
/// # Arguments
/// * `dst` - The destination buffer.
/// * `src` - The source weights.
/// * `x` - The sparse vector selecting which coordinates to copy.
pub fn selective_copy(dst: &mut [f64], src: &[f64], x: &SparseVector) {
    for feat in x {
        let j = feat.position();
        dst[j] = src[j];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_product_skips_absent_coordinates() {
        let w = [1., 2., 3., 4.];
        let x = SparseVector::from_pairs([(1, 2.), (4, 0.5)]);

        assert_eq!(inner_product(&w, &x), 1. * 2. + 4. * 0.5);
    }

    #[test]
    fn inner_product_of_empty_vector_is_zero() {
        let w = [1., 2.];
        assert_eq!(inner_product(&w, &SparseVector::default()), 0.);
    }

    #[test]
    fn selective_copy_preserves_untouched_positions() {
        let src = [10., 20., 30.];
        let mut dst = [-1., -1., -1.];
        let x = SparseVector::from_pairs([(2, 7.)]);

        selective_copy(&mut dst, &src, &x);
        assert_eq!(dst, [-1., 20., -1.]);
    }

    #[test]
    fn max_index() {
        let x = SparseVector::from_pairs([(3, 1.), (9, 1.)]);
        assert_eq!(x.max_index(), 9);
        assert_eq!(SparseVector::default().max_index(), 0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let w = [1.];
        let x = SparseVector::from_pairs([(2, 1.)]);
        inner_product(&w, &x);
    }
}
