use crate::sparse::SparseVector;

/// A dense weight vector shared by every worker of the classification solver.
///
/// Workers never hold the whole vector, they read and write only the coordinates of
/// the example they're processing.
pub trait WeightStore: Sync {
    /// Returns the amount of weights in the store.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies into `dst` the stored weights at the coordinates `x` touches.
    ///
    /// # Arguments
    /// * `dst` - A dense buffer of the same length as the store.
    /// * `x` - The sparse vector selecting the coordinates.
    fn snapshot(&self, dst: &mut [f64], x: &SparseVector);

    /// Subtracts `grad` from the stored weights at the coordinates `x` touches.
    ///
    /// # Arguments
    /// * `grad` - A dense gradient buffer of the same length as the store.
    /// * `x` - The sparse vector selecting the coordinates.
    fn subtract(&self, grad: &[f64], x: &SparseVector);

    /// Copies every stored weight into `out`.
    ///
    /// # Arguments
    /// * `out` - A mutable slice of the same length as the store.
    fn pull(&self, out: &mut [f64]);
}
