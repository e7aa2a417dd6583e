use parking_lot::RwLock;

use super::WeightStore;
use crate::sparse::{SparseVector, selective_copy};

/// A weight vector shared across multiple threads using a lock.
///
/// Snapshots take the read lock and updates take the write lock, so every update
/// is applied in full and never lost. The snapshot and the following update of a
/// worker are still separate critical sections, workers keep computing gradients
/// from weights that may be stale by the time they're applied.
#[derive(Debug)]
pub struct BlockingStore {
    weights: RwLock<Box<[f64]>>,
}

impl BlockingStore {
    /// Creates a new `BlockingStore`.
    ///
    /// # Arguments
    /// * `weights` - The initial state of the weights.
    ///
    /// # Returns
    /// A new `BlockingStore` instance.
    pub fn new(weights: &[f64]) -> Self {
        Self {
            weights: RwLock::new(weights.into()),
        }
    }
}

impl WeightStore for BlockingStore {
    fn len(&self) -> usize {
        self.weights.read().len()
    }

    fn snapshot(&self, dst: &mut [f64], x: &SparseVector) {
        let weights = self.weights.read();
        selective_copy(dst, &weights, x);
    }

    fn subtract(&self, grad: &[f64], x: &SparseVector) {
        let mut weights = self.weights.write();
        for feat in x {
            let j = feat.position();
            weights[j] -= grad[j];
        }
    }

    fn pull(&self, out: &mut [f64]) {
        let weights = self.weights.read();
        out.copy_from_slice(&weights);
    }
}
