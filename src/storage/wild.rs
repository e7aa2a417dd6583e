use std::sync::atomic::{AtomicU64, Ordering};

use super::WeightStore;
use crate::sparse::SparseVector;

/// A weight vector that workers update simultaneously without any locks.
///
/// It embraces race conditions: each coordinate is read and written with relaxed,
/// independent loads and stores. `subtract` is a load followed by a store, not an atomic
/// read-modify-write, so two workers touching the same coordinate at once may lose one
/// of the updates. Readers may observe a mix of old and new coordinates. With sparse
/// examples collisions are rare and the lost updates act as extra stochastic noise.
///
/// This relaxed-consistency contract is what makes the solver lock-free and must not be
/// tightened into fetch-and-add loops or fences, that would change both convergence
/// and throughput. Use `BlockingStore` when serialized updates are wanted.
pub struct WildStore {
    weights: Box<[AtomicU64]>,
}

impl WildStore {
    /// Creates a new `WildStore`.
    ///
    /// # Arguments
    /// * `weights` - The initial state of the weights.
    ///
    /// # Returns
    /// A new `WildStore` instance.
    pub fn new(weights: &[f64]) -> Self {
        let weights = weights
            .iter()
            .map(|w| AtomicU64::new(w.to_bits()))
            .collect();

        Self { weights }
    }

    #[inline]
    fn load(&self, j: usize) -> f64 {
        f64::from_bits(self.weights[j].load(Ordering::Relaxed))
    }

    #[inline]
    fn store(&self, j: usize, value: f64) {
        self.weights[j].store(value.to_bits(), Ordering::Relaxed);
    }
}

impl WeightStore for WildStore {
    fn len(&self) -> usize {
        self.weights.len()
    }

    fn snapshot(&self, dst: &mut [f64], x: &SparseVector) {
        for feat in x {
            let j = feat.position();
            dst[j] = self.load(j);
        }
    }

    fn subtract(&self, grad: &[f64], x: &SparseVector) {
        for feat in x {
            let j = feat.position();
            // Unsynchronized on purpose, see the type level docs.
            self.store(j, self.load(j) - grad[j]);
        }
    }

    fn pull(&self, out: &mut [f64]) {
        out.iter_mut()
            .enumerate()
            .for_each(|(j, w)| *w = self.load(j));
    }
}
