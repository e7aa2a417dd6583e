use crate::{
    error::{Result, SvmErr},
    parameter::{Parameter, SvmType},
    sparse::{SparseVector, inner_product},
};

/// A trained linear model: its parameters and a dense weight vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub(crate) param: Parameter,
    pub(crate) dim: usize,
    pub(crate) w: Vec<f64>,
}

impl Model {
    /// Creates a new, untrained `Model` with every weight set to zero.
    ///
    /// # Arguments
    /// * `param` - The parameters the model is trained with.
    /// * `dim` - The dimensionality of the feature space.
    ///
    /// # Returns
    /// A new `Model` instance.
    pub fn new(param: Parameter, dim: usize) -> Self {
        Self {
            param,
            dim,
            w: vec![0.; dim],
        }
    }

    #[inline]
    pub fn param(&self) -> &Parameter {
        &self.param
    }

    #[inline]
    pub fn svm_type(&self) -> SvmType {
        self.param.svm_type
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.w
    }

    /// Predicts the output for a single sparse input.
    ///
    /// # Arguments
    /// * `x` - The input, its indices must fit the model's dimensionality.
    ///
    /// # Returns
    /// For classification the predicted class, `1.0` when the inner product is strictly
    /// positive and `-1.0` otherwise. For regression the raw inner product.
    pub fn predict(&self, x: &SparseVector) -> f64 {
        let z = inner_product(&self.w, x);

        match self.param.svm_type {
            SvmType::BSvc => {
                if z > 0. {
                    1.
                } else {
                    -1.
                }
            }
            SvmType::EpsilonSvr => z,
        }
    }

    /// Probability estimates aren't available for this solver.
    ///
    /// # Returns
    /// Always `SvmErr::ProbabilityUnsupported`.
    pub fn predict_probability(&self, _x: &SparseVector) -> Result<Vec<f64>> {
        Err(SvmErr::ProbabilityUnsupported)
    }

    /// Whether the model can produce probability estimates, never for this solver.
    pub fn check_probability_model(&self) -> bool {
        false
    }
}
