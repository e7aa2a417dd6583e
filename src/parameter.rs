use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SvmErr;

/// The training mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SvmType {
    /// Binary classification with the hinge loss.
    #[default]
    BSvc,
    /// Regression with the epsilon-insensitive loss.
    EpsilonSvr,
}

impl SvmType {
    pub fn name(&self) -> &'static str {
        match self {
            SvmType::BSvc => "b_svc",
            SvmType::EpsilonSvr => "epsilon_svr",
        }
    }
}

impl fmt::Display for SvmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SvmType {
    type Err = SvmErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "b_svc" => Ok(SvmType::BSvc),
            "epsilon_svr" => Ok(SvmType::EpsilonSvr),
            other => Err(SvmErr::UnknownSvmType(other.to_string())),
        }
    }
}

/// The kernel tag.
///
/// Only a linear weight vector is ever learned or evaluated. The other kernels are
/// validated and persisted so model files stay compatible, but never applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelType {
    #[default]
    Linear,
    Polynomial,
    Rbf,
    Sigmoid,
    Precomputed,
}

impl KernelType {
    pub fn name(&self) -> &'static str {
        match self {
            KernelType::Linear => "linear",
            KernelType::Polynomial => "polynomial",
            KernelType::Rbf => "rbf",
            KernelType::Sigmoid => "sigmoid",
            KernelType::Precomputed => "precomputed",
        }
    }

    /// Whether the kernel has a `gamma` hyperparameter.
    pub fn uses_gamma(&self) -> bool {
        matches!(
            self,
            KernelType::Polynomial | KernelType::Rbf | KernelType::Sigmoid
        )
    }

    /// Whether the kernel has a `coef0` hyperparameter.
    pub fn uses_coef0(&self) -> bool {
        matches!(self, KernelType::Polynomial | KernelType::Sigmoid)
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelType {
    type Err = SvmErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(KernelType::Linear),
            "polynomial" => Ok(KernelType::Polynomial),
            "rbf" => Ok(KernelType::Rbf),
            "sigmoid" => Ok(KernelType::Sigmoid),
            "precomputed" => Ok(KernelType::Precomputed),
            other => Err(SvmErr::UnknownKernelType(other.to_string())),
        }
    }
}

/// The hyperparameters of a training run, copied by value into the trained `Model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub svm_type: SvmType,
    pub kernel_type: KernelType,
    pub degree: i32,
    pub gamma: f64,
    pub coef0: f64,

    /// Regularization strength.
    pub lambda: f64,
    /// Half-width of the epsilon-insensitive band (regression only).
    pub p: f64,
    /// Total number of update steps.
    #[serde(alias = "T")]
    pub steps: usize,
    /// Worker threads for the classification solver.
    pub n_cores: usize,

    // Validated only.
    pub cache_size: f64,
    pub eps: f64,
    pub probability: i32,

    // Class weighting, carried along but not applied.
    pub weight_label: Vec<i32>,
    pub weight: Vec<f64>,
}

impl Default for Parameter {
    fn default() -> Self {
        Self {
            svm_type: SvmType::BSvc,
            kernel_type: KernelType::Linear,
            degree: 3,
            gamma: 0.,
            coef0: 0.,
            lambda: 1.,
            p: 0.1,
            steps: 1000,
            n_cores: 1,
            cache_size: 100.,
            eps: 1e-3,
            probability: 0,
            weight_label: Vec::new(),
            weight: Vec::new(),
        }
    }
}

impl Parameter {
    /// Validates the parameter set, rule by rule in a fixed order.
    ///
    /// The svm and kernel types are already valid by construction, unknown names are
    /// rejected when parsing them.
    ///
    /// # Returns
    /// The first violated rule as an `InvalidParameter`.
    pub fn check(&self) -> Result<(), InvalidParameter> {
        let fail = |msg| Err(InvalidParameter(msg));

        if self.kernel_type.uses_gamma() && self.gamma < 0. {
            return fail("gamma < 0");
        }

        if self.kernel_type == KernelType::Polynomial && self.degree < 0 {
            return fail("degree of polynomial kernel < 0");
        }

        if self.cache_size <= 0. {
            return fail("cache_size <= 0");
        }

        if self.eps <= 0. {
            return fail("eps <= 0");
        }

        if self.lambda < 0. {
            return fail("lambda < 0");
        }

        if self.svm_type == SvmType::EpsilonSvr && self.p < 0. {
            return fail("p < 0");
        }

        if self.probability != 0 && self.probability != 1 {
            return fail("probability != 0 and probability != 1");
        }

        if self.steps == 0 {
            return fail("T <= 0");
        }

        if self.n_cores == 0 {
            return fail("number of cores <= 0");
        }

        Ok(())
    }
}

/// Checks `param` for the first violated rule, see `Parameter::check`.
pub fn check_parameter(param: &Parameter) -> Result<(), InvalidParameter> {
    param.check()
}

/// A human-readable description of the first rule a `Parameter` violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidParameter(&'static str);

impl InvalidParameter {
    pub fn message(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for InvalidParameter {}
