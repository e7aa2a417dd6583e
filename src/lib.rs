//! Linear SVM training by stochastic sub-gradient descent over sparse features.
//!
//! Binary classification (hinge loss) runs lock-free across a pool of worker threads that
//! share one weight vector, Hogwild style. Regression (epsilon-insensitive loss) runs on
//! a single thread. Trained models are saved to and loaded from a small text format.

pub mod config;
pub mod data;
pub mod error;
pub mod execution;
pub mod model;
pub mod optimization;
pub mod output;
pub mod parameter;
pub mod persistence;
pub mod problem;
pub mod sparse;
pub mod storage;
pub mod trainer;

pub use error::{Result, SvmErr};
pub use model::Model;
pub use output::Printer;
pub use parameter::{InvalidParameter, KernelType, Parameter, SvmType, check_parameter};
pub use persistence::{load_model, read_model, save_model, write_model};
pub use problem::Problem;
pub use sparse::{Feature, SparseVector, inner_product, selective_copy};
pub use storage::UpdateScheme;
pub use trainer::{Trainer, train};
