use std::{env, fs::File, io::BufReader, path::PathBuf};

use crate::{
    data::load_problem,
    error::{Result, SvmErr},
    parameter::Parameter,
    problem::Problem,
    storage::UpdateScheme,
};

/// Configuration of the training binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub train_file: PathBuf,
    pub model_file: PathBuf,
    pub test_file: Option<PathBuf>,
    pub param: Parameter,
    pub seed: Option<u64>,
    pub update_scheme: UpdateScheme,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// * `TRAIN_FILE` - The training problem, required.
    /// * `MODEL_FILE` - Where to save the model, required.
    /// * `PARAMS_FILE` - A JSON parameter set, defaults to `Parameter::default`.
    /// * `TEST_FILE` - A problem to evaluate the saved model on.
    /// * `SEED` - A base seed for the samplers.
    /// * `UPDATE_SCHEME` - `wild` (default) or `blocking`.
    ///
    /// # Returns
    /// An `InvalidConfig` error if a variable is missing or malformed, or the error
    /// reading the parameter file.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration looking every variable up with `var`.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            var(key)
                .map(PathBuf::from)
                .ok_or_else(|| SvmErr::InvalidConfig(format!("{key} is not set")))
        };

        let param = match var("PARAMS_FILE") {
            Some(path) => {
                let file = File::open(path)?;
                serde_json::from_reader(BufReader::new(file))?
            }
            None => Parameter::default(),
        };

        let seed = var("SEED")
            .map(|seed| {
                seed.parse()
                    .map_err(|_| SvmErr::InvalidConfig(format!("SEED is not a u64: {seed}")))
            })
            .transpose()?;

        let update_scheme = match var("UPDATE_SCHEME").as_deref() {
            None | Some("wild") => UpdateScheme::Wild,
            Some("blocking") => UpdateScheme::Blocking,
            Some(other) => {
                return Err(SvmErr::InvalidConfig(format!(
                    "UPDATE_SCHEME must be wild or blocking, got {other}"
                )));
            }
        };

        Ok(Self {
            train_file: required("TRAIN_FILE")?,
            model_file: required("MODEL_FILE")?,
            test_file: var("TEST_FILE").map(PathBuf::from),
            param,
            seed,
            update_scheme,
        })
    }

    /// Loads the training problem from `train_file`.
    ///
    /// # Returns
    /// The problem, or an `InvalidConfig` error if the file holds no examples since
    /// the solvers need at least one to sample from.
    pub fn training_problem(&self) -> Result<Problem> {
        let prob = load_problem(&self.train_file)?;

        if prob.is_empty() {
            return Err(SvmErr::InvalidConfig(format!(
                "{} holds no training examples",
                self.train_file.display()
            )));
        }

        Ok(prob)
    }
}
