use log::debug;

use super::ExampleSampler;
use crate::{optimization::epsilon_insensitive_update, parameter::Parameter, problem::Problem};

/// The sequential epsilon-insensitive regression solver.
pub struct EpsilonSvr<'a> {
    prob: &'a Problem,
    lambda: f64,
    p: f64,
    steps: usize,
}

impl<'a> EpsilonSvr<'a> {
    /// Creates a new `EpsilonSvr` solver.
    ///
    /// # Arguments
    /// * `prob` - The training problem.
    /// * `param` - The training parameters, `lambda`, `p` and `steps` are used.
    ///
    /// # Returns
    /// A new `EpsilonSvr` instance.
    pub fn new(prob: &'a Problem, param: &Parameter) -> Self {
        Self {
            prob,
            lambda: param.lambda,
            p: param.p,
            steps: param.steps,
        }
    }

    /// Runs every step on the calling thread.
    ///
    /// # Arguments
    /// * `w` - The dense weights, updated in place.
    /// * `sampler` - Picks the example of each step.
    pub fn run<S: ExampleSampler>(&self, w: &mut [f64], sampler: &mut S) {
        debug!(steps = self.steps; "regression solver started");

        for t in 0..self.steps {
            let i = sampler.sample(self.prob.len());
            epsilon_insensitive_update(w, self.lambda, self.p, self.prob, i, t);
        }
    }
}
