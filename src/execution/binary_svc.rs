use std::num::NonZeroUsize;

use log::debug;
use rayon::ThreadPoolBuilder;

use super::ExampleSampler;
use crate::{
    error::Result, optimization::hinge_gradient, parameter::Parameter, problem::Problem,
    storage::WeightStore,
};

/// The concurrent hinge-loss solver.
///
/// `steps` independent update steps are spread over a pool of `n_cores` threads. Each
/// worker owns a dense gradient buffer and a sampler, and for every step:
/// 1. Snapshots the live shared weights at the sampled example's coordinates.
/// 2. Turns the snapshot into the hinge sub-gradient.
/// 3. Subtracts it from the shared weights at those same coordinates.
///
/// Whether steps 1 and 3 race with other workers is up to the `WeightStore`.
pub struct BinarySvc<'a> {
    prob: &'a Problem,
    lambda: f64,
    steps: usize,
    n_cores: NonZeroUsize,
}

impl<'a> BinarySvc<'a> {
    /// Creates a new `BinarySvc` solver.
    ///
    /// # Arguments
    /// * `prob` - The training problem.
    /// * `param` - The training parameters, `lambda`, `steps` and `n_cores` are used.
    ///
    /// # Returns
    /// A new `BinarySvc` instance.
    pub fn new(prob: &'a Problem, param: &Parameter) -> Self {
        Self {
            prob,
            lambda: param.lambda,
            steps: param.steps,
            n_cores: NonZeroUsize::new(param.n_cores).unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Runs every step to completion on `store`.
    ///
    /// Steps are split statically, worker `k` runs `steps / n + 1` steps when
    /// `k < steps % n` and `steps / n` otherwise.
    ///
    /// # Arguments
    /// * `store` - The shared weights, as long as the problem's dimensionality.
    /// * `sampler_factory` - Builds the sampler of each worker given its index.
    ///
    /// # Returns
    /// An error if the worker pool couldn't be built.
    pub fn run<W, S, F>(&self, store: &W, sampler_factory: F) -> Result<()>
    where
        W: WeightStore,
        S: ExampleSampler,
        F: Fn(usize) -> S + Sync,
    {
        let n = self.n_cores.get();
        let pool = ThreadPoolBuilder::new()
            .num_threads(n)
            .thread_name(|k| format!("b_svc-worker-{k}"))
            .build()?;

        pool.broadcast(|ctx| {
            let worker = ctx.index();
            let steps = self.steps / n + usize::from(worker < self.steps % n);

            let mut sampler = sampler_factory(worker);
            let mut grad = vec![0.; store.len()];

            debug!(worker = worker, steps = steps; "worker started");
            for _ in 0..steps {
                let i = sampler.sample(self.prob.len());
                self.step(store, &mut grad, i);
            }
            debug!(worker = worker; "worker finished");
        });

        Ok(())
    }

    /// A single update step on example `i`.
    ///
    /// # Arguments
    /// * `store` - The shared weights.
    /// * `grad` - The worker's private gradient buffer.
    /// * `i` - The example to train on.
    pub fn step<W: WeightStore>(&self, store: &W, grad: &mut [f64], i: usize) {
        let x = self.prob.example(i);

        store.snapshot(grad, x);
        hinge_gradient(grad, self.lambda, self.prob, i);
        store.subtract(grad, x);
    }
}
