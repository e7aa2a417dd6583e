use log::info;

use crate::{
    error::Result,
    execution::{BinarySvc, EpsilonSvr, RandomSampler},
    model::Model,
    output::Printer,
    parameter::{Parameter, SvmType},
    problem::Problem,
    storage::{BlockingStore, UpdateScheme, WeightStore, WildStore},
};

/// Training options that aren't part of the persisted parameter set.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    printer: Printer,
    seed: Option<u64>,
    update_scheme: UpdateScheme,
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sink receiving progress messages.
    pub fn with_printer(mut self, printer: Printer) -> Self {
        self.printer = printer;
        self
    }

    /// Seeds every worker's sampler from `seed` instead of the OS.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Chooses how the classification workers share the weights.
    pub fn with_update_scheme(mut self, update_scheme: UpdateScheme) -> Self {
        self.update_scheme = update_scheme;
        self
    }

    /// Trains a new model on `prob`.
    ///
    /// The parameter set isn't validated here, see `Parameter::check`. The problem must
    /// hold at least one example and every active feature needs a non-zero divisor.
    ///
    /// # Arguments
    /// * `prob` - The training problem.
    /// * `param` - The training parameters, copied into the model.
    ///
    /// # Returns
    /// The trained model, or an error if the classification worker pool couldn't be built.
    ///
    /// # Panics
    /// If `prob` is empty or an example references an index beyond its dimensionality.
    pub fn train(&self, prob: &Problem, param: &Parameter) -> Result<Model> {
        let mut model = Model::new(param.clone(), prob.dim());

        info!(
            svm_type = param.svm_type.name(),
            examples = prob.len(),
            dim = prob.dim(),
            steps = param.steps;
            "training started"
        );

        match param.svm_type {
            SvmType::BSvc => match self.update_scheme {
                UpdateScheme::Wild => {
                    let store = WildStore::new(&model.w);
                    self.train_svc(prob, param, &store)?;
                    store.pull(&mut model.w);
                }
                UpdateScheme::Blocking => {
                    let store = BlockingStore::new(&model.w);
                    self.train_svc(prob, param, &store)?;
                    store.pull(&mut model.w);
                }
            },
            SvmType::EpsilonSvr => {
                let mut sampler = RandomSampler::for_worker(self.seed, 0);
                EpsilonSvr::new(prob, param).run(&mut model.w, &mut sampler);
            }
        }

        info!("training finished");
        self.printer.print("Finish training\n");
        Ok(model)
    }

    fn train_svc<W>(&self, prob: &Problem, param: &Parameter, store: &W) -> Result<()>
    where
        W: WeightStore,
    {
        let seed = self.seed;

        BinarySvc::new(prob, param)
            .run(store, |worker| RandomSampler::for_worker(seed, worker))
    }
}

/// Trains a new model on `prob` with the default `Trainer`.
///
/// # Arguments
/// * `prob` - The training problem.
/// * `param` - The training parameters.
///
/// # Returns
/// The trained model, see `Trainer::train`.
pub fn train(prob: &Problem, param: &Parameter) -> Result<Model> {
    Trainer::default().train(prob, param)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::sparse::SparseVector;

    fn problem() -> Problem {
        let xs = vec![
            SparseVector::from_pairs([(1, 1.)]),
            SparseVector::from_pairs([(2, 1.)]),
        ];
        Problem::new(2, vec![1., -1.], xs, vec![1., 1.]).unwrap()
    }

    #[test]
    fn prints_to_the_injected_sink() {
        let out = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&out);
        let trainer = Trainer::new()
            .with_seed(0)
            .with_printer(Printer::new(move |s| sink.lock().push_str(s)));

        let param = Parameter {
            steps: 1,
            ..Default::default()
        };
        trainer.train(&problem(), &param).unwrap();

        assert_eq!(*out.lock(), "Finish training\n");
    }

    #[test]
    fn model_carries_the_parameters() {
        let param = Parameter {
            svm_type: SvmType::EpsilonSvr,
            lambda: 0.25,
            steps: 3,
            ..Default::default()
        };
        let model = Trainer::new()
            .with_printer(Printer::silent())
            .with_seed(5)
            .train(&problem(), &param)
            .unwrap();

        assert_eq!(model.param(), &param);
        assert_eq!(model.dim(), 2);
        assert_eq!(model.weights().len(), 2);
    }

    #[test]
    fn single_step_moves_one_coordinate() {
        let param = Parameter {
            lambda: 0.1,
            steps: 1,
            ..Default::default()
        };

        for update_scheme in [UpdateScheme::Wild, UpdateScheme::Blocking] {
            let model = Trainer::new()
                .with_printer(Printer::silent())
                .with_update_scheme(update_scheme)
                .train(&problem(), &param)
                .unwrap();

            let moved = model.weights().iter().filter(|w| **w != 0.).count();
            assert_eq!(moved, 1);
        }
    }

    #[test]
    fn seeded_single_worker_runs_are_reproducible() {
        let param = Parameter {
            lambda: 0.1,
            steps: 50,
            ..Default::default()
        };
        let trainer = Trainer::new().with_printer(Printer::silent()).with_seed(11);

        let a = trainer.train(&problem(), &param).unwrap();
        let b = trainer.train(&problem(), &param).unwrap();
        assert_eq!(a, b);
    }
}
