use std::io;

use hogwild_svm::{
    Model, Problem, SparseVector, SvmType, Trainer, config::Config, data::load_problem,
    load_model, save_model,
};
use log::{error, info, warn};

fn main() -> io::Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    info!("reading training problem from {}", config.train_file.display());
    let prob = config.training_problem()?;

    if let Err(e) = config.param.check() {
        error!("invalid parameters: {e}");
        return Err(io::Error::new(io::ErrorKind::InvalidInput, e));
    }

    let mut trainer = Trainer::new().with_update_scheme(config.update_scheme);
    if let Some(seed) = config.seed {
        trainer = trainer.with_seed(seed);
    }

    let model = trainer.train(&prob, &config.param)?;
    save_model(&config.model_file, &model)?;
    info!("model saved to {}", config.model_file.display());

    if let Some(test_file) = &config.test_file {
        let model = load_model(&config.model_file)?;
        let test = load_problem(test_file)?;
        report(&model, &test);
    }

    Ok(())
}

fn report(model: &Model, test: &Problem) {
    let dim = model.dim();
    if test.dim() > dim {
        warn!("test features beyond index {dim} are ignored");
    }

    let n = test.len().max(1) as f64;
    let preds = test.examples().iter().map(|x| {
        let x = SparseVector::new(x.iter().copied().filter(|f| f.index <= dim).collect());
        model.predict(&x)
    });

    match model.svm_type() {
        SvmType::BSvc => {
            let hits = preds
                .zip(test.labels())
                .filter(|(pred, y)| pred == *y)
                .count();
            println!(
                "Accuracy = {:.4}% ({hits}/{})",
                100. * hits as f64 / n,
                test.len()
            );
        }
        SvmType::EpsilonSvr => {
            let sq_err: f64 = preds
                .zip(test.labels())
                .map(|(pred, y)| (pred - y).powi(2))
                .sum();
            println!("Mean squared error = {} (regression)", sq_err / n);
        }
    }
}
