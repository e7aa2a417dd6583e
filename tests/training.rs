use hogwild_svm::{
    Parameter, Printer, Problem, SparseVector, SvmType, Trainer, UpdateScheme,
    execution::{BinarySvc, EpsilonSvr, ExampleSampler},
    storage::{WeightStore, WildStore},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Always trains on the same example.
struct Forced(usize);

impl ExampleSampler for Forced {
    fn sample(&mut self, _l: usize) -> usize {
        self.0
    }
}

/// Samples uniformly among the examples `worker, worker + n, worker + 2n, ...`.
struct Strided {
    rng: StdRng,
    worker: usize,
    n: usize,
}

impl Strided {
    fn new(seed: u64, worker: usize, n: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed + worker as u64),
            worker,
            n,
        }
    }
}

impl ExampleSampler for Strided {
    fn sample(&mut self, l: usize) -> usize {
        self.worker + self.n * self.rng.random_range(0..l / self.n)
    }
}

fn two_examples() -> Problem {
    let xs = vec![
        SparseVector::from_pairs([(1, 1.)]),
        SparseVector::from_pairs([(2, 1.)]),
    ];
    Problem::new(2, vec![1., -1.], xs, vec![1., 1.]).unwrap()
}

/// `l` examples that never share a feature, two features each.
fn disjoint(l: usize) -> Problem {
    let xs: Vec<_> = (0..l)
        .map(|k| SparseVector::from_pairs([(2 * k + 1, 1.), (2 * k + 2, 0.5 + k as f64 / 10.)]))
        .collect();
    let ys = (0..l).map(|k| if k % 3 == 0 { -1. } else { 1. }).collect();

    Problem::with_occurrence_counts(2 * l, ys, xs).unwrap()
}

#[test]
fn forced_first_example_moves_only_its_coordinate() {
    let prob = two_examples();
    let param = Parameter {
        lambda: 0.1,
        steps: 1,
        ..Default::default()
    };

    let store = WildStore::new(&[0., 0.]);
    BinarySvc::new(&prob, &param)
        .run(&store, |_| Forced(0))
        .unwrap();

    let mut w = [0.; 2];
    store.pull(&mut w);
    assert!(w[0] > 0.);
    assert_eq!(w[1], 0.);
}

#[test]
fn regression_step_decays_every_coordinate() {
    let xs = vec![SparseVector::from_pairs([(1, 1.)])];
    let prob = Problem::new(3, vec![10.], xs, vec![1.; 3]).unwrap();
    let param = Parameter {
        svm_type: SvmType::EpsilonSvr,
        lambda: 1.,
        p: 0.1,
        steps: 1,
        ..Default::default()
    };
    let solver = EpsilonSvr::new(&prob, &param);

    // A previous run left every coordinate non-zero, the first step scales all of them by 0.
    let mut w = [3., -1., 2.];
    solver.run(&mut w, &mut Forced(0));
    assert_eq!(w, [1., 0., 0.]);
}

#[test]
fn concurrent_disjoint_training_matches_sequential_replay() {
    const WORKERS: usize = 4;
    const SEED: u64 = 1234;

    let prob = disjoint(4 * WORKERS);
    let param = Parameter {
        lambda: 0.05,
        steps: 400,
        n_cores: WORKERS,
        ..Default::default()
    };

    let store = WildStore::new(&vec![0.; prob.dim()]);
    BinarySvc::new(&prob, &param)
        .run(&store, |worker| Strided::new(SEED, worker, WORKERS))
        .unwrap();
    let mut concurrent = vec![0.; prob.dim()];
    store.pull(&mut concurrent);

    // Replay each worker's draws one worker after the other.
    let sequential = Parameter {
        n_cores: 1,
        ..param.clone()
    };
    let solver = BinarySvc::new(&prob, &sequential);
    let replay = WildStore::new(&vec![0.; prob.dim()]);
    let mut grad = vec![0.; prob.dim()];

    for worker in 0..WORKERS {
        let mut sampler = Strided::new(SEED, worker, WORKERS);
        for _ in 0..param.steps / WORKERS {
            solver.step(&replay, &mut grad, sampler.sample(prob.len()));
        }
    }

    let mut expected = vec![0.; prob.dim()];
    replay.pull(&mut expected);
    assert_eq!(concurrent, expected);
}

#[test]
fn learns_a_separable_problem() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for _ in 0..200 {
        let y = if rng.random_bool(0.5) { 1. } else { -1. };
        let signal = y * rng.random_range(0.5..1.5);
        let noise = rng.random_range(-1.0..1.0);
        xs.push(SparseVector::from_pairs([(1, signal), (2, noise)]));
        ys.push(y);
    }

    let prob = Problem::with_occurrence_counts(2, ys, xs).unwrap();
    let param = Parameter {
        lambda: 1e-3,
        steps: 20_000,
        n_cores: 4,
        ..Default::default()
    };

    for update_scheme in [UpdateScheme::Wild, UpdateScheme::Blocking] {
        let model = Trainer::new()
            .with_printer(Printer::silent())
            .with_seed(3)
            .with_update_scheme(update_scheme)
            .train(&prob, &param)
            .unwrap();

        let hits = prob
            .examples()
            .iter()
            .zip(prob.labels())
            .filter(|(x, y)| model.predict(x) == **y)
            .count();

        assert!(hits >= 190, "{update_scheme:?} got {hits}/200");
    }
}
