use rand::{Rng, SeedableRng, rngs::StdRng};

/// Picks which example the next update step trains on.
pub trait ExampleSampler {
    /// Should sample an example index in `[0, l)`.
    ///
    /// # Arguments
    /// * `l` - The amount of examples in the problem.
    fn sample(&mut self, l: usize) -> usize;
}

/// Samples examples uniformly at random.
pub struct RandomSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator owned by this sampler alone.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    /// Creates the sampler for one worker of a training run.
    ///
    /// Every worker gets an independent generator: seeded from the OS when `seed` is
    /// `None`, or from `seed + worker` so runs can be replayed.
    ///
    /// # Arguments
    /// * `seed` - An optional base seed for the run.
    /// * `worker` - The worker's index.
    pub fn for_worker(seed: Option<u64>, worker: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
            None => StdRng::from_os_rng(),
        };

        Self::new(rng)
    }
}

impl<R: Rng> ExampleSampler for RandomSampler<R> {
    /// # Panics
    /// If `l` is `0`.
    fn sample(&mut self, l: usize) -> usize {
        self.rng.random_range(0..l)
    }
}
