use super::batch::Batch;
use super::trials::Trials;
use crate::game::Strategy;
use crate::trial::Trial;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// A reproducible run of many independent games.
///
/// Every trial draws from its own generator, seeded by hashing the run
/// seed with the trial's index. Trials therefore never share random
/// state, and the sequential and parallel runners return the same batch
/// for the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulation {
    trials: Trials,
    seed: u64,
}

impl Simulation {
    pub fn new(trials: Trials, seed: u64) -> Self {
        Self { trials, seed }
    }
    pub fn trials(&self) -> Trials {
        self.trials
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Plays every trial on the current thread.
    pub fn run(&self) -> Batch {
        log::info!("{:<32}{:<32}", "simulating games", self.trials);
        let batch = (0..self.trials.get())
            .map(|i| self.trial(i))
            .collect::<Batch>();
        self.report(&batch);
        batch
    }

    /// Plays trials across the rayon thread pool.
    #[cfg(feature = "server")]
    pub fn par_run(&self) -> Batch {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        log::info!("{:<32}{:<32}", "simulating games (parallel)", self.trials);
        let batch: Batch = (0..self.trials.get())
            .into_par_iter()
            .map(|i| self.trial(i))
            .collect::<Vec<Trial>>()
            .into();
        self.report(&batch);
        batch
    }

    fn trial(&self, i: usize) -> Trial {
        Trial::play(&mut self.rng(i))
    }

    /// Deterministic per-trial generator.
    fn rng(&self, i: usize) -> SmallRng {
        let ref mut hasher = DefaultHasher::new();
        self.seed.hash(hasher);
        i.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    fn report(&self, batch: &Batch) {
        let summary = batch.summary();
        log::debug!("{:<32}{:<32}", "simulation seed", self.seed);
        log::info!("{:<32}{:<32}", "games simulated", batch.len());
        log::info!("{:<32}{:<32.4}", "stay win rate", summary.win_rate(Strategy::Stay));
        log::info!("{:<32}{:<32.4}", "switch win rate", summary.win_rate(Strategy::Switch));
        log::debug!("\n{}", summary);
    }
}

/// Seeds from the thread-local generator.
impl From<Trials> for Simulation {
    fn from(trials: Trials) -> Self {
        Self::new(trials, rand::random())
    }
}
