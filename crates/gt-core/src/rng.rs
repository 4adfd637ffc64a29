//! Deterministic simulation RNG and the Poisson arrival sampler.
//!
//! # Determinism strategy
//!
//! One `SmallRng` stream, seeded from a single `u64`, feeds all arrival
//! sampling.  Lanes are always sampled in registry order, so a given seed
//! reproduces the exact draw sequence — and therefore the exact vehicle
//! stream — on every run.  Two worlds with different seeds (or the same
//! seed) never share state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Hard cap on uniform draws per Poisson sample.
///
/// The rejection loop terminates almost surely after ~rate draws; arrival
/// rates here are well below 1, so the cap exists only to bound `step()`
/// against a pathological rate.
const POISSON_DRAW_CAP: u32 = 1_000;

/// Simulation-level deterministic RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// One uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Sample a Poisson-distributed arrival count with mean `rate`.
    ///
    /// Multiplies uniform draws into a running product until it falls to
    /// `e^(-rate)` or below; the result is the draw count minus one.  The
    /// rejection form (rather than inverse-CDF) is kept so draw sequences
    /// stay comparable under a fixed seed.
    pub fn poisson(&mut self, rate: f64) -> u32 {
        if rate <= 0.0 {
            return 0;
        }
        let floor = (-rate).exp();
        let mut product = 1.0_f64;
        let mut draws = 0_u32;
        while draws < POISSON_DRAW_CAP {
            draws += 1;
            product *= self.uniform();
            if product <= floor {
                return draws - 1;
            }
        }
        POISSON_DRAW_CAP - 1
    }
}
