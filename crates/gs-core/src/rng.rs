//! Deterministic per-run variate generation.
//!
//! # Determinism strategy
//!
//! Every run owns exactly one `VariateGenerator`, seeded from
//! `SimulationConfig::seed`.  There is no process-wide RNG:
//!
//! - The same seed always yields the same sequence of draws, so the same
//!   config always yields the same event trace.
//! - Runs never share RNG state, so runs fanned out across threads cannot
//!   perturb each other.
//!
//! The stream is ChaCha8, whose output is fixed by its algorithm rather than
//! by the platform or the `rand` release, so a seed reproduces the same run
//! on any machine.  `rand_distr`'s `Normal` is used only for jittered
//! durations; `Fixed` runs draw nothing but Bernoulli trials.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::DurationModel;

/// Jitter spread as a fraction of the mean (σ = mean / 4).
const JITTER_SPREAD: f64 = 0.25;

/// Seeded source of breakage trials and jittered durations for one run.
pub struct VariateGenerator(ChaCha8Rng);

impl VariateGenerator {
    pub fn new(seed: u64) -> Self {
        VariateGenerator(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Bernoulli trial: `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn breaks(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A duration drawn from N(mean, (mean/4)²), rounded to the nearest unit.
    ///
    /// Negative draws are clamped to zero.  This folds the (tiny, ~4σ) left
    /// tail onto zero rather than re-sampling, so the effective mean is very
    /// slightly above `mean`.
    pub fn jittered(&mut self, mean: u64) -> u64 {
        if mean == 0 {
            return 0;
        }
        let mean_f = mean as f64;
        match Normal::new(mean_f, mean_f * JITTER_SPREAD) {
            Ok(normal) => normal.sample(&mut self.0).round().max(0.0) as u64,
            // Unreachable for finite positive means.
            Err(_) => mean,
        }
    }

    /// Draw a duration under `model`.  [`DurationModel::Fixed`] consumes no
    /// randomness.
    #[inline]
    pub fn duration(&mut self, mean: u64, model: DurationModel) -> u64 {
        match model {
            DurationModel::Fixed    => mean,
            DurationModel::Jittered => self.jittered(mean),
        }
    }
}
