//! Builder for constructing a [`Simulation`].

use gs_core::{SimulationConfig, Tick, VariateGenerator};

use crate::{PercentileSampler, Scheduler, SimError, SimResult, SimulationState, Simulation};

/// Builder for [`Simulation<S, P>`].
///
/// # Required inputs
///
/// - [`SimulationConfig`] — volume, gates, break chance, durations, seed
/// - `S: Scheduler` — [`TickScheduler`][crate::TickScheduler] or
///   [`EventScheduler`][crate::EventScheduler] over a sized queue
/// - `P: PercentileSampler` — [`DenseRecord`][crate::DenseRecord] or
///   [`SparseRecord`][crate::SparseRecord]
///
/// # Example
///
/// ```rust,ignore
/// let cap = config.queue_capacity();
/// let mut sim = SimBuilder::new(config, TickScheduler::new(RingQueue::new(cap)), SparseRecord::standard())
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// let record = sim.into_sampler();
/// ```
pub struct SimBuilder<S: Scheduler, P: PercentileSampler> {
    config:    SimulationConfig,
    scheduler: S,
    sampler:   P,
}

impl<S: Scheduler, P: PercentileSampler> SimBuilder<S, P> {
    pub fn new(config: SimulationConfig, scheduler: S, sampler: P) -> Self {
        Self { config, scheduler, sampler }
    }

    /// Override the seed carried in the config.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the config and queue sizing, seed the RNG, and return a
    /// ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation<S, P>> {
        self.config.validate()?;

        let needed = self.config.queue_capacity();
        let got = self.scheduler.capacity();
        if got < needed {
            return Err(SimError::QueueUndersized { needed, got });
        }
        if self.scheduler.pending() != 0 {
            return Err(SimError::Invariant {
                time: Tick::ZERO,
                what: "scheduler queue not empty at run start",
            });
        }

        Ok(Simulation {
            rng:       VariateGenerator::new(self.config.seed),
            config:    self.config,
            state:     SimulationState::default(),
            scheduler: self.scheduler,
            sampler:   self.sampler,
            steps:     0,
            started:   false,
        })
    }
}
