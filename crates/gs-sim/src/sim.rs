//! The `Simulation` struct and its run loop.

use gs_core::{SimulationConfig, VariateGenerator};
use tracing::{debug, warn};

use crate::{PercentileSampler, Scheduler, SimError, SimObserver, SimResult, SimulationState};

/// A single run: configuration, state, scheduler, and percentile sampler.
///
/// Everything here is owned by the run; nothing is shared with other runs,
/// so independent `Simulation`s can execute on different threads without
/// synchronisation.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<S: Scheduler, P: PercentileSampler> {
    /// Run configuration (volume, gates, break chance, durations, seed).
    pub config: SimulationConfig,

    /// Current counters.
    pub state: SimulationState,

    /// Scheduling strategy and its event queue.
    pub scheduler: S,

    /// First-crossing recorder fed after every step.
    pub sampler: P,

    /// Per-run RNG, seeded from `config.seed`.
    pub(crate) rng: VariateGenerator,

    /// Steps taken so far.
    pub(crate) steps: u64,

    /// `true` once the initial (all-zero) state has been reported.
    pub(crate) started: bool,
}

impl<S: Scheduler, P: PercentileSampler> Simulation<S, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every passenger has cleared.
    ///
    /// Fails with [`SimError::DidNotConverge`] if `config.max_steps` is set
    /// and reached first; any queue or invariant error aborts the run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.start(observer);
        debug!(
            seed       = self.config.seed,
            passengers = self.config.passenger_count,
            gates      = self.config.gate_count,
            variant    = ?self.config.variant,
            "run start"
        );

        while !self.is_done() {
            if let Some(max) = self.config.max_steps {
                if self.steps >= max {
                    warn!(
                        steps     = self.steps,
                        completed = self.state.completed,
                        time      = self.state.time.0,
                        "step ceiling reached before all passengers cleared"
                    );
                    return Err(SimError::DidNotConverge {
                        steps:     self.steps,
                        completed: self.state.completed,
                        total:     self.config.passenger_count,
                        time:      self.state.time,
                    });
                }
            }
            self.advance(observer)?;
        }

        observer.on_run_end(&self.state);
        debug!(
            steps   = self.steps,
            time    = self.state.time.0,
            broken  = self.state.broken,
            "run finished"
        );
        Ok(())
    }

    /// Take at most `n` steps, stopping early if the run finishes.
    ///
    /// Ignores `max_steps`.  Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.start(observer);
        for _ in 0..n {
            if self.is_done() {
                break;
            }
            self.advance(observer)?;
        }
        Ok(())
    }

    /// `true` once every passenger has cleared.
    pub fn is_done(&self) -> bool {
        self.state.is_done(self.config.passenger_count)
    }

    /// Loop steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Consume the run and return its percentile record.
    pub fn into_sampler(self) -> P {
        self.sampler
    }

    // ── Core loop ─────────────────────────────────────────────────────────

    /// Report the initial state once, before the first step.
    fn start<O: SimObserver>(&mut self, observer: &mut O) {
        if self.started {
            return;
        }
        self.started = true;
        observer.on_run_start(&self.config);
        self.observe();
    }

    fn advance<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let before = self.state;
        self.scheduler
            .step(&self.config, &mut self.state, &mut self.rng, observer)?;
        self.steps += 1;

        if self.state.time < before.time {
            return Err(SimError::Invariant {
                time: self.state.time,
                what: "clock moved backwards",
            });
        }
        if self.state.completed < before.completed {
            return Err(SimError::Invariant {
                time: self.state.time,
                what: "completed count decreased",
            });
        }
        self.state.check(&self.config)?;

        self.observe();
        observer.on_step_end(self.steps, &self.state);
        Ok(())
    }

    #[inline]
    fn observe(&mut self) {
        self.sampler.observe(
            self.state.completed,
            self.config.passenger_count,
            self.state.time,
        );
    }
}
