//! Pure entry points: `config → record`.
//!
//! Each function builds a fresh scheduler, queue, RNG, and sampler, runs to
//! completion, and returns the sampler.  Nothing outlives the call, so the
//! same config always gives the same record and calls can be made from any
//! number of threads at once.
//!
//! # Backend selection
//!
//! | `variant`     | `repair_model` | Scheduler        | Queue       |
//! |---------------|----------------|------------------|-------------|
//! | `Tick`        | `Fixed`        | `TickScheduler`  | `RingQueue` |
//! | `Tick`        | `Jittered`     | `TickScheduler`  | `HeapQueue` |
//! | `EventDriven` | any            | `EventScheduler` | `HeapQueue` |

use gs_core::{DurationModel, ScheduleVariant, SimulationConfig};
use gs_queue::{HeapQueue, RingQueue};

use crate::{
    DenseRecord, EventScheduler, NoopObserver, PercentileSampler, Scheduler, SimBuilder,
    SimObserver, SimResult, SparseRecord, TickScheduler,
};

/// Run `config` and return its 50 / 95 / 99 record.
pub fn run(config: &SimulationConfig) -> SimResult<SparseRecord> {
    run_with(config, SparseRecord::standard())
}

/// Run `config` and return the full 0..=100 record (skipped buckets
/// backfilled).
pub fn run_dense(config: &SimulationConfig) -> SimResult<DenseRecord> {
    run_with(config, DenseRecord::default())
}

/// Run `config`, feeding progress into `sampler`.
pub fn run_with<P: PercentileSampler>(config: &SimulationConfig, sampler: P) -> SimResult<P> {
    run_observed(config, sampler, &mut NoopObserver)
}

/// Run `config` with an observer attached.
///
/// Picks the scheduler and queue backend from `config.variant` and
/// `config.repair_model`, sized by [`SimulationConfig::queue_capacity`].
pub fn run_observed<P, O>(config: &SimulationConfig, sampler: P, observer: &mut O) -> SimResult<P>
where
    P: PercentileSampler,
    O: SimObserver,
{
    let capacity = config.queue_capacity();
    match (config.variant, config.repair_model) {
        (ScheduleVariant::Tick, DurationModel::Fixed) => {
            drive(config, TickScheduler::new(RingQueue::new(capacity)), sampler, observer)
        }
        (ScheduleVariant::Tick, DurationModel::Jittered) => {
            drive(config, TickScheduler::new(HeapQueue::new(capacity)), sampler, observer)
        }
        (ScheduleVariant::EventDriven, _) => {
            drive(config, EventScheduler::new(HeapQueue::new(capacity)), sampler, observer)
        }
    }
}

fn drive<S, P, O>(config: &SimulationConfig, scheduler: S, sampler: P, observer: &mut O) -> SimResult<P>
where
    S: Scheduler,
    P: PercentileSampler,
    O: SimObserver,
{
    let mut sim = SimBuilder::new(config.clone(), scheduler, sampler).build()?;
    sim.run(observer)?;
    Ok(sim.into_sampler())
}

/// Run `config` once per seed, returning one result per seed in `seeds`
/// order.
///
/// Runs are independent: a failure in one seed does not affect the others.
/// No aggregation is done; each record is returned as-is.  With the
/// `parallel` Cargo feature the runs execute on Rayon's thread pool.
pub fn run_seeds<P, F>(config: &SimulationConfig, seeds: &[u64], make_sampler: F) -> Vec<SimResult<P>>
where
    P: PercentileSampler + Send,
    F: Fn() -> P + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        seeds
            .iter()
            .map(|&seed| run_with(&config.with_seed(seed), make_sampler()))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // `collect` on an indexed parallel iterator preserves input order.
        seeds
            .par_iter()
            .map(|&seed| run_with(&config.with_seed(seed), make_sampler()))
            .collect()
    }
}
