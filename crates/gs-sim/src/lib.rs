//! `gs-sim` — breakdown-aware gate-bank simulation for gatesim.
//!
//! # Loop
//!
//! ```text
//! observe(0, total, T0)
//! while completed < passenger_count:
//!   scheduler.step(config, state, rng)     — one tick or one event
//!   state.check(config)                    — conservation invariants
//!   sampler.observe(completed, total, now) — first-crossing times
//! ```
//!
//! Two interchangeable [`Scheduler`]s drive the step:
//!
//! | Scheduler          | Time advance              | Queue                        |
//! |--------------------|---------------------------|------------------------------|
//! | [`TickScheduler`]  | fixed `processing_time`   | ring (fixed repairs) or heap |
//! | [`EventScheduler`] | to the next due event     | heap                         |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_seeds`] fans seeds out over Rayon's thread pool. |
//! | `serde`    | Serde derives on configs, events, and state.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_core::SimulationConfig;
//! use gs_sim::{run, PercentileSampler};
//!
//! let record = run(&SimulationConfig::default())?;
//! println!("t50={:?} t99={:?}", record.time_to(50), record.time_to(99));
//! ```

pub mod builder;
pub mod error;
pub mod event_driven;
pub mod observer;
pub mod percentile;
pub mod run;
pub mod scheduler;
pub mod sim;
pub mod state;
pub mod tick;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event_driven::EventScheduler;
pub use observer::{NoopObserver, SimObserver, TraceObserver};
pub use percentile::{BucketFill, DenseRecord, PercentileSampler, SparseRecord, TailRatios};
pub use run::{run, run_dense, run_observed, run_seeds, run_with};
pub use scheduler::Scheduler;
pub use sim::Simulation;
pub use state::SimulationState;
pub use tick::TickScheduler;
