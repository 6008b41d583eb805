//! The `Scheduler` trait — the strategy that advances a run by one step.

use gs_core::{SimulationConfig, VariateGenerator};

use crate::{SimObserver, SimResult, SimulationState};

/// One scheduling strategy over an owned event queue.
///
/// [`Simulation`][crate::Simulation] calls [`step`][Self::step] until every
/// passenger has cleared, observing completion progress after each call.  A
/// step must leave `state` satisfying
/// [`SimulationState::check`][crate::SimulationState::check] and must never
/// move `state.time` backwards.
///
/// Implementations:
///
/// | Type                                      | Step                         |
/// |-------------------------------------------|------------------------------|
/// | [`TickScheduler`][crate::TickScheduler]   | one fixed-length batch tick  |
/// | [`EventScheduler`][crate::EventScheduler] | one popped event             |
pub trait Scheduler {
    /// Advance `state` by one step, drawing all randomness from `rng`.
    fn step<O: SimObserver>(
        &mut self,
        config:   &SimulationConfig,
        state:    &mut SimulationState,
        rng:      &mut VariateGenerator,
        observer: &mut O,
    ) -> SimResult<()>;

    /// Events currently pending in the scheduler's queue.
    fn pending(&self) -> usize;

    /// Capacity of the scheduler's queue.
    fn capacity(&self) -> usize;
}
