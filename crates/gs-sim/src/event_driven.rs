//! `EventScheduler` — asynchronous gates, time jumps between events.
//!
//! # Step
//!
//! ```text
//! ① Break   — each idle healthy gate about to take a unit rolls
//!             break_chance first; on success broken += 1 and a repair is
//!             queued.  At most one roll per unstarted passenger.
//! ② Start   — while a healthy gate is free and unstarted passengers remain,
//!             start a unit: in_flight += 1, completion queued.
//! ③ Pop     — take the earliest event (repairs first on ties).
//! ④ Apply   — now = event.time; Repair → broken -= 1,
//!             Completion → completed += 1, in_flight -= 1.
//! ```
//!
//! Gates only break between units, never mid-unit, so after every event
//!
//! ```text
//! in_flight + broken ≤ gate_count
//! ```
//!
//! and at most `2 × gate_count` events are ever pending.

use gs_core::{SimulationConfig, VariateGenerator};
use gs_queue::{Event, EventQueue};
use tracing::trace;

use crate::{Scheduler, SimObserver, SimResult, SimulationState};

/// Event-driven scheduler: one popped event per step.
#[derive(Debug)]
pub struct EventScheduler<Q: EventQueue> {
    queue: Q,
}

impl<Q: EventQueue> EventScheduler<Q> {
    /// `queue` must hold at least `2 × gate_count` events and must order
    /// mixed event kinds by time, i.e. a [`HeapQueue`][gs_queue::HeapQueue].
    pub fn new(queue: Q) -> Self {
        Self { queue }
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Roll breakage for the idle gates that are about to take a unit.
    /// Gates with nothing left to start do not roll.
    fn roll_breakage(
        &mut self,
        config: &SimulationConfig,
        state:  &mut SimulationState,
        rng:    &mut VariateGenerator,
    ) -> SimResult<()> {
        let unstarted = config
            .passenger_count
            .saturating_sub(state.completed + u64::from(state.in_flight));
        let rolls = u64::from(state.idle(config.gate_count)).min(unstarted);
        for _ in 0..rolls {
            if rng.breaks(config.break_chance) {
                state.broken += 1;
                let repair = rng.duration(config.mean_repair_time, config.repair_model);
                self.queue.push(Event::repair(state.after(repair)?))?;
            }
        }
        Ok(())
    }

    /// Start units on free healthy gates until none are free or every
    /// remaining passenger is already in flight.
    fn top_up(
        &mut self,
        config: &SimulationConfig,
        state:  &mut SimulationState,
        rng:    &mut VariateGenerator,
    ) -> SimResult<()> {
        let healthy = state.healthy(config.gate_count);
        while state.in_flight < healthy
            && state.completed + u64::from(state.in_flight) < config.passenger_count
        {
            state.in_flight += 1;
            let processing = rng.duration(config.mean_processing_time, config.processing_model);
            self.queue.push(Event::completion(state.after(processing)?))?;
        }
        Ok(())
    }
}

impl<Q: EventQueue> Scheduler for EventScheduler<Q> {
    fn step<O: SimObserver>(
        &mut self,
        config:   &SimulationConfig,
        state:    &mut SimulationState,
        rng:      &mut VariateGenerator,
        observer: &mut O,
    ) -> SimResult<()> {
        self.roll_breakage(config, state, rng)?;
        self.top_up(config, state, rng)?;

        let event = self.queue.pop()?;
        state.apply(event)?;
        observer.on_event(&event, state);

        trace!(
            time      = state.time.0,
            kind      = ?event.kind,
            completed = state.completed,
            in_flight = state.in_flight,
            broken    = state.broken,
            "event"
        );
        Ok(())
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }

    fn capacity(&self) -> usize {
        self.queue.capacity()
    }
}
