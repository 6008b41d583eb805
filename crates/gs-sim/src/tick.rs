//! `TickScheduler` — lock-step batch model.
//!
//! # Tick
//!
//! ```text
//! now = start of tick
//! ① Repair  — pop every repair due at or before `now`; broken -= 1 each.
//! ② Process — now += mean_processing_time;
//!             completed += healthy (capped at passenger_count).
//! ③ Break   — each healthy gate rolls break_chance; on success
//!             broken += 1 and a repair is queued at now + repair duration.
//! ```
//!
//! A gate that breaks in ③ has already finished its unit in ②
//! (complete-before-roll).  A gate repaired at time `r` rejoins at the first
//! tick starting at or after `r`.
//!
//! With a fixed repair time the repair stream is already time-ordered, so a
//! [`RingQueue`][gs_queue::RingQueue] suffices; jittered repairs need a
//! [`HeapQueue`][gs_queue::HeapQueue].

use gs_core::{SimulationConfig, VariateGenerator};
use gs_queue::{Event, EventQueue};
use tracing::trace;

use crate::{Scheduler, SimObserver, SimResult, SimulationState};

/// Batch scheduler: every healthy gate clears one unit per tick.
#[derive(Debug)]
pub struct TickScheduler<Q: EventQueue> {
    queue: Q,
}

impl<Q: EventQueue> TickScheduler<Q> {
    /// `queue` must hold at least `gate_count` events.
    pub fn new(queue: Q) -> Self {
        Self { queue }
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }
}

impl<Q: EventQueue> Scheduler for TickScheduler<Q> {
    fn step<O: SimObserver>(
        &mut self,
        config:   &SimulationConfig,
        state:    &mut SimulationState,
        rng:      &mut VariateGenerator,
        observer: &mut O,
    ) -> SimResult<()> {
        // ── ① Repairs due by the start of this tick ───────────────────────
        let tick_start = state.time;
        while let Some(event) = self.queue.pop_due(tick_start)? {
            // Keep the clock at the tick start; a repair that matured
            // mid-previous-tick is only noticed now.
            let applied = Event { time: tick_start, ..event };
            state.apply(applied)?;
            observer.on_event(&applied, state);
        }

        // ── ② Every healthy gate clears one unit ──────────────────────────
        state.time = state.after(config.mean_processing_time)?;
        let healthy = state.healthy(config.gate_count);
        state.completed = (state.completed + u64::from(healthy)).min(config.passenger_count);

        // ── ③ Breakage rolls for the gates that just worked ───────────────
        for _ in 0..healthy {
            if rng.breaks(config.break_chance) {
                state.broken += 1;
                let repair = rng.duration(config.mean_repair_time, config.repair_model);
                self.queue.push(Event::repair(state.after(repair)?))?;
            }
        }

        trace!(
            time      = state.time.0,
            completed = state.completed,
            broken    = state.broken,
            "tick"
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
