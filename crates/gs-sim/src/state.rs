//! Mutable per-run counters.

use gs_core::{SimulationConfig, Tick};
use gs_queue::{Event, EventKind};

use crate::{SimError, SimResult};

/// Everything that changes while a run advances.
///
/// Created zeroed at run start and dropped at run end.  The invariants
///
/// ```text
/// broken ≤ gate_count
/// in_flight + broken ≤ gate_count
/// completed ≤ passenger_count
/// ```
///
/// are re-checked by [`check`][Self::check] after every step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    /// Current simulated time.  Never decreases.
    pub time:      Tick,
    /// Units that have cleared a gate.  Never decreases.
    pub completed: u64,
    /// Units currently being processed.  Always 0 under the tick scheduler.
    pub in_flight: u32,
    /// Gates waiting for repair.
    pub broken:    u32,
}

impl SimulationState {
    /// Gates not waiting for repair.
    #[inline]
    pub fn healthy(&self, gate_count: u32) -> u32 {
        gate_count.saturating_sub(self.broken)
    }

    /// Healthy gates with no unit in flight.
    #[inline]
    pub fn idle(&self, gate_count: u32) -> u32 {
        self.healthy(gate_count).saturating_sub(self.in_flight)
    }

    #[inline]
    pub fn is_done(&self, passenger_count: u64) -> bool {
        self.completed >= passenger_count
    }

    /// The time `units` after now.  Fails with [`SimError::TimeOverflow`]
    /// instead of wrapping.
    #[inline]
    pub fn after(&self, units: u64) -> SimResult<Tick> {
        self.time
            .offset(units)
            .ok_or(SimError::TimeOverflow { time: self.time, by: units })
    }

    /// Move the clock to `event.time` and apply the event's effect.
    ///
    /// A repair returns one gate to service; a completion retires one
    /// in-flight unit.  Either fails with [`SimError::Invariant`] if the
    /// counter it decrements is already zero or the event lies in the past.
    pub fn apply(&mut self, event: Event) -> SimResult<()> {
        if event.time < self.time {
            return Err(self.violation("event scheduled in the past"));
        }
        self.time = event.time;
        match event.kind {
            EventKind::Repair => {
                self.broken = self
                    .broken
                    .checked_sub(1)
                    .ok_or_else(|| self.violation("repair with no broken gate"))?;
            }
            EventKind::Completion => {
                self.in_flight = self
                    .in_flight
                    .checked_sub(1)
                    .ok_or_else(|| self.violation("completion with nothing in flight"))?;
                self.completed += 1;
            }
        }
        Ok(())
    }

    /// Verify the conservation invariants against `config`.
    pub fn check(&self, config: &SimulationConfig) -> SimResult<()> {
        if self.broken > config.gate_count {
            return Err(self.violation("more broken gates than gates"));
        }
        if self.in_flight + self.broken > config.gate_count {
            return Err(self.violation("in-flight units exceed healthy gates"));
        }
        if self.completed > config.passenger_count {
            return Err(self.violation("completed more units than passengers"));
        }
        Ok(())
    }

    fn violation(&self, what: &'static str) -> SimError {
        SimError::Invariant { time: self.time, what }
    }
}
