//! Timestamped simulation events.

use std::fmt;

use gs_core::Tick;

/// What happens when an event falls due.
///
/// The derived `Ord` is the tie-break order at equal times: a gate repaired
/// at `t` is back in service before units finishing at `t` are counted.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A broken gate returns to service.
    Repair,
    /// A gate finishes processing one unit.
    Completion,
}

/// Something that will happen at a specific simulated time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub time: Tick,
    pub kind: EventKind,
}

impl Event {
    #[inline]
    pub fn repair(time: Tick) -> Self {
        Self { time, kind: EventKind::Repair }
    }

    #[inline]
    pub fn completion(time: Tick) -> Self {
        Self { time, kind: EventKind::Completion }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.kind, self.time)
    }
}
