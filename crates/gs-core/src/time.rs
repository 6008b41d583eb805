//! Simulated time.
//!
//! Time is an integer count of abstract units (seconds, minutes, whatever the
//! caller's durations are expressed in).  Integer time keeps event ordering
//! exact: two events scheduled for the same instant compare equal instead of
//! differing in the last floating-point bit.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute point in simulated time.
///
/// Stored as `u64`; a run starts at [`Tick::ZERO`] and only moves forward.
/// All advancing goes through [`Tick::offset`], which refuses to wrap.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `n` units after `self`, or `None` if that lies past the end
    /// of representable time.
    #[inline]
    pub fn offset(self, n: u64) -> Option<Tick> {
        self.0.checked_add(n).map(Tick)
    }

    /// `self / denominator` as a float, or `None` when the denominator is
    /// zero.  Used for tail-latency ratios such as `t99 / t50`.
    #[inline]
    pub fn ratio(self, denominator: Tick) -> Option<f64> {
        if denominator.0 == 0 {
            None
        } else {
            Some(self.0 as f64 / denominator.0 as f64)
        }
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
