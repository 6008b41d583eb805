//! First-crossing time recorders.
//!
//! After every state change the loop reports `(completed, total, time)` to a
//! [`PercentileSampler`].  A sampler records, per threshold, the first time
//! completion reached or passed it.  Slots are written at most once: a later
//! observation never overwrites an earlier one, even when it also satisfies
//! the threshold.
//!
//! Two recorders are provided:
//!
//! | Type               | Slots                            | Use                      |
//! |--------------------|----------------------------------|--------------------------|
//! | [`DenseRecord`]    | one per integer percent 0..=100  | full completion curve    |
//! | [`SparseRecord`]   | a few targets, default 50/95/99  | headline latency figures |

use gs_core::{ConfigError, ConfigResult, Tick};

/// Default targets for [`SparseRecord::standard`].
pub const STANDARD_TARGETS: [u8; 3] = [50, 95, 99];

/// Percentage used as the denominator of tail ratios.
pub const MEDIAN: u8 = 50;

/// `floor(100 × completed / total)`, clamped to 100.
///
/// Computed in `u128` so very large volumes cannot overflow.
#[inline]
pub fn percent_floor(completed: u64, total: u64) -> usize {
    if total == 0 {
        return 100;
    }
    let pct = (completed as u128 * 100) / total as u128;
    pct.min(100) as usize
}

/// `true` once `completed / total ≥ percent / 100`, without rounding.
#[inline]
fn reached(completed: u64, total: u64, percent: u8) -> bool {
    completed as u128 * 100 >= percent as u128 * total as u128
}

// ── PercentileSampler ─────────────────────────────────────────────────────────

/// Receives completion progress and keeps first-crossing times.
pub trait PercentileSampler {
    /// Record progress `completed / total` at `time`.
    ///
    /// Callers report times in non-decreasing order.
    fn observe(&mut self, completed: u64, total: u64, time: Tick);

    /// First time completion reached `percent`, if it has and the sampler
    /// tracks that percentage.
    fn time_to(&self, percent: u8) -> Option<Tick>;

    /// `time_to(percent) / time_to(50)` — how much longer the tail takes than
    /// the median.  `None` if either is unrecorded or the median time is zero.
    fn tail_ratio(&self, percent: u8) -> Option<f64> {
        self.time_to(percent)?.ratio(self.time_to(MEDIAN)?)
    }
}

// ── DenseRecord ───────────────────────────────────────────────────────────────

/// What a [`DenseRecord`] does with buckets an update jumps over.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum BucketFill {
    /// Every bucket up to the current one that is still unset receives the
    /// current time.  A batch step from 40 % to 60 % really did reach 41–59 %
    /// at that time, so this is exact rather than interpolated.
    #[default]
    Backfill,
    /// Only the bucket the update lands in is written; skipped buckets stay
    /// unset for the rest of the run.
    Exact,
}

/// One slot per integer percent, 0 through 100.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseRecord {
    slots: [Option<Tick>; 101],
    fill:  BucketFill,
    /// Under `Backfill` the set slots always form a prefix; this is its length.
    filled: usize,
}

impl Default for DenseRecord {
    fn default() -> Self {
        Self::new(BucketFill::default())
    }
}

impl DenseRecord {
    pub fn new(fill: BucketFill) -> Self {
        Self {
            slots:  [None; 101],
            fill,
            filled: 0,
        }
    }

    /// All 101 slots, indexed by percent.
    pub fn slots(&self) -> &[Option<Tick>; 101] {
        &self.slots
    }

    pub fn fill(&self) -> BucketFill {
        self.fill
    }
}

impl PercentileSampler for DenseRecord {
    fn observe(&mut self, completed: u64, total: u64, time: Tick) {
        let bucket = percent_floor(completed, total);
        match self.fill {
            BucketFill::Exact => {
                let slot = &mut self.slots[bucket];
                if slot.is_none() {
                    *slot = Some(time);
                }
            }
            BucketFill::Backfill => {
                if bucket >= self.filled {
                    self.slots[self.filled..=bucket].fill(Some(time));
                    self.filled = bucket + 1;
                }
            }
        }
    }

    fn time_to(&self, percent: u8) -> Option<Tick> {
        self.slots.get(percent as usize).copied().flatten()
    }
}

// ── SparseRecord ──────────────────────────────────────────────────────────────

/// `t95 / t50` and `t99 / t50` — the tail-latency blow-up relative to the
/// median.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct TailRatios {
    pub p95: Option<f64>,
    pub p99: Option<f64>,
}

/// A short list of target percentages, each with its first-crossing time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseRecord {
    /// Sorted ascending, no duplicates.
    targets: Vec<(u8, Option<Tick>)>,
}

impl SparseRecord {
    /// Track `targets` (any order, duplicates ignored).
    pub fn new(targets: &[u8]) -> ConfigResult<Self> {
        if targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        if let Some(&bad) = targets.iter().find(|&&t| t > 100) {
            return Err(ConfigError::PercentileTarget(bad));
        }
        let mut sorted = targets.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        Ok(Self {
            targets: sorted.into_iter().map(|t| (t, None)).collect(),
        })
    }

    /// The 50 / 95 / 99 record.
    pub fn standard() -> Self {
        Self {
            targets: STANDARD_TARGETS.iter().map(|&t| (t, None)).collect(),
        }
    }

    /// `(target, first-crossing time)` pairs in ascending target order.
    pub fn entries(&self) -> &[(u8, Option<Tick>)] {
        &self.targets
    }

    /// `true` once every target has been recorded.
    pub fn is_complete(&self) -> bool {
        self.targets.iter().all(|(_, t)| t.is_some())
    }

    pub fn tail_ratios(&self) -> TailRatios {
        TailRatios {
            p95: self.tail_ratio(95),
            p99: self.tail_ratio(99),
        }
    }
}

impl Default for SparseRecord {
    fn default() -> Self {
        Self::standard()
    }
}

impl PercentileSampler for SparseRecord {
    fn observe(&mut self, completed: u64, total: u64, time: Tick) {
        for (target, slot) in &mut self.targets {
            if slot.is_none() && reached(completed, total, *target) {
                *slot = Some(time);
            }
        }
    }

    fn time_to(&self, percent: u8) -> Option<Tick> {
        self.targets
            .iter()
            .find(|(t, _)| *t == percent)
            .and_then(|(_, time)| *time)
    }
}
