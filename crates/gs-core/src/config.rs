//! Run configuration.

use crate::{ConfigError, ConfigResult};

// ── DurationModel ─────────────────────────────────────────────────────────────

/// How a nominal duration is turned into an actual one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DurationModel {
    /// Every draw returns the mean unchanged.
    #[default]
    Fixed,
    /// Gaussian around the mean with σ = mean / 4, negative draws clamped
    /// to zero.  See [`VariateGenerator::jittered`][crate::VariateGenerator::jittered].
    Jittered,
}

// ── ScheduleVariant ───────────────────────────────────────────────────────────

/// Which scheduling strategy drives the run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScheduleVariant {
    /// Lock-step batches: every healthy gate finishes one unit per tick of
    /// `mean_processing_time`.
    #[default]
    Tick,
    /// Asynchronous gates: time jumps straight to the next repair or
    /// completion event.
    EventDriven,
}

// ── SimulationConfig ──────────────────────────────────────────────────────────

/// Everything a single run needs, seed included.
///
/// Immutable for the duration of a run.  Two runs with equal configs produce
/// identical event traces and percentile records.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Total units (passengers) that must clear the gates.
    pub passenger_count: u64,

    /// Number of parallel gates.
    pub gate_count: u32,

    /// Probability that a healthy gate breaks at each opportunity: once per
    /// tick in the tick variant, once per unit started in the event-driven
    /// variant.
    pub break_chance: f64,

    /// Mean (or constant, with [`DurationModel::Fixed`]) repair duration.
    pub mean_repair_time: u64,

    /// Mean (or constant) processing time per unit.  Also the tick length
    /// of [`ScheduleVariant::Tick`].
    pub mean_processing_time: u64,

    pub repair_model: DurationModel,

    /// Only the event-driven variant samples processing durations; the tick
    /// variant always advances by exactly `mean_processing_time`.
    pub processing_model: DurationModel,

    pub variant: ScheduleVariant,

    /// Master RNG seed.
    pub seed: u64,

    /// Abort with a "did not converge" error after this many loop steps.
    /// `None` runs until every passenger has cleared.
    pub max_steps: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            passenger_count:      100_000,
            gate_count:           10,
            break_chance:         0.05,
            mean_repair_time:     120,
            mean_processing_time: 15,
            repair_model:         DurationModel::Fixed,
            processing_model:     DurationModel::Fixed,
            variant:              ScheduleVariant::Tick,
            seed:                 100,
            max_steps:            None,
        }
    }
}

impl SimulationConfig {
    /// Copy of `self` with a different seed — the unit of Monte Carlo fan-out.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self { seed, ..self.clone() }
    }

    /// Reject configurations the loop cannot run.
    ///
    /// Called by the simulation builder before any state is created.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.passenger_count == 0 {
            return Err(ConfigError::NoPassengers);
        }
        if self.gate_count == 0 {
            return Err(ConfigError::NoGates);
        }
        if self.mean_processing_time == 0 {
            return Err(ConfigError::ZeroProcessingTime);
        }
        // Written as a range check so NaN is rejected too.
        if !(0.0..=1.0).contains(&self.break_chance) {
            return Err(ConfigError::BreakChance(self.break_chance));
        }
        Ok(())
    }

    /// Upper bound on simultaneously pending events for `self.variant`.
    ///
    /// Tick variant: one repair per gate.  Event-driven variant: one repair
    /// per broken gate plus one completion per busy gate, bounded by
    /// `2 × gate_count`.
    pub fn queue_capacity(&self) -> usize {
        let gates = self.gate_count as usize;
        match self.variant {
            ScheduleVariant::Tick        => gates,
            ScheduleVariant::EventDriven => 2 * gates,
        }
    }
}
