//! Simulation observer trait for tracing and test instrumentation.

use gs_core::SimulationConfig;
use gs_queue::Event;

use crate::SimulationState;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers see state read-only; they cannot
/// influence the run.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress { every: u64 }
///
/// impl SimObserver for Progress {
///     fn on_step_end(&mut self, step: u64, state: &SimulationState) {
///         if step % self.every == 0 {
///             println!("step {step}: {} cleared at {}", state.completed, state.time);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first step.
    fn on_run_start(&mut self, _config: &SimulationConfig) {}

    /// Called after each queued event is applied, with the resulting state.
    fn on_event(&mut self, _event: &Event, _state: &SimulationState) {}

    /// Called after every loop step.  `step` counts from 1.
    fn on_step_end(&mut self, _step: u64, _state: &SimulationState) {}

    /// Called once after the last passenger clears.
    fn on_run_end(&mut self, _state: &SimulationState) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Records every applied event and every end-of-step state.
///
/// Two runs are trace-identical when their `TraceObserver`s compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceObserver {
    pub events: Vec<Event>,
    pub states: Vec<SimulationState>,
}

impl SimObserver for TraceObserver {
    fn on_event(&mut self, event: &Event, _state: &SimulationState) {
        self.events.push(*event);
    }

    fn on_step_end(&mut self, _step: u64, state: &SimulationState) {
        self.states.push(*state);
    }
}
