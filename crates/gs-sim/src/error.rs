use gs_core::{ConfigError, Tick};
use gs_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("event queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("event queue capacity {got} is below the {needed} events this run can have pending")]
    QueueUndersized {
        needed: usize,
        got:    usize,
    },

    #[error("state invariant violated at {time}: {what}")]
    Invariant {
        time: Tick,
        what: &'static str,
    },

    #[error("simulated time overflowed advancing {by} units from {time}")]
    TimeOverflow {
        time: Tick,
        by:   u64,
    },

    #[error("run did not converge after {steps} steps: {completed}/{total} cleared by {time}")]
    DidNotConverge {
        steps:     u64,
        completed: u64,
        total:     u64,
        time:      Tick,
    },
}

pub type SimResult<T> = Result<T, SimError>;
