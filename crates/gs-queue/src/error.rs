use gs_core::Tick;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("event queue full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("event queue empty")]
    Empty,

    #[error("event at {got} pushed after {last} into an insertion-ordered queue")]
    OutOfOrder { last: Tick, got: Tick },
}

pub type QueueResult<T> = Result<T, QueueError>;
