//! The `EventQueue` trait implemented by both backends.

use gs_core::Tick;

use crate::{Event, QueueError, QueueResult};

/// Bounded min-time queue of pending events.
///
/// Capacity is fixed at construction.  A push beyond it fails with
/// [`QueueError::Full`] instead of growing or dropping: in a correctly sized
/// run the number of pending events is bounded by the gate count, so overflow
/// means the model's invariants were broken.
pub trait EventQueue {
    /// Insert `event`.
    fn push(&mut self, event: Event) -> QueueResult<()>;

    /// Remove and return the earliest event.
    fn pop(&mut self) -> QueueResult<Event>;

    /// Return the earliest event without removing it.
    fn peek(&self) -> QueueResult<Event>;

    /// Number of pending events.
    fn len(&self) -> usize;

    /// Maximum number of simultaneously pending events.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pop the earliest event only if it is due at or before `now`.
    ///
    /// Returns `Ok(None)` when the queue is empty or the head lies in the
    /// future.
    fn pop_due(&mut self, now: Tick) -> QueueResult<Option<Event>> {
        match self.peek() {
            Ok(head) if head.time <= now => self.pop().map(Some),
            Ok(_) | Err(QueueError::Empty) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
