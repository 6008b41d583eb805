//! `RingQueue` — bounded FIFO for streams that arrive already time-ordered.
//!
//! # When this is valid
//!
//! A FIFO is a min-queue only if events are pushed in non-decreasing time
//! order.  That holds for the tick scheduler with a fixed repair time: every
//! repair is queued at `now + repair_time` and `now` never goes backwards.
//! Jittered repair times break the property, so the scheduler switches to
//! [`HeapQueue`][crate::HeapQueue] for them.
//!
//! The precondition is checked on every push (one comparison against the
//! tail) and reported as [`QueueError::OutOfOrder`].

use std::collections::VecDeque;

use crate::{Event, EventQueue, QueueError, QueueResult};

/// Fixed-capacity ring buffer of events in insertion order.
#[derive(Debug)]
pub struct RingQueue {
    events:   VecDeque<Event>,
    capacity: usize,
}

impl RingQueue {
    /// Allocate storage for exactly `capacity` pending events up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
}

impl EventQueue for RingQueue {
    fn push(&mut self, event: Event) -> QueueResult<()> {
        if self.events.len() == self.capacity {
            return Err(QueueError::Full { capacity: self.capacity });
        }
        if let Some(tail) = self.events.back() {
            if event.time < tail.time {
                return Err(QueueError::OutOfOrder { last: tail.time, got: event.time });
            }
        }
        self.events.push_back(event);
        Ok(())
    }

    fn pop(&mut self) -> QueueResult<Event> {
        self.events.pop_front().ok_or(QueueError::Empty)
    }

    fn peek(&self) -> QueueResult<Event> {
        self.events.front().copied().ok_or(QueueError::Empty)
    }

    fn len(&self) -> usize {
        self.events.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
