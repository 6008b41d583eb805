//! `HeapQueue` — bounded binary min-heap of events.
//!
//! Needed whenever pending events are not guaranteed to fall due in the order
//! they were queued: jittered durations, or repairs and completions sharing
//! one stream.
//!
//! `std::collections::BinaryHeap` is a max-heap, so entries are wrapped in
//! `Reverse`.  The heap key is `(time, kind, seq)` where `seq` is a
//! per-queue insertion counter; no two entries ever compare equal, so the
//! pop order is fully determined by the push sequence.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gs_core::Tick;

use crate::{Event, EventKind, EventQueue, QueueError, QueueResult};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Entry {
    time: Tick,
    kind: EventKind,
    seq:  u64,
}

impl Entry {
    #[inline]
    fn event(self) -> Event {
        Event { time: self.time, kind: self.kind }
    }
}

/// Fixed-capacity min-heap keyed on `(time, kind, insertion order)`.
#[derive(Debug)]
pub struct HeapQueue {
    heap:     BinaryHeap<Reverse<Entry>>,
    capacity: usize,
    next_seq: u64,
}

impl HeapQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap:     BinaryHeap::with_capacity(capacity),
            capacity,
            next_seq: 0,
        }
    }
}

impl EventQueue for HeapQueue {
    fn push(&mut self, event: Event) -> QueueResult<()> {
        if self.heap.len() == self.capacity {
            return Err(QueueError::Full { capacity: self.capacity });
        }
        let entry = Entry { time: event.time, kind: event.kind, seq: self.next_seq };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
        Ok(())
    }

    fn pop(&mut self) -> QueueResult<Event> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.event())
            .ok_or(QueueError::Empty)
    }

    fn peek(&self) -> QueueResult<Event> {
        self.heap
            .peek()
            .map(|&Reverse(entry)| entry.event())
            .ok_or(QueueError::Empty)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
