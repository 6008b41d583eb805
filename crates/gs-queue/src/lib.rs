//! `gs-queue` — pending-event storage for the gatesim loop.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`event`]  | `Event`, `EventKind`                                       |
//! | [`queue`]  | `EventQueue` trait                                         |
//! | [`ring`]   | `RingQueue` — bounded FIFO for pre-sorted event streams    |
//! | [`heap`]   | `HeapQueue` — bounded binary min-heap                      |
//! | [`error`]  | `QueueError`, `QueueResult<T>`                             |
//!
//! # Ordering
//!
//! Both backends pop the event with the smallest `time`.  Ties resolve
//! repairs before completions, then in insertion order:
//!
//! ```text
//! key = (time, kind /* Repair < Completion */, insertion sequence)
//! ```
//!
//! `RingQueue` gets this for free because it only accepts events pushed in
//! non-decreasing time order and is FIFO; `HeapQueue` encodes the key
//! explicitly.

pub mod error;
pub mod event;
pub mod heap;
pub mod queue;
pub mod ring;


pub use error::{QueueError, QueueResult};
pub use event::{Event, EventKind};
pub use heap::HeapQueue;
pub use queue::EventQueue;
pub use ring::RingQueue;
