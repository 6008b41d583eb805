//! `gs-core` — foundational types for the `gatesim` gate-bank simulator.
//!
//! This crate is a dependency of every other `gs-*` crate.  It has no `gs-*`
//! dependencies and only a handful of external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`time`]     | `Tick`                                                     |
//! | [`config`]   | `SimulationConfig`, `ScheduleVariant`, `DurationModel`     |
//! | [`rng`]      | `VariateGenerator` (one per run)                           |
//! | [`error`]    | `ConfigError`, `ConfigResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DurationModel, ScheduleVariant, SimulationConfig};
pub use error::{ConfigError, ConfigResult};
pub use rng::VariateGenerator;
pub use time::Tick;
