//! Configuration errors.
//!
//! Everything here is detected by [`SimulationConfig::validate`] before a run
//! starts; a config that passes validation never produces one mid-run.
//!
//! [`SimulationConfig::validate`]: crate::SimulationConfig::validate

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("passenger_count must be positive")]
    NoPassengers,

    #[error("gate_count must be positive")]
    NoGates,

    #[error("mean_processing_time must be positive")]
    ZeroProcessingTime,

    #[error("break_chance {0} is outside [0, 1]")]
    BreakChance(f64),

    #[error("percentile target {0} is outside [0, 100]")]
    PercentileTarget(u8),

    #[error("at least one percentile target is required")]
    NoTargets,
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
