//! Errors raised when a planner is configured with unusable parameters.

use thiserror::Error;

/// A rejected planner parameter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("step size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("goal sample rate must lie in [0, 1], got {0}")]
    GoalSampleRate(f64),

    #[error("goal tolerance must be finite and non-negative, got {0}")]
    GoalTolerance(f64),

    #[error("bounds must be finite with min < max, got x: [{min_x}, {max_x}], y: [{min_y}, {max_y}]")]
    Bounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    #[error("obstacle {index} has a negative size ({width} x {height})")]
    Obstacle {
        index: usize,
        width: f64,
        height: f64,
    },
}
