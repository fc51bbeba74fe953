//! Error types for the evolutionary optimizer.

use thiserror::Error;

/// Caller errors around the optimizer state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizerError {
    /// Seeding while a population already exists; reset to idle first.
    #[error("Optimizer already holds a population; reset before seeding again")]
    AlreadyRunning,

    /// Stepping with no population.
    #[error("Optimizer has no population; seed it first")]
    NotSeeded,

    /// Stepping while paused; resume first.
    #[error("Optimizer is paused; resume before stepping")]
    Paused,

    /// Stepping or seeding after a stop without a reset.
    #[error("Optimizer is stopped; reset before seeding again")]
    Stopped,

    /// Hyperparameters rejected at seed time.
    #[error("Invalid evolution parameters: {0}")]
    InvalidParameters(String),
}

/// Result type alias for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimizerError>;
