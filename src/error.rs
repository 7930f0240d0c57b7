//! Error types for the simulation and its configuration

use thiserror::Error;

/// Errors raised at the edges of the simulation
///
/// The physics itself has no failure paths; these cover bad input handed to
/// `step` and bad configuration handed to the constructor.
#[derive(Debug, Error)]
pub enum SimError {
    /// Tick duration was negative, NaN or infinite
    #[error("invalid tick: dt must be finite and non-negative, got {0}")]
    InvalidTick(f32),

    /// Configuration values that cannot produce a sane simulation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
