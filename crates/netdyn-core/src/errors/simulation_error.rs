//! Kuramoto simulation errors.

use super::error_code::{self, NetdynErrorCode};

/// Errors that can occur while initializing or integrating an oscillator ensemble.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid argument {parameter}: {message}")]
    InvalidArgument { parameter: String, message: String },

    #[error("Frequency and phase arrays differ in length: {frequencies} vs {phases}")]
    LengthMismatch { frequencies: usize, phases: usize },

    #[error("Invalid time grid: {message}")]
    InvalidTimeGrid { message: String },
}

impl NetdynErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::LengthMismatch { .. } | Self::InvalidTimeGrid { .. } => {
                error_code::SIMULATION_ERROR
            }
        }
    }
}
