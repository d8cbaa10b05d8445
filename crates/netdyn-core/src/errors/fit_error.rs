//! Distribution fitting errors.

use super::error_code::{self, NetdynErrorCode};

/// Errors raised by the Poisson and power-law goodness-of-fit tests.
#[derive(Debug, thiserror::Error)]
pub enum FitError {
    #[error("Degree sequence is degenerate: {reason}")]
    DegenerateDegrees { reason: String },

    #[error("Invalid fit parameter {parameter}: {message}")]
    InvalidParameter { parameter: String, message: String },

    #[error("Distribution construction failed: {0}")]
    Distribution(String),
}

impl NetdynErrorCode for FitError {
    fn error_code(&self) -> &'static str {
        error_code::FIT_ERROR
    }
}
