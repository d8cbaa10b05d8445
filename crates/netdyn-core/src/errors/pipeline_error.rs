//! Pipeline errors.

use super::error_code::{self, NetdynErrorCode};
use super::{AnalysisError, ConfigError, FitError, LoadError, PlotError, SimulationError};

/// Errors that can occur while running an end-to-end pipeline.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Fit error: {0}")]
    Fit(#[from] FitError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Writing report {path} failed: {message}")]
    Report { path: String, message: String },
}

impl NetdynErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Analysis(e) => e.error_code(),
            Self::Fit(e) => e.error_code(),
            Self::Simulation(e) => e.error_code(),
            Self::Plot(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Report { .. } => error_code::REPORT_ERROR,
        }
    }
}
