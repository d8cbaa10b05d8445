//! Error handling for netdyn.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod fit_error;
pub mod load_error;
pub mod pipeline_error;
pub mod plot_error;
pub mod simulation_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::NetdynErrorCode;
pub use fit_error::FitError;
pub use load_error::LoadError;
pub use pipeline_error::PipelineError;
pub use plot_error::PlotError;
pub use simulation_error::SimulationError;
