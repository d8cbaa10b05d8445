//! Plot rendering errors.

use super::error_code::{self, NetdynErrorCode};

/// Errors that can occur while rendering a plot image.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("Rendering {path} failed: {message}")]
    Render { path: String, message: String },

    #[error("Nothing to plot for {plot}")]
    NoData { plot: String },

    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl NetdynErrorCode for PlotError {
    fn error_code(&self) -> &'static str {
        error_code::PLOT_ERROR
    }
}
