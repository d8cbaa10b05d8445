//! Structured error codes shared by every netdyn error enum.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait NetdynErrorCode {
    /// Returns the error code string (e.g., "LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const DOWNLOAD_FAILED: &str = "DOWNLOAD_FAILED";
pub const ANALYSIS_ERROR: &str = "ANALYSIS_ERROR";
pub const FIT_ERROR: &str = "FIT_ERROR";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const SIMULATION_ERROR: &str = "SIMULATION_ERROR";
pub const PLOT_ERROR: &str = "PLOT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
