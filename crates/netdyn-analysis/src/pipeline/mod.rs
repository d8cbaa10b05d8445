//! End-to-end drivers for the two pipelines and their JSON reports.

pub mod kuramoto;
pub mod network;

use std::path::Path;

use netdyn_core::errors::PipelineError;
use serde::Serialize;
use tracing::info;

pub use kuramoto::{run_kuramoto_experiments, run_kuramoto_pipeline, KuramotoReport, SeriesSummary};
pub use network::{analyze_network, run_network_pipeline, NetworkReport};

/// Report file written by the network pipeline.
pub const NETWORK_REPORT_FILE: &str = "network_report.json";

/// Report file written by the Kuramoto pipeline.
pub const KURAMOTO_REPORT_FILE: &str = "kuramoto_report.json";

/// Serialize `report` as pretty JSON to `path`, creating parent directories.
pub fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<(), PipelineError> {
    let report_error = |message: String| PipelineError::Report {
        path: path.display().to_string(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| report_error(e.to_string()))?;
    }
    let json = serde_json::to_string_pretty(report).map_err(|e| report_error(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| report_error(e.to_string()))?;

    info!(path = %path.display(), "report written");
    Ok(())
}
