//! Degree distribution as a probability mass function, and its plots.

use std::path::{Path, PathBuf};

use netdyn_core::constants::DEFAULT_DEGREE_PLOT_FILE;
use netdyn_core::errors::PlotError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::graph::Network;
use crate::plot::{plot_degree_linear, plot_degree_log_log, PlotStyle};

/// One bin of the degree histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreePoint {
    pub degree: u64,
    pub count: usize,
    pub probability: f64,
}

/// Probability mass over every degree value from 0 to the maximum degree,
/// empty bins included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeDistribution {
    pub points: Vec<DegreePoint>,
    pub node_count: usize,
}

impl DegreeDistribution {
    pub fn from_network(network: &Network) -> Self {
        Self::from_histogram(&network.degree_histogram())
    }

    /// Build from a histogram indexed by degree.
    pub fn from_histogram(histogram: &[usize]) -> Self {
        let total: usize = histogram.iter().sum();
        let points = histogram
            .iter()
            .enumerate()
            .map(|(degree, &count)| DegreePoint {
                degree: degree as u64,
                count,
                probability: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                },
            })
            .collect();
        Self {
            points,
            node_count: total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    pub fn max_degree(&self) -> Option<u64> {
        self.points.last().map(|p| p.degree)
    }

    pub fn mean_degree(&self) -> Option<f64> {
        if self.node_count == 0 {
            return None;
        }
        let sum: f64 = self
            .points
            .iter()
            .map(|p| p.degree as f64 * p.count as f64)
            .sum();
        Some(sum / self.node_count as f64)
    }

    /// (degree, probability) for every bin.
    pub fn linear_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.degree as f64, p.probability))
            .collect()
    }

    /// Points that can be drawn on log-log axes: zero degree and zero
    /// probability bins dropped.
    pub fn log_log_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.degree > 0 && p.probability > 0.0)
            .map(|p| (p.degree as f64, p.probability))
            .collect()
    }
}

/// (linear, log-log) output paths for a degree plot target: the linear plot
/// goes to `<stem>_normal.<ext>`, the log-log plot to `path` itself.
pub fn degree_plot_paths(path: &Path) -> (PathBuf, PathBuf) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}_normal.{}", ext.to_string_lossy()),
        None => format!("{stem}_normal"),
    };
    (path.with_file_name(file_name), path.to_path_buf())
}

/// Render the degree distribution of `network`.
///
/// The linear plot is always written; the log-log plot only when `log_scale`
/// is set. Without `save_path` the default file name under the style's output
/// directory is used. Returns the files written.
pub fn plot_degree_distribution(
    network: &Network,
    log_scale: bool,
    save_path: Option<&Path>,
    style: &PlotStyle,
) -> Result<Vec<PathBuf>, PlotError> {
    let distribution = DegreeDistribution::from_network(network);
    if distribution.is_empty() {
        return Err(PlotError::NoData {
            plot: "degree distribution".to_string(),
        });
    }

    let target = match save_path {
        Some(path) => path.to_path_buf(),
        None => style.output_path(DEFAULT_DEGREE_PLOT_FILE),
    };
    let (linear_path, log_path) = degree_plot_paths(&target);
    debug!(
        max_degree = distribution.max_degree(),
        nodes = distribution.node_count,
        "plotting degree distribution"
    );

    let mut written = Vec::with_capacity(2);
    plot_degree_linear(&distribution.linear_points(), &linear_path, style)?;
    written.push(linear_path);

    if log_scale {
        plot_degree_log_log(&distribution.log_log_points(), &log_path, style)?;
        written.push(log_path);
    }
    Ok(written)
}
