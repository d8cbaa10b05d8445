//! Degree distribution scatter plots.

use std::path::Path;

use netdyn_core::errors::PlotError;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{log_range, padded_range, render_figure, DrawResult, Figure, PlotStyle};

struct DegreeScatter<'a> {
    points: &'a [(f64, f64)],
    log_log: bool,
}

impl Figure for DegreeScatter<'_> {
    fn name(&self) -> &'static str {
        if self.log_log {
            "degree distribution (log-log)"
        } else {
            "degree distribution"
        }
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
        let x_max = self.points.iter().map(|p| p.0).fold(0.0, f64::max);
        let y_max = self.points.iter().map(|p| p.1).fold(0.0, f64::max);

        if self.log_log {
            let x_min = self.points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
            let y_min = self.points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
            let mut chart = ChartBuilder::on(root)
                .caption("Degree Distribution (Log-Log Scale)", ("sans-serif", 28))
                .margin(15)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d(
                    log_range(x_min, x_max).log_scale(),
                    log_range(y_min, y_max).log_scale(),
                )?;
            chart
                .configure_mesh()
                .x_desc("Degree")
                .y_desc("Probability")
                .draw()?;
            chart.draw_series(
                self.points
                    .iter()
                    .map(|&(x, y)| Cross::new((x, y), 4, RED.stroke_width(1))),
            )?;
        } else {
            let mut chart = ChartBuilder::on(root)
                .caption("Degree Distribution", ("sans-serif", 28))
                .margin(15)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d(padded_range(0.0, x_max), padded_range(0.0, y_max))?;
            chart
                .configure_mesh()
                .x_desc("Degree")
                .y_desc("Probability")
                .draw()?;
            chart.draw_series(
                self.points
                    .iter()
                    .map(|&(x, y)| Cross::new((x, y), 4, BLUE.stroke_width(1))),
            )?;
        }
        Ok(())
    }
}

/// Linear-axis scatter of (degree, probability).
pub fn plot_degree_linear(
    points: &[(f64, f64)],
    path: &Path,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    render_degree(points, false, path, style)
}

/// Log-log scatter of (degree, probability). Points must be strictly positive.
pub fn plot_degree_log_log(
    points: &[(f64, f64)],
    path: &Path,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    render_degree(points, true, path, style)
}

fn render_degree(
    points: &[(f64, f64)],
    log_log: bool,
    path: &Path,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    let figure = DegreeScatter { points, log_log };
    if points.is_empty() {
        return Err(PlotError::NoData {
            plot: figure.name().to_string(),
        });
    }
    render_figure(&figure, path, style)
}
