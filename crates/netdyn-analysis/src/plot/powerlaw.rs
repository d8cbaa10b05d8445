//! Empirical vs fitted power-law PDF overlay.

use std::path::Path;

use netdyn_core::errors::PlotError;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{log_range, render_figure, DrawResult, Figure, PlotStyle};

struct PowerLawPdf<'a> {
    empirical: &'a [(f64, f64)],
    fitted: &'a [(f64, f64)],
    alpha: f64,
}

impl Figure for PowerLawPdf<'_> {
    fn name(&self) -> &'static str {
        "power-law pdf"
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
        let all = || self.empirical.iter().chain(self.fitted.iter());
        let x_min = all().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let x_max = all().map(|p| p.0).fold(0.0, f64::max);
        let y_min = all().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let y_max = all().map(|p| p.1).fold(0.0, f64::max);

        let mut chart = ChartBuilder::on(root)
            .caption("Degree PDF and Power-Law Fit", ("sans-serif", 28))
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
            .y_desc("Probability Density")
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                self.empirical.iter().copied(),
                RED.stroke_width(2),
            ))?
            .label("empirical")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
        chart
            .draw_series(LineSeries::new(
                self.fitted.iter().copied(),
                GREEN.stroke_width(2),
            ))?
            .label(format!("power law, alpha = {:.3}", self.alpha))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        Ok(())
    }
}

/// Overlay of the log-binned empirical PDF and the fitted PDF on log-log axes.
pub fn plot_power_law_pdf(
    empirical: &[(f64, f64)],
    fitted: &[(f64, f64)],
    alpha: f64,
    path: &Path,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    let figure = PowerLawPdf {
        empirical,
        fitted,
        alpha,
    };
    if empirical.is_empty() && fitted.is_empty() {
        return Err(PlotError::NoData {
            plot: figure.name().to_string(),
        });
    }
    render_figure(&figure, path, style)
}
