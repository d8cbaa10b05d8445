//! Coherence plots for the Kuramoto experiments.

use std::path::Path;

use netdyn_core::errors::PlotError;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{padded_range, render_figure, DrawResult, Figure, PlotStyle};
use crate::kuramoto::CoherenceSeries;

struct CoherenceVsCoupling<'a> {
    couplings: &'a [f64],
    coherence: &'a [f64],
    critical_coupling: Option<f64>,
}

impl Figure for CoherenceVsCoupling<'_> {
    fn name(&self) -> &'static str {
        "coherence vs coupling"
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
        let k_min = self.couplings.iter().copied().fold(f64::INFINITY, f64::min);
        let k_max = self.couplings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut chart = ChartBuilder::on(root)
            .caption("Coherence vs Coupling Strength", ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(padded_range(k_min, k_max), 0.0..1.05)?;
        chart
            .configure_mesh()
            .x_desc("Coupling strength K")
            .y_desc("Coherence r")
            .draw()?;

        let points: Vec<(f64, f64)> = self
            .couplings
            .iter()
            .copied()
            .zip(self.coherence.iter().copied())
            .collect();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &BLUE))?
            .label("final coherence")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        chart.draw_series(points.iter().map(|&p| Circle::new(p, 3, BLUE.filled())))?;

        if let Some(kc) = self.critical_coupling {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(kc, 0.0), (kc, 1.0)],
                    RED.mix(0.7),
                )))?
                .label(format!("critical value K_c = {kc:.2}"))
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.7)));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        Ok(())
    }
}

struct CoherenceOverTime<'a> {
    title: &'a str,
    time: &'a [f64],
    series: &'a [CoherenceSeries],
}

impl Figure for CoherenceOverTime<'_> {
    fn name(&self) -> &'static str {
        "coherence over time"
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
        let t_max = self.time.last().copied().unwrap_or(0.0);
        let mut chart = ChartBuilder::on(root)
            .caption(self.title, ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..t_max.max(f64::EPSILON), 0.0..1.05)?;
        chart
            .configure_mesh()
            .x_desc("Time")
            .y_desc("Coherence r")
            .draw()?;

        for (i, series) in self.series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            let line = self.time.iter().copied().zip(series.values.iter().copied());
            chart
                .draw_series(LineSeries::new(line, &color))?
                .label(series.label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        Ok(())
    }
}

/// Final coherence against coupling strength, with an optional vertical
/// marker at the critical coupling.
pub fn plot_coherence_vs_coupling(
    couplings: &[f64],
    coherence: &[f64],
    critical_coupling: Option<f64>,
    path: &Path,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    let figure = CoherenceVsCoupling {
        couplings,
        coherence,
        critical_coupling,
    };
    if couplings.is_empty() || couplings.len() != coherence.len() {
        return Err(PlotError::NoData {
            plot: figure.name().to_string(),
        });
    }
    render_figure(&figure, path, style)
}

/// One line per series against the shared time axis.
pub fn plot_coherence_over_time(
    title: &str,
    time: &[f64],
    series: &[CoherenceSeries],
    path: &Path,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    let figure = CoherenceOverTime {
        title,
        time,
        series,
    };
    if time.is_empty() || series.is_empty() {
        return Err(PlotError::NoData {
            plot: figure.name().to_string(),
        });
    }
    render_figure(&figure, path, style)
}
