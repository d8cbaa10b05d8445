//! Plot rendering on top of `plotters`.
//!
//! Every figure implements [`Figure`] once, generically over the drawing
//! backend; [`render_figure`] picks `SVGBackend` for `.svg` paths and
//! `BitMapBackend` for everything else.

pub mod coherence;
pub mod degree;
pub mod powerlaw;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use netdyn_core::config::PlotConfig;
use netdyn_core::errors::PlotError;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

pub use coherence::{plot_coherence_over_time, plot_coherence_vs_coupling};
pub use degree::{plot_degree_linear, plot_degree_log_log};
pub use powerlaw::plot_power_law_pdf;

pub(crate) type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Image size and output directory for a batch of plots.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::from_config(&PlotConfig::default())
    }
}

impl PlotStyle {
    pub fn from_config(config: &PlotConfig) -> Self {
        let (width, height) = config.effective_size();
        Self {
            width,
            height,
            output_dir: PathBuf::from(config.effective_output_dir()),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `file_name` resolved against the output directory.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// A figure that can draw itself onto any plotters backend.
pub(crate) trait Figure {
    /// Short name used in logs and `NoData` errors.
    fn name(&self) -> &'static str;

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB>;
}

/// Render `figure` to `path`, creating the parent directory if needed.
pub(crate) fn render_figure<F: Figure>(
    figure: &F,
    path: &Path,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    ensure_parent_dir(path)?;

    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(path, style.size()).into_drawing_area();
        draw_and_present(figure, &root, path)?;
    } else {
        let root = BitMapBackend::new(path, style.size()).into_drawing_area();
        draw_and_present(figure, &root, path)?;
    }

    info!(plot = figure.name(), path = %path.display(), "plot written");
    Ok(())
}

fn draw_and_present<F: Figure, DB: DrawingBackend>(
    figure: &F,
    root: &DrawingArea<DB, Shift>,
    path: &Path,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;
    figure.draw(root).map_err(|e| render_error(path, e))?;
    root.present().map_err(|e| render_error(path, e))
}

pub(crate) fn render_error(path: &Path, err: impl Display) -> PlotError {
    PlotError::Render {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), PlotError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| PlotError::OutputDir {
                path: parent.display().to_string(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Axis range `[lo, hi]` padded so it is never empty.
pub(crate) fn padded_range(lo: f64, hi: f64) -> std::ops::Range<f64> {
    if hi > lo {
        let pad = (hi - lo) * 0.05;
        (lo - pad)..(hi + pad)
    } else {
        (lo - 0.5)..(hi + 0.5)
    }
}

/// Positive log-axis range covering `[lo, hi]`.
pub(crate) fn log_range(lo: f64, hi: f64) -> std::ops::Range<f64> {
    let lo = if lo > 0.0 { lo } else { f64::MIN_POSITIVE };
    if hi > lo {
        (lo / 1.5)..(hi * 1.5)
    } else {
        (lo / 10.0)..(lo * 10.0)
    }
}
