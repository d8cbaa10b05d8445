//! Plot rendering configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH};

/// Image size and output location for every rendered plot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlotConfig {
    /// Render plot images at all. Default: true.
    pub enabled: Option<bool>,
    /// Image width in pixels. Default: 1200.
    pub width: Option<u32>,
    /// Image height in pixels. Default: 800.
    pub height: Option<u32>,
    /// Directory plots and reports are written to. Default: `plots`.
    pub output_dir: Option<String>,
}

impl PlotConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_size(&self) -> (u32, u32) {
        (
            self.width.unwrap_or(DEFAULT_PLOT_WIDTH),
            self.height.unwrap_or(DEFAULT_PLOT_HEIGHT),
        )
    }

    pub fn effective_output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    pub(crate) fn merge_from(&mut self, other: &PlotConfig) {
        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir.clone();
        }
    }
}
