//! Network statistics pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMMENT_PREFIX, DEFAULT_DATASET_PATH, DEFAULT_DATASET_URL, DEFAULT_DEGREE_PLOT_FILE,
    DEFAULT_MAX_DENSE_NODES, DEFAULT_SEPARATOR,
};

/// Configuration for the dataset loader, structural analyzer, and fitters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NetworkConfig {
    /// Run the network pipeline. Default: true.
    pub enabled: Option<bool>,
    /// Remote edge-list URL. Default: SNAP amazon0302.
    pub dataset_url: Option<String>,
    /// Local dataset path; the download is skipped when it exists.
    pub dataset_path: Option<String>,
    /// Column separator. Default: tab.
    pub separator: Option<String>,
    /// Comment line prefix. Default: `#`.
    pub comment_prefix: Option<String>,
    /// Header name of the source column. Both names must be set to enable header parsing.
    pub source_column: Option<String>,
    /// Header name of the target column.
    pub target_column: Option<String>,
    /// `sparse` or `dense`. Default: sparse.
    pub adjacency_mode: Option<String>,
    /// Dense adjacency is refused above this node count. Default: 20000.
    pub max_dense_nodes: Option<usize>,
    /// Also render the log-log degree distribution. Default: true.
    pub log_scale: Option<bool>,
    /// Degree distribution image file name. Default: `amazon_degree_log.png`.
    pub degree_plot_file: Option<String>,
    /// Fixed power-law x_min; scanned for the best KS distance when unset.
    pub powerlaw_xmin: Option<u64>,
}

impl NetworkConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_dataset_url(&self) -> &str {
        self.dataset_url.as_deref().unwrap_or(DEFAULT_DATASET_URL)
    }

    pub fn effective_dataset_path(&self) -> &str {
        self.dataset_path.as_deref().unwrap_or(DEFAULT_DATASET_PATH)
    }

    pub fn effective_separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    pub fn effective_comment_prefix(&self) -> &str {
        self.comment_prefix.as_deref().unwrap_or(DEFAULT_COMMENT_PREFIX)
    }

    /// Header column names, when both are configured.
    pub fn columns(&self) -> Option<(String, String)> {
        match (&self.source_column, &self.target_column) {
            (Some(from), Some(to)) => Some((from.clone(), to.clone())),
            _ => None,
        }
    }

    pub fn effective_adjacency_mode(&self) -> &str {
        self.adjacency_mode.as_deref().unwrap_or("sparse")
    }

    pub fn effective_max_dense_nodes(&self) -> usize {
        self.max_dense_nodes.unwrap_or(DEFAULT_MAX_DENSE_NODES)
    }

    pub fn effective_log_scale(&self) -> bool {
        self.log_scale.unwrap_or(true)
    }

    pub fn effective_degree_plot_file(&self) -> &str {
        self.degree_plot_file
            .as_deref()
            .unwrap_or(DEFAULT_DEGREE_PLOT_FILE)
    }

    /// Overlay `other` onto `self`, field by field, where `other` is set.
    pub(crate) fn merge_from(&mut self, other: &NetworkConfig) {
        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
        if other.dataset_url.is_some() {
            self.dataset_url = other.dataset_url.clone();
        }
        if other.dataset_path.is_some() {
            self.dataset_path = other.dataset_path.clone();
        }
        if other.separator.is_some() {
            self.separator = other.separator.clone();
        }
        if other.comment_prefix.is_some() {
            self.comment_prefix = other.comment_prefix.clone();
        }
        if other.source_column.is_some() {
            self.source_column = other.source_column.clone();
        }
        if other.target_column.is_some() {
            self.target_column = other.target_column.clone();
        }
        if other.adjacency_mode.is_some() {
            self.adjacency_mode = other.adjacency_mode.clone();
        }
        if other.max_dense_nodes.is_some() {
            self.max_dense_nodes = other.max_dense_nodes;
        }
        if other.log_scale.is_some() {
            self.log_scale = other.log_scale;
        }
        if other.degree_plot_file.is_some() {
            self.degree_plot_file = other.degree_plot_file.clone();
        }
        if other.powerlaw_xmin.is_some() {
            self.powerlaw_xmin = other.powerlaw_xmin;
        }
    }
}
