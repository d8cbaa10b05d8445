//! Edge list types and loader formatting parameters.

use netdyn_core::config::NetworkConfig;
use netdyn_core::constants::{DEFAULT_COMMENT_PREFIX, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Node identifier as it appears in the source file. Not validated for sign
/// or contiguity.
pub type NodeId = i64;

/// A directed (source, target) pair.
pub type Edge = (NodeId, NodeId);

/// Parsed edge list plus data-quality counters.
///
/// Duplicates and self-loops are kept as they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
    /// Lines starting with the comment prefix.
    pub comment_lines: usize,
    /// Non-blank lines that did not parse as two integers.
    pub skipped_lines: usize,
}

impl EdgeList {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// How to split an edge-list file into columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListFormat {
    pub separator: String,
    pub comment_prefix: String,
    /// Header names of the (source, target) columns. When set, the first
    /// non-comment line is consumed as a header.
    pub columns: Option<(String, String)>,
}

impl Default for EdgeListFormat {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            columns: None,
        }
    }
}

impl EdgeListFormat {
    pub fn from_config(config: &NetworkConfig) -> Self {
        Self {
            separator: config.effective_separator().to_string(),
            comment_prefix: config.effective_comment_prefix().to_string(),
            columns: config.columns(),
        }
    }

    /// Comma-separated with `#` comments.
    pub fn csv() -> Self {
        Self {
            separator: ",".to_string(),
            ..Self::default()
        }
    }
}
