//! Structural analysis errors.

use super::error_code::{self, NetdynErrorCode};

/// Errors that can occur while computing structural statistics of a graph.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Dense adjacency refused: {nodes} nodes exceeds the limit of {limit}")]
    DenseLimitExceeded { nodes: usize, limit: usize },

    #[error("Unknown adjacency mode: {0}")]
    UnknownAdjacencyMode(String),
}

impl NetdynErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        error_code::ANALYSIS_ERROR
    }
}
