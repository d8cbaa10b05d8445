//! Dataset download and edge-list loading errors.

use super::error_code::{self, NetdynErrorCode};

/// Errors that abort a dataset load.
///
/// Malformed lines are never reported here; the loader skips and counts them.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Download of {url} failed: {message}")]
    Download { url: String, message: String },

    #[error("Download of {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

impl NetdynErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::LOAD_ERROR,
            Self::Download { .. } | Self::HttpStatus { .. } => error_code::DOWNLOAD_FAILED,
        }
    }
}
