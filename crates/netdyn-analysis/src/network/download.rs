//! Dataset download. Blocking HTTP GET, body streamed to disk, no retry.
//!
//! The body lands in `<file>.part` and is renamed into place only after the
//! whole response has been written, so an interrupted download never leaves
//! a file that `ensure_dataset` would mistake for a finished one.

use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use netdyn_core::errors::LoadError;
use tracing::{debug, info, warn};

/// What `ensure_dataset` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetStatus {
    /// The file already existed; nothing was fetched.
    AlreadyPresent,
    /// The file was fetched; carries the number of bytes written.
    Downloaded(u64),
}

/// Download `url` to `path` unless `path` already exists. A leftover
/// `<path>.part` does not count as present.
pub fn ensure_dataset(url: &str, path: &Path) -> Result<DatasetStatus, LoadError> {
    if path.is_file() {
        debug!(path = %path.display(), "dataset already present, skipping download");
        return Ok(DatasetStatus::AlreadyPresent);
    }
    download_data(url, path).map(DatasetStatus::Downloaded)
}

/// Where an in-flight download of `path` is written.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("download"));
    name.push(".part");
    path.with_file_name(name)
}

/// Fetch `url` and stream the response body to `path`, creating parent
/// directories as needed. Non-2xx responses are errors and leave `path`
/// untouched.
pub fn download_data(url: &str, path: &Path) -> Result<u64, LoadError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| LoadError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let partial = partial_path(path);
    let result = fetch_to(url, &partial).and_then(|bytes| {
        std::fs::rename(&partial, path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(bytes)
    });

    match result {
        Ok(bytes) => {
            info!(path = %path.display(), bytes, "file downloaded");
            Ok(bytes)
        }
        Err(e) => {
            if partial.exists() {
                if let Err(cleanup) = std::fs::remove_file(&partial) {
                    warn!(path = %partial.display(), error = %cleanup, "could not remove partial download");
                }
            }
            Err(e)
        }
    }
}

fn fetch_to(url: &str, partial: &Path) -> Result<u64, LoadError> {
    info!(url, "downloading dataset");
    let mut response = reqwest::blocking::get(url).map_err(|e| LoadError::Download {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let io_error = |source| LoadError::Io {
        path: partial.display().to_string(),
        source,
    };
    let file = File::create(partial).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let bytes = response.copy_to(&mut writer).map_err(|e| LoadError::Download {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    let file = writer.into_inner().map_err(|e| io_error(e.into_error()))?;
    file.sync_all().map_err(io_error)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_file_is_not_downloaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("edges.txt");
        std::fs::write(&path, "1\t2\n").unwrap();

        // The URL is unroutable; reaching the network would fail the test.
        let status = ensure_dataset("http://invalid.invalid/edges.txt", &path).unwrap();
        assert_eq!(status, DatasetStatus::AlreadyPresent);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\t2\n");
    }

    #[test]
    fn test_partial_download_is_not_treated_as_present() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("amazon.txt.gz");
        let partial = partial_path(&path);
        assert_eq!(partial, dir.path().join("amazon.txt.gz.part"));
        std::fs::write(&partial, [0x1f, 0x8b, 0x08]).unwrap();

        let err = ensure_dataset("http://invalid.invalid/edges.txt", &path).unwrap_err();
        assert!(matches!(err, LoadError::Download { .. }));
        assert!(!path.exists());
        assert!(!partial.exists());
    }

    #[test]
    fn test_unreachable_host_is_download_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("edges.txt");

        let err = ensure_dataset("http://invalid.invalid/edges.txt", &path).unwrap_err();
        assert!(matches!(err, LoadError::Download { .. }));
        assert!(!path.exists());
    }
}
