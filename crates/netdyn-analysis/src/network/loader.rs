//! Edge-list loader.
//!
//! Lenient by policy: comment lines are skipped, lines that do not parse as
//! two integers are skipped and counted, and an empty or unreadable stream
//! yields an empty `EdgeList` with a warning rather than an error. Only a
//! file that cannot be opened at all is an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use netdyn_core::errors::LoadError;
use tracing::{debug, info, warn};

use super::types::{Edge, EdgeList, EdgeListFormat};

/// gzip member header.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Load an edge list from `path`, transparently decompressing gzip input.
pub fn load_edge_list(path: &Path, format: &EdgeListFormat) -> Result<EdgeList, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let is_gzip = reader
        .fill_buf()
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?
        .starts_with(&GZIP_MAGIC);
    debug!(path = %path.display(), is_gzip, "opening edge list");

    let edge_list = if is_gzip {
        parse_edge_list(BufReader::new(MultiGzDecoder::new(reader)), format)
    } else {
        parse_edge_list(reader, format)
    };

    if edge_list.is_empty() {
        warn!(
            path = %path.display(),
            skipped = edge_list.skipped_lines,
            "file is empty or has an invalid format"
        );
    } else {
        info!(
            path = %path.display(),
            edges = edge_list.len(),
            skipped = edge_list.skipped_lines,
            "edge list loaded"
        );
    }
    Ok(edge_list)
}

/// Parse an edge list from any buffered reader.
///
/// Blank lines are ignored without being counted. A read error (corrupt
/// compression, truncated stream) ends parsing; edges read so far are kept.
pub fn parse_edge_list<R: BufRead>(mut reader: R, format: &EdgeListFormat) -> EdgeList {
    let mut result = EdgeList::default();
    let mut columns = (0usize, 1usize);
    let mut header_pending = format.columns.is_some();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, edges = result.edges.len(), "stopped reading edge list");
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        if !format.comment_prefix.is_empty() && line.starts_with(format.comment_prefix.as_str()) {
            result.comment_lines += 1;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        if header_pending {
            header_pending = false;
            if let Some((from, to)) = &format.columns {
                columns = resolve_columns(line, &format.separator, from, to);
                continue;
            }
        }

        match parse_edge(line, &format.separator, columns) {
            Some(edge) => result.edges.push(edge),
            None => result.skipped_lines += 1,
        }
    }

    result
}

/// Locate the named columns in a header line, falling back to the first two
/// columns when either name is missing.
fn resolve_columns(header: &str, separator: &str, from: &str, to: &str) -> (usize, usize) {
    let names: Vec<&str> = header.trim().split(separator).map(str::trim).collect();
    let from_idx = names.iter().position(|n| *n == from);
    let to_idx = names.iter().position(|n| *n == to);
    match (from_idx, to_idx) {
        (Some(f), Some(t)) => (f, t),
        _ => {
            debug!(header, from, to, "header columns not found, using first two columns");
            (0, 1)
        }
    }
}

fn parse_edge(line: &str, separator: &str, (from_col, to_col): (usize, usize)) -> Option<Edge> {
    let mut from = None;
    let mut to = None;
    for (i, part) in line.trim().split(separator).enumerate() {
        if i == from_col {
            from = Some(part.trim().parse().ok()?);
        }
        if i == to_col {
            to = Some(part.trim().parse().ok()?);
        }
        if from.is_some() && to.is_some() {
            break;
        }
    }
    Some((from?, to?))
}
