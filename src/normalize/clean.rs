//! In-place rewrite of one file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::delimiter::{collapse_crlf, count_crlf};

/// Whether to write the rewritten bytes back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanMode {
    #[default]
    Write,
    DryRun,
}

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("File {} not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub path: PathBuf,
    pub bytes_before: u64,
    pub bytes_after: u64,
    pub pairs_replaced: u64,
    /// False in dry-run mode
    pub written: bool,
}

/// Read the whole file, collapse CRLF to CR, and overwrite the same path.
///
/// The file is always rewritten in [`CleanMode::Write`], even when it holds no
/// CRLF pairs.
pub fn clean_file(path: &Path, mode: CleanMode) -> Result<CleanReport, CleanError> {
    let original = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CleanError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CleanError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let bytes_before = original.len() as u64;

    if mode == CleanMode::DryRun {
        let pairs = count_crlf(&original) as u64;
        return Ok(CleanReport {
            path: path.to_path_buf(),
            bytes_before,
            bytes_after: bytes_before - pairs,
            pairs_replaced: pairs,
            written: false,
        });
    }

    let collapsed = collapse_crlf(&original);
    fs::write(path, &collapsed.bytes).map_err(|source| CleanError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(CleanReport {
        path: path.to_path_buf(),
        bytes_before,
        bytes_after: collapsed.bytes.len() as u64,
        pairs_replaced: collapsed.pairs as u64,
        written: true,
    })
}
