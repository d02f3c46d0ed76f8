//! Target selection
//!
//! An explicitly named file comes first, followed by every `*.hl7` file found
//! directly inside the working directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::model::Origin;
use crate::core::paths::{has_hl7_suffix, resolve};

/// A file to normalize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    pub origin: Origin,
}

impl Target {
    pub fn explicit(path: PathBuf) -> Self {
        Self {
            path,
            origin: Origin::Explicit,
        }
    }

    pub fn scanned(path: PathBuf) -> Self {
        Self {
            path,
            origin: Origin::Scan,
        }
    }
}

/// `*.hl7` entries directly inside `root`, sorted by file name.
///
/// Regular files and symlinks are kept; a dangling link is still a candidate
/// so the read reports it as missing. Directories are skipped.
pub fn scan_hl7_files(root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to list working directory: {:?}", root))?;

        if !is_candidate(&entry) {
            continue;
        }
        if !has_hl7_suffix(entry.path()) {
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

fn is_candidate(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

/// Whether a scanned path names the same file as the explicit target, either
/// literally or after resolving `..` and symlinks
fn is_explicit(path: &Path, explicit: Option<&Path>, explicit_key: Option<&Path>) -> bool {
    if explicit == Some(path) {
        return true;
    }
    match explicit_key {
        Some(key) => path.canonicalize().map(|p| p == key).unwrap_or(false),
        None => false,
    }
}

/// Build the ordered target list: explicit file first, then scanned files.
///
/// A scanned file that is the explicit file is skipped, so each path appears
/// once.
pub fn select_targets(root: &Path, explicit: Option<&Path>) -> Result<Vec<Target>> {
    let mut targets = Vec::new();

    let explicit_path = explicit.map(|name| resolve(root, name));
    if let Some(path) = &explicit_path {
        targets.push(Target::explicit(path.clone()));
    }

    let explicit_key = explicit_path.as_deref().and_then(|p| p.canonicalize().ok());

    for path in scan_hl7_files(root)? {
        if is_explicit(&path, explicit_path.as_deref(), explicit_key.as_deref()) {
            tracing::debug!("Skipping {:?}: already selected explicitly", path);
            continue;
        }
        targets.push(Target::scanned(path));
    }

    Ok(targets)
}
