//! Path utilities
//!
//! Resolves the working directory and makes report paths relative to it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name suffix selected by the directory scan
pub const HL7_SUFFIX: &str = ".hl7";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Path shown in reports: relative to root when possible, otherwise as given
pub fn display_path(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

/// Resolve a user-supplied file name against the working directory.
///
/// Absolute names are returned unchanged.
pub fn resolve(root: &Path, name: &Path) -> PathBuf {
    root.join(name)
}

/// Literal, case-sensitive `.hl7` suffix check on the raw file name bytes.
/// Names need not be valid UTF-8.
pub fn has_hl7_suffix(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().ends_with(HL7_SUFFIX.as_bytes()))
        .unwrap_or(false)
}

/// Directory holding the running executable, used when no root is given
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable path has no parent directory: {:?}", exe))
}

/// Pick the working directory: an explicit root, else the executable's directory.
/// The result is canonicalized when possible.
pub fn working_dir(root: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match root {
        Some(dir) => dir,
        None => executable_dir()?,
    };
    Ok(dir.canonicalize().unwrap_or(dir))
}
