//! Report model
//!
//! Every selected target maps to one [`ReportItem`] before rendering.

use serde::{Deserialize, Serialize};

/// Outcome of handling one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Processed,
    Missing,
}

/// How a target was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Named on the command line
    Explicit,
    /// Found by the working-directory scan
    Scan,
}

/// Byte accounting for a processed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_before: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_after: Option<u64>,

    /// CRLF pairs collapsed (or that would be, in a dry run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairs_replaced: Option<u64>,

    #[serde(default)]
    pub dry_run: bool,
}

/// Error information attached to a report item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl ReportError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportItem {
    pub kind: Kind,

    pub origin: Origin,

    /// Relative to the working directory with '/' separators, or absolute
    /// when the target lies outside it
    pub path: String,

    pub meta: Meta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ReportError>,
}

impl ReportItem {
    /// Create a processed-file item
    pub fn processed(path: impl Into<String>, origin: Origin, meta: Meta) -> Self {
        Self {
            kind: Kind::Processed,
            origin,
            path: path.into(),
            meta,
            errors: Vec::new(),
        }
    }

    /// Create a missing-file item
    pub fn missing(path: impl Into<String>, origin: Origin, message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Missing,
            origin,
            path: path.into(),
            meta: Meta::default(),
            errors: vec![ReportError::new("NOT_FOUND", message)],
        }
    }

    /// Whether a processed file actually had CRLF pairs
    pub fn changed(&self) -> bool {
        self.meta.pairs_replaced.unwrap_or(0) > 0
    }
}

/// Ordered collection of report items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub items: Vec<ReportItem>,
}

impl Report {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ReportItem) {
        self.items.push(item);
    }

    pub fn processed(&self) -> impl Iterator<Item = &ReportItem> {
        self.items.iter().filter(|i| i.kind == Kind::Processed)
    }

    pub fn missing(&self) -> impl Iterator<Item = &ReportItem> {
        self.items.iter().filter(|i| i.kind == Kind::Missing)
    }

    /// Total CRLF pairs collapsed across all processed files
    pub fn total_pairs(&self) -> u64 {
        self.processed()
            .filter_map(|i| i.meta.pairs_replaced)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
