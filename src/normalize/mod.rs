//! Normalize module - segment delimiter cleanup on disk
//!
//! Provides:
//! - clean: read, rewrite and write back one file
//! - select: explicit file plus flat `*.hl7` scan
//! - run: sequential driver and reporting

pub mod clean;
pub mod run;
pub mod select;
