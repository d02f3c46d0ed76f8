//! Core module - Byte transform, report model and rendering
//!
//! This module provides:
//! - CRLF -> CR segment delimiter rewriting
//! - Report model (ReportItem)
//! - Rendering functions for different output formats
//! - Path utilities

pub mod delimiter;
pub mod model;
pub mod paths;
pub mod render;
