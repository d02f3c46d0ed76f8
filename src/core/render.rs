//! Renderer module
//!
//! Renders report items as text, jsonl, json or md. Text and jsonl stream one
//! chunk per item while processing; json and md render once at the end.

use colored::Colorize;
use std::path::Path;

use crate::core::model::{Kind, Report, ReportItem};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    /// Suppress the text-mode progress line
    pub quiet: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Progress line printed before an explicitly named file is attempted
    pub fn announce(&self, path: &Path) -> Option<String> {
        if self.config.format != OutputFormat::Text || self.config.quiet {
            return None;
        }
        Some(format!("Processing file: {}", path.display()))
    }

    /// Streamed output for a single item, if the format streams and the item
    /// has anything to say
    pub fn render_item(&self, item: &ReportItem) -> Option<String> {
        match self.config.format {
            OutputFormat::Text => self.render_text(item),
            OutputFormat::Jsonl => self.render_json_value(item),
            OutputFormat::Json | OutputFormat::Markdown => None,
        }
    }

    /// Final output once every target has been handled
    pub fn render_report(&self, report: &Report) -> Option<String> {
        match self.config.format {
            OutputFormat::Json => self.render_json_value(&report.items),
            OutputFormat::Markdown => Some(self.render_markdown(report)),
            OutputFormat::Text | OutputFormat::Jsonl => None,
        }
    }

    /// Text mode is silent on success and prints the error message otherwise
    fn render_text(&self, item: &ReportItem) -> Option<String> {
        match item.kind {
            Kind::Processed => None,
            Kind::Missing => item
                .errors
                .first()
                .map(|e| e.message.as_str().yellow().to_string()),
        }
    }

    fn render_json_value<T: serde::Serialize + ?Sized>(&self, value: &T) -> Option<String> {
        if self.config.pretty {
            serde_json::to_string_pretty(value).ok()
        } else {
            serde_json::to_string(value).ok()
        }
    }

    fn render_markdown(&self, report: &Report) -> String {
        let mut output = String::new();

        if report.is_empty() {
            output.push_str("_No files handled._\n");
            return output;
        }

        let processed: Vec<_> = report.processed().collect();
        let missing: Vec<_> = report.missing().collect();

        if !missing.is_empty() {
            output.push_str("## Missing\n\n");
            for item in missing {
                output.push_str(&format!("- `{}`", item.path));
                if let Some(error) = item.errors.first() {
                    output.push_str(&format!(": {}", error.message));
                }
                output.push('\n');
            }
            output.push('\n');
        }

        if !processed.is_empty() {
            output.push_str("## Processed\n\n");
            for item in processed {
                output.push_str(&format!("- `{}`", item.path));
                let pairs = item.meta.pairs_replaced.unwrap_or(0);
                output.push_str(&format!(" ({} CRLF pairs", pairs));
                if let (Some(before), Some(after)) = (item.meta.bytes_before, item.meta.bytes_after)
                {
                    output.push_str(&format!(", {} -> {} bytes", before, after));
                }
                output.push(')');
                if !item.changed() {
                    output.push_str(" _already clean_");
                }
                if item.meta.dry_run {
                    output.push_str(" _dry run_");
                }
                output.push('\n');
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "**Total:** {} processed, {} missing, {} CRLF pairs\n",
            report.processed().count(),
            report.missing().count(),
            report.total_pairs()
        ));

        output
    }
}
