//! CLI module - Command-line interface definition and dispatch

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::paths::working_dir;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::normalize::clean::CleanMode;
use crate::normalize::run::{run_normalize, RunOptions};

/// segfix - collapse CRLF segment delimiters in HL7 files to a bare CR.
#[derive(Parser, Debug)]
#[command(name = "segfix")]
#[command(
    author,
    version,
    about,
    long_about = r#"segfix rewrites HL7 message files in place so that every CRLF pair
becomes a single CR, the segment delimiter HL7 expects on the wire. All other
bytes are left untouched.

Files handled on each run:
- FILE, if given, resolved relative to the working directory
- every file directly inside the working directory whose name ends in .hl7

The working directory defaults to the directory holding the segfix executable.

Examples:
    segfix
    segfix admit.hl7
    segfix --root ./feeds --dry-run --format md
"#
)]
pub struct Cli {
    /// File to normalize first, relative to the working directory.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Working directory for relative lookups and the .hl7 scan.
    #[arg(
        long,
        env = "SEGFIX_ROOT",
        value_name = "ROOT",
        long_help = "Working directory for relative lookups and the .hl7 scan.\n\n\
Defaults to the directory containing the segfix executable, not the directory\n\
segfix is invoked from."
    )]
    pub root: Option<PathBuf>,

    /// Output format (text/jsonl/json/md).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- text (default): progress and not-found lines only\n\
- jsonl: one JSON object per handled file\n\
- json: a single JSON array\n\
- md (markdown)"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Count CRLF pairs without rewriting any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no progress line).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let renderer = Renderer::with_config(RenderConfig {
        pretty: cli.pretty,
        quiet: cli.quiet,
        ..RenderConfig::new(format)
    });

    let root = working_dir(cli.root)?;
    tracing::debug!("Working directory: {:?}", root);

    let options = RunOptions {
        mode: if cli.dry_run {
            CleanMode::DryRun
        } else {
            CleanMode::Write
        },
    };

    run_normalize(&root, cli.file.as_deref(), options, &renderer)
}
