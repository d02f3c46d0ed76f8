//! segfix - rewrite HL7 message files to use bare carriage-return segment delimiters
//!
//! segfix provides:
//! - CRLF -> CR collapsing, in place, on raw bytes
//! - Selection of one explicit file plus every `*.hl7` file in a working directory
//! - Text, JSONL, JSON and Markdown reports

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod logging;
mod normalize;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    cli::run(cli)
}
