//! Sequential driver: select, clean, report

use anyhow::Result;
use std::path::Path;

use crate::core::model::{Meta, Origin, Report, ReportItem};
use crate::core::paths::display_path;
use crate::core::render::Renderer;
use crate::normalize::clean::{clean_file, CleanError, CleanMode};
use crate::normalize::select::{select_targets, Target};

/// Options for one invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub mode: CleanMode,
}

/// Handle one target. A missing file becomes a report item; any other I/O
/// failure is returned to the caller.
pub fn process_target(root: &Path, target: &Target, mode: CleanMode) -> Result<ReportItem> {
    let shown = display_path(&target.path, root);

    match clean_file(&target.path, mode) {
        Ok(report) => {
            tracing::debug!(
                "Processed {}: {} CRLF pairs, {} -> {} bytes",
                report.path.display(),
                report.pairs_replaced,
                report.bytes_before,
                report.bytes_after
            );
            let meta = Meta {
                bytes_before: Some(report.bytes_before),
                bytes_after: Some(report.bytes_after),
                pairs_replaced: Some(report.pairs_replaced),
                dry_run: !report.written,
            };
            Ok(ReportItem::processed(shown, target.origin, meta))
        }
        Err(err @ CleanError::NotFound { .. }) => {
            tracing::warn!("{}", err);
            Ok(ReportItem::missing(shown, target.origin, err.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Normalize every selected target in order, streaming output through `emit`.
pub fn normalize_dir<F>(
    root: &Path,
    explicit: Option<&Path>,
    options: RunOptions,
    renderer: &Renderer,
    mut emit: F,
) -> Result<Report>
where
    F: FnMut(&str),
{
    let targets = select_targets(root, explicit)?;
    tracing::debug!("{} target(s) under {:?}", targets.len(), root);

    let mut report = Report::new();
    for target in &targets {
        if target.origin == Origin::Explicit {
            if let Some(line) = renderer.announce(&target.path) {
                emit(&line);
            }
        }

        let item = process_target(root, target, options.mode)?;
        if let Some(chunk) = renderer.render_item(&item) {
            emit(&chunk);
        }
        report.push(item);
    }

    if let Some(output) = renderer.render_report(&report) {
        emit(&output);
    }

    tracing::info!(
        "{} target(s): {} processed, {} missing, {} CRLF pairs",
        report.len(),
        report.processed().count(),
        report.missing().count(),
        report.total_pairs()
    );

    Ok(report)
}

/// Run the normalizer and print to stdout
pub fn run_normalize(
    root: &Path,
    explicit: Option<&Path>,
    options: RunOptions,
    renderer: &Renderer,
) -> Result<()> {
    normalize_dir(root, explicit, options, renderer, |chunk| println!("{}", chunk))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Kind;
    use crate::core::render::{OutputFormat, RenderConfig};
    use std::fs;
    use tempfile::tempdir;

    fn collect(
        root: &Path,
        explicit: Option<&Path>,
        mode: CleanMode,
        format: OutputFormat,
    ) -> (Report, Vec<String>) {
        let renderer = Renderer::with_config(RenderConfig::new(format));
        let mut lines = Vec::new();
        let report = normalize_dir(root, explicit, RunOptions { mode }, &renderer, |c| {
            lines.push(c.to_string())
        })
        .unwrap();
        (report, lines)
    }

    #[test]
    fn test_normalizes_hl7_only() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.hl7"), b"A\r\nB\r\n").unwrap();
        fs::write(temp.path().join("b.hl7"), b"C\r\n").unwrap();
        fs::write(temp.path().join("c.txt"), b"D\r\n").unwrap();

        let (report, lines) = collect(temp.path(), None, CleanMode::Write, OutputFormat::Text);

        assert_eq!(fs::read(temp.path().join("a.hl7")).unwrap(), b"A\rB\r".to_vec());
        assert_eq!(fs::read(temp.path().join("b.hl7")).unwrap(), b"C\r".to_vec());
        assert_eq!(fs::read(temp.path().join("c.txt")).unwrap(), b"D\r\n".to_vec());
        assert_eq!(report.processed().count(), 2);
        assert_eq!(report.total_pairs(), 3);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_missing_explicit_continues() {
        colored::control::set_override(false);
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.hl7"), b"A\r\n").unwrap();

        let (report, lines) = collect(
            temp.path(),
            Some(Path::new("ghost.hl7")),
            CleanMode::Write,
            OutputFormat::Text,
        );

        let ghost = temp.path().join("ghost.hl7");
        assert_eq!(
            lines,
            vec![
                format!("Processing file: {}", ghost.display()),
                format!("File {} not found.", ghost.display()),
            ]
        );
        assert_eq!(report.items[0].kind, Kind::Missing);
        assert_eq!(report.items[0].origin, Origin::Explicit);
        assert_eq!(report.items[1].kind, Kind::Processed);
        assert_eq!(fs::read(temp.path().join("a.hl7")).unwrap(), b"A\r".to_vec());
    }

    #[test]
    fn test_explicit_non_hl7_is_processed() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("notes.txt"), b"X\r\n").unwrap();

        let (report, lines) = collect(
            temp.path(),
            Some(Path::new("notes.txt")),
            CleanMode::Write,
            OutputFormat::Text,
        );

        assert_eq!(fs::read(temp.path().join("notes.txt")).unwrap(), b"X\r".to_vec());
        assert_eq!(report.len(), 1);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Processing file: "));
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.hl7"), b"A\r\nB\r\n").unwrap();

        let (report, lines) = collect(temp.path(), None, CleanMode::DryRun, OutputFormat::Jsonl);

        assert_eq!(fs::read(temp.path().join("a.hl7")).unwrap(), b"A\r\nB\r\n".to_vec());
        assert_eq!(report.items[0].meta.pairs_replaced, Some(2));
        assert!(report.items[0].meta.dry_run);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"dry_run\":true"));
    }

    #[test]
    fn test_json_renders_once_at_end() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.hl7"), b"A\r\n").unwrap();
        fs::write(temp.path().join("b.hl7"), b"B\r\n").unwrap();

        let (_, lines) = collect(temp.path(), None, CleanMode::Write, OutputFormat::Json);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('['));
    }

    #[test]
    fn test_unreadable_target_propagates() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("folder")).unwrap();

        let renderer = Renderer::with_config(RenderConfig::new(OutputFormat::Text));
        let result = normalize_dir(
            temp.path(),
            Some(Path::new("folder")),
            RunOptions::default(),
            &renderer,
            |_| {},
        );
        assert!(result.is_err());
    }
}
