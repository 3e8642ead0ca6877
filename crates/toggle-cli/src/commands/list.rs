//! List command

use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use toggle_engine::{BlockState, BlockSummary, list};

use super::report_warnings;
use crate::context::ToggleContext;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct ListReport {
    path: PathBuf,
    profile: String,
    blocks: Vec<BlockSummary>,
}

/// Glyph shown before each block in `list` output.
pub fn status_marker(state: BlockState) -> &'static str {
    match state {
        BlockState::Enabled => "✓",
        BlockState::Disabled => "⚪",
    }
}

/// Run the list command
pub fn run_list(ctx: &ToggleContext, path: Option<&Path>, json: bool) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => ctx.default_document()?,
    };
    let loaded = ctx.load(&path)?;
    report_warnings(&loaded.parsed.warnings);
    let blocks = list(&loaded.parsed.blocks);

    if json {
        let report = ListReport {
            path,
            profile: loaded.profile,
            blocks,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} ({} profile)",
        path.display().to_string().bold(),
        loaded.profile.cyan()
    );
    println!();

    if blocks.is_empty() {
        println!("  {}", "No blocks found".dimmed());
        return Ok(());
    }

    for block in &blocks {
        let marker = match block.state {
            BlockState::Enabled => status_marker(block.state).green(),
            BlockState::Disabled => status_marker(block.state).normal(),
        };
        println!("  {} {}", marker, block.label);
    }

    let enabled = blocks.iter().filter(|b| b.state.is_enabled()).count();
    println!();
    println!(
        "{} {} enabled, {} disabled",
        "Total:".dimmed(),
        enabled,
        blocks.len() - enabled
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_runs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".pre-commit-config.yaml");
        fs::write(&path, "  - id: a\n  # - id: b\n").unwrap();

        let ctx = ToggleContext::new(None, None).unwrap();
        assert!(run_list(&ctx, Some(&path), false).is_ok());
        assert!(run_list(&ctx, Some(&path), true).is_ok());
    }

    #[test]
    fn test_list_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let ctx = ToggleContext::new(None, None).unwrap();

        let err = run_list(&ctx, Some(&temp.path().join("missing.yaml")), false).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_IO);
    }

    #[test]
    fn test_status_markers() {
        assert_eq!(status_marker(BlockState::Enabled), "✓");
        assert_eq!(status_marker(BlockState::Disabled), "⚪");
    }
}
