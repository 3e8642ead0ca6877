//! Enable and disable commands

use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use toggle_engine::{BlockState, ToggleOutcome, find, preview, toggle};

use super::{report_ambiguity, report_warnings};
use crate::context::ToggleContext;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct ToggleReport {
    path: PathBuf,
    name: String,
    state: BlockState,
    start_line: usize,
    end_line: usize,
    changed: bool,
    dry_run: bool,
    changed_lines: Vec<usize>,
    backup: Option<PathBuf>,
}

/// Run the enable or disable command
///
/// A missing block fails before anything is written. A block already in
/// `target` state is reported as unchanged and the file is not touched.
pub fn run_toggle(
    ctx: &ToggleContext,
    path: &Path,
    name: &str,
    target: BlockState,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let loaded = ctx.load(path)?;
    report_warnings(&loaded.parsed.warnings);

    let located = find(&loaded.parsed.blocks, name)?;
    report_ambiguity(located.ambiguity.as_ref());
    let block = located.block;

    let toggled = toggle(&loaded.parsed.document, block, target);
    let new_text = toggled.document.render();
    let changed_lines = match &toggled.outcome {
        ToggleOutcome::Applied { changed_lines } => changed_lines.clone(),
        ToggleOutcome::Noop => Vec::new(),
    };
    let changed = !toggled.outcome.is_noop();

    let backup = if changed && !dry_run {
        toggle_fs::save(path, &loaded.text, &new_text)?;
        Some(toggle_fs::backup_path(path))
    } else {
        None
    };

    if json {
        let report = ToggleReport {
            path: path.to_path_buf(),
            name: block.name.clone(),
            state: target,
            start_line: block.start_line,
            end_line: block.end_line,
            changed,
            dry_run,
            changed_lines,
            backup,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !changed {
        println!(
            "{} '{}' is already {}; {}",
            "=".dimmed(),
            block.name,
            target,
            "unchanged".dimmed()
        );
        return Ok(());
    }

    if dry_run {
        print!("{}", preview(&loaded.text, &new_text, &path.display().to_string()));
        println!("{} no files written", "dry run:".yellow().bold());
        return Ok(());
    }

    let verb = match target {
        BlockState::Enabled => "Enabled",
        BlockState::Disabled => "Disabled",
    };
    println!(
        "{} {} '{}' (lines {}-{})",
        "✓".green(),
        verb,
        block.name.cyan(),
        block.start_line,
        block.end_line
    );
    if let Some(backup) = backup {
        println!("  {} {}", "backup:".dimmed(), backup.display());
    }
    Ok(())
}
