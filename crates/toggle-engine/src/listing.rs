//! Read-only reporting: block summaries, raw block text and change previews.

use serde::Serialize;
use similar::TextDiff;

use crate::document::Document;
use crate::parser::{Block, BlockState};

/// One row of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    pub name: String,
    pub state: BlockState,
    /// Human-facing label: name indented by depth, then the line range.
    pub label: String,
    pub start_line: usize,
    pub end_line: usize,
    pub depth: usize,
}

/// Summarize blocks in document order.
pub fn list(blocks: &[Block]) -> Vec<BlockSummary> {
    blocks
        .iter()
        .map(|b| BlockSummary {
            name: b.name.clone(),
            state: b.state,
            label: format!(
                "{}{} (lines {}-{})",
                "  ".repeat(b.depth),
                b.name,
                b.start_line,
                b.end_line
            ),
            start_line: b.start_line,
            end_line: b.end_line,
            depth: b.depth,
        })
        .collect()
}

/// The block's lines exactly as they appear in the document.
pub fn show(document: &Document, block: &Block) -> String {
    document.render_span(block.start_line, block.end_line)
}

/// Unified diff between two renderings of a document.
pub fn preview(old: &str, new: &str, path: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(2)
        .header(path, path)
        .to_string()
}
