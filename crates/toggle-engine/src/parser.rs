//! Block parsing for YAML-like documents.
//!
//! Blocks are found by indentation alone. A line matching the block marker
//! opens a block; the next non-blank line at the same or a shallower
//! effective indentation closes it. Commented lines are measured behind
//! their marker, so a disabled block has the same extent as when enabled:
//!
//! ```text
//!   - id: black          <- block `black` (enabled)
//!     args: [-q]
//!   # - id: isort        <- block `isort` (disabled)
//!   #   args: [--profile=black]
//! ```

use serde::Serialize;
use std::fmt;

use crate::document::Document;
use crate::profile::BlockMarker;

/// Whether a block is active or commented out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockState {
    Enabled,
    Disabled,
}

impl BlockState {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// A named span of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Name captured by the block marker.
    pub name: String,
    /// 1-based line of the block marker.
    pub start_line: usize,
    /// 1-based last line of the block, inclusive.
    pub end_line: usize,
    /// Effective indentation of the start line.
    pub indent: usize,
    /// Number of enclosing blocks.
    pub depth: usize,
    pub state: BlockState,
    /// Verbatim line texts of the span, without terminators.
    pub raw_lines: Vec<String>,
    /// False when the span mixes commented and uncommented lines.
    pub consistent: bool,
}

impl Block {
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn contains(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }
}

/// Recoverable problems found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A block mixes commented and uncommented lines; `resolved` is the
    /// state chosen by majority.
    InconsistentCommentState {
        name: String,
        line: usize,
        commented: usize,
        uncommented: usize,
        resolved: BlockState,
    },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentCommentState {
                name,
                line,
                commented,
                uncommented,
                resolved,
            } => write!(
                f,
                "block '{}' at line {} is partially commented ({} commented, {} uncommented lines); treating it as {}",
                name, line, commented, uncommented, resolved
            ),
        }
    }
}

/// Result of parsing a document.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub document: Document,
    /// Every block at every depth, in document order.
    pub blocks: Vec<Block>,
    pub warnings: Vec<ParseWarning>,
}

struct OpenBlock {
    index: usize,
    indent: usize,
}

/// Parse `text` into a document and its blocks.
///
/// Never fails: inconsistent comment state is resolved by majority and
/// reported in [`Parsed::warnings`].
///
/// # Example
/// ```
/// use toggle_engine::{parse, BlockState, MarkerProfile};
///
/// let marker = MarkerProfile::gitlab_ci().compile().unwrap();
/// let parsed = parse("build:\n  script: make\n# test:\n#   script: make test\n", &marker);
/// assert_eq!(parsed.blocks.len(), 2);
/// assert_eq!(parsed.blocks[1].name, "test");
/// assert_eq!(parsed.blocks[1].state, BlockState::Disabled);
/// ```
pub fn parse(text: &str, marker: &BlockMarker) -> Parsed {
    let document = Document::from_text(text);
    let mut blocks: Vec<Block> = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();
    let mut last_non_blank = 0;

    for (i, line) in document.lines().iter().enumerate() {
        let number = i + 1;
        if line.is_blank() {
            continue;
        }
        let indent = line.effective_indent();

        while let Some(top) = stack.last() {
            if indent > top.indent {
                break;
            }
            blocks[top.index].end_line = number - 1;
            stack.pop();
        }

        if let Some(name) = marker.match_line(line) {
            blocks.push(Block {
                name,
                start_line: number,
                end_line: number,
                indent,
                depth: stack.len(),
                state: BlockState::Enabled,
                raw_lines: Vec::new(),
                consistent: true,
            });
            stack.push(OpenBlock {
                index: blocks.len() - 1,
                indent,
            });
        }
        last_non_blank = number;
    }

    // Trailing blank lines belong to no block.
    for open in stack {
        blocks[open.index].end_line = last_non_blank;
    }

    let mut warnings = Vec::new();
    let spans: Vec<(usize, usize, usize)> = blocks
        .iter()
        .map(|b| (b.start_line, b.end_line, b.depth))
        .collect();

    for (i, block) in blocks.iter_mut().enumerate() {
        block.raw_lines = document.lines()[block.start_line - 1..block.end_line]
            .iter()
            .map(|l| l.text.clone())
            .collect();

        // Lines inside nested blocks are judged with the nested block.
        let nested: Vec<(usize, usize)> = spans[i + 1..]
            .iter()
            .take_while(|(start, _, _)| *start <= block.end_line)
            .filter(|(_, _, depth)| *depth == block.depth + 1)
            .map(|(start, end, _)| (*start, *end))
            .collect();

        let (mut commented, mut uncommented) = (0, 0);
        for number in block.start_line..=block.end_line {
            if nested.iter().any(|(s, e)| (*s..=*e).contains(&number)) {
                continue;
            }
            let Some(line) = document.line(number) else {
                continue;
            };
            if line.is_blank() {
                continue;
            }
            if line.is_commented() {
                commented += 1;
            } else {
                uncommented += 1;
            }
        }

        block.state = if commented > uncommented {
            BlockState::Disabled
        } else {
            BlockState::Enabled
        };

        if commented > 0 && uncommented > 0 {
            block.consistent = false;
            let warning = ParseWarning::InconsistentCommentState {
                name: block.name.clone(),
                line: block.start_line,
                commented,
                uncommented,
                resolved: block.state,
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
        }
    }

    tracing::debug!(
        profile = marker.profile(),
        lines = document.len(),
        blocks = blocks.len(),
        "Parsed document"
    );

    Parsed {
        document,
        blocks,
        warnings,
    }
}
