//! Enable or disable a located block.
//!
//! Disabling inserts `# ` before the first non-whitespace character of each
//! non-blank line in the span. Enabling removes one `#` and a single
//! following whitespace character. Both are pure; writing is done by the
//! caller.

use crate::document::{COMMENT_MARKER, Document, Line, split_indent};
use crate::parser::{Block, BlockState};

/// What a toggle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Lines were rewritten. Holds the 1-based numbers of changed lines.
    Applied { changed_lines: Vec<usize> },
    /// The block already had the requested state.
    Noop,
}

impl ToggleOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }
}

/// A toggled document and the outcome.
#[derive(Debug, Clone)]
pub struct Toggled {
    pub document: Document,
    pub outcome: ToggleOutcome,
}

/// Produce a new document with `block` set to `target`.
///
/// # Example
/// ```
/// use toggle_engine::{parse, toggle, BlockState, MarkerProfile};
///
/// let marker = MarkerProfile::pre_commit().compile().unwrap();
/// let parsed = parse("  - id: black\n    args: [-q]\n", &marker);
/// let toggled = toggle(&parsed.document, &parsed.blocks[0], BlockState::Disabled);
/// assert_eq!(toggled.document.render(), "  # - id: black\n    # args: [-q]\n");
/// ```
pub fn toggle(document: &Document, block: &Block, target: BlockState) -> Toggled {
    if block.state == target {
        tracing::debug!(name = %block.name, state = %target, "Block already in requested state");
        return Toggled {
            document: document.clone(),
            outcome: ToggleOutcome::Noop,
        };
    }

    let mut changed_lines = Vec::new();
    let lines = document
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let number = i + 1;
            if !block.contains(number) || line.is_blank() {
                return line.clone();
            }
            let text = match target {
                BlockState::Disabled => Some(comment_out(&line.text)),
                BlockState::Enabled => uncomment(&line.text),
            };
            match text {
                Some(text) if text != line.text => {
                    changed_lines.push(number);
                    Line {
                        text,
                        ending: line.ending,
                    }
                }
                _ => line.clone(),
            }
        })
        .collect();

    tracing::debug!(
        name = %block.name,
        state = %target,
        changed = changed_lines.len(),
        "Toggled block"
    );

    Toggled {
        document: Document::from_lines(lines),
        outcome: ToggleOutcome::Applied { changed_lines },
    }
}

fn comment_out(text: &str) -> String {
    let (indent, rest) = split_indent(text);
    format!("{indent}{COMMENT_MARKER} {rest}")
}

fn uncomment(text: &str) -> Option<String> {
    let (indent, rest) = split_indent(text);
    let rest = rest.strip_prefix(COMMENT_MARKER)?;
    let rest = rest
        .strip_prefix(' ')
        .or_else(|| rest.strip_prefix('\t'))
        .unwrap_or(rest);
    Some(format!("{indent}{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("key: 1", "# key: 1")]
    #[case("    - id: x", "    # - id: x")]
    #[case("  # note", "  # # note")]
    fn test_comment_out(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(comment_out(input), expected);
    }

    #[rstest]
    #[case("# key: 1", Some("key: 1"))]
    #[case("    # - id: x", Some("    - id: x"))]
    #[case("#   args: []", Some("  args: []"))]
    #[case("  #tight", Some("  tight"))]
    #[case("  # # note", Some("  # note"))]
    #[case("plain", None)]
    fn test_uncomment(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(uncomment(input).as_deref(), expected);
    }
}
