//! Resolve a block name to a single block.

use std::fmt;

use crate::error::{Error, Result};
use crate::parser::Block;

/// More than one block carries the requested name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousMatch {
    pub name: String,
    /// Start lines of every match, in document order. The first is used.
    pub lines: Vec<usize>,
}

impl AmbiguousMatch {
    pub fn count(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for AmbiguousMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.lines.iter().map(|l| l.to_string()).collect();
        write!(
            f,
            "block name '{}' matches {} blocks (lines {}); using the first",
            self.name,
            self.count(),
            lines.join(", ")
        )
    }
}

/// A located block plus an optional ambiguity warning.
#[derive(Debug, Clone)]
pub struct Located<'a> {
    pub block: &'a Block,
    pub ambiguity: Option<AmbiguousMatch>,
}

/// Find the first block named `name` in document order.
///
/// Blocks from [`crate::parse`] are already in depth-first document order,
/// so the first match is the outermost, earliest one.
pub fn find<'a>(blocks: &'a [Block], name: &str) -> Result<Located<'a>> {
    let mut matches = blocks.iter().filter(|b| b.name == name);
    let Some(block) = matches.next() else {
        return Err(Error::not_found(name));
    };

    let rest: Vec<usize> = matches.map(|b| b.start_line).collect();
    let ambiguity = if rest.is_empty() {
        None
    } else {
        let mut lines = vec![block.start_line];
        lines.extend(rest);
        let warning = AmbiguousMatch {
            name: name.to_string(),
            lines,
        };
        tracing::warn!("{}", warning);
        Some(warning)
    };

    tracing::debug!(name, line = block.start_line, "Located block");
    Ok(Located { block, ambiguity })
}
