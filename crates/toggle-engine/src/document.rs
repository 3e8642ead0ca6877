//! Line-level document model.
//!
//! A [`Document`] keeps every line together with its original terminator so
//! that rendering reproduces the input byte for byte.

/// The comment marker recognised and inserted by the engine.
pub const COMMENT_MARKER: char = '#';

/// A single line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line content without its terminator.
    pub text: String,
    /// The terminator as found in the source: `"\n"`, `"\r\n"` or `""`.
    pub ending: &'static str,
}

impl Line {
    /// Whether the line contains only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the first non-whitespace character is the comment marker.
    pub fn is_commented(&self) -> bool {
        split_indent(&self.text).1.starts_with(COMMENT_MARKER)
    }

    /// Indentation used for block extents.
    ///
    /// For commented lines this is the marker column plus the indentation of
    /// the text behind the marker, so a line keeps the same indentation
    /// whether it is commented in place or at column 0. Stacked markers
    /// (`# #   x`) are all stripped, each with one optional space.
    pub fn effective_indent(&self) -> usize {
        let (indent, mut rest) = split_indent(&self.text);
        while rest.starts_with(COMMENT_MARKER) {
            rest = strip_marker(rest);
        }
        indent.len() + leading_ws(rest)
    }

    /// The line content with one comment marker removed and leading
    /// whitespace trimmed. Used for matching block-start markers.
    pub fn content(&self) -> &str {
        let (_, rest) = split_indent(&self.text);
        if rest.starts_with(COMMENT_MARKER) {
            split_indent(strip_marker(rest)).1
        } else {
            rest
        }
    }
}

/// Remove the leading comment marker and at most one following whitespace
/// character. `text` must start with the marker.
fn strip_marker(text: &str) -> &str {
    let rest = &text[COMMENT_MARKER.len_utf8()..];
    match rest.chars().next() {
        Some(c) if c == ' ' || c == '\t' => &rest[c.len_utf8()..],
        _ => rest,
    }
}

fn leading_ws(text: &str) -> usize {
    split_indent(text).0.len()
}

/// Split leading spaces and tabs from the rest of the line.
pub(crate) fn split_indent(text: &str) -> (&str, &str) {
    let rest = text.trim_start_matches([' ', '\t']);
    text.split_at(text.len() - rest.len())
}

/// An immutable sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Split text into lines, keeping each terminator.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split_inclusive('\n')
            .map(|segment| {
                if let Some(body) = segment.strip_suffix("\r\n") {
                    Line {
                        text: body.to_string(),
                        ending: "\r\n",
                    }
                } else if let Some(body) = segment.strip_suffix('\n') {
                    Line {
                        text: body.to_string(),
                        ending: "\n",
                    }
                } else {
                    Line {
                        text: segment.to_string(),
                        ending: "",
                    }
                }
            })
            .collect();
        Self { lines }
    }

    pub(crate) fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by its 1-based number.
    pub fn line(&self, number: usize) -> Option<&Line> {
        number.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    /// Render lines `start..=end` (1-based) verbatim.
    pub fn render_span(&self, start: usize, end: usize) -> String {
        let from = start.saturating_sub(1).min(self.lines.len());
        let to = end.min(self.lines.len()).max(from);
        self.lines[from..to]
            .iter()
            .map(|l| format!("{}{}", l.text, l.ending))
            .collect()
    }

    /// Render the whole document.
    pub fn render(&self) -> String {
        self.render_span(1, self.lines.len())
    }
}
