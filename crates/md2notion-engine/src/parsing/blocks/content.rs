//! Content projection types for blocks whose text spans several lines.
//!
//! A block keeps one [`ContentLine`] per physical line so markers and
//! indentation can be dropped while the text stays addressable in the rope.

use xi_rope::Rope;

use crate::parsing::rope::{slice::slice_to_string, span::Span};

/// A single line's content projection within a block.
///
/// Separates the line prefix (indentation, `> `, list marker) from the
/// meaningful content.
///
/// # Invariants
///
/// - `prefix` and `content` are within `raw_line`
/// - `prefix.end <= content.start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Full physical line span in the rope.
    pub raw_line: Span,
    /// Prefix region on this line (e.g., `> ` or `- [ ] `).
    pub prefix: Span,
    /// Remainder after stripping prefixes.
    pub content: Span,
}

impl ContentLine {
    /// A line with no prefix: content starts where the line starts.
    pub fn verbatim(raw_line: Span, content: Span) -> Self {
        Self {
            raw_line,
            prefix: Span::new(raw_line.start, raw_line.start),
            content,
        }
    }
}

/// How a block's meaningful content is represented.
///
/// - `Contiguous`: Single span (headings, dividers)
/// - `Lines`: One entry per source line (paragraphs, quotes, list items, code)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Contiguous(Span),
    Lines(Vec<ContentLine>),
}

impl ContentView {
    /// Returns every content span in order.
    pub fn spans(&self) -> Vec<Span> {
        match self {
            ContentView::Contiguous(span) => vec![*span],
            ContentView::Lines(lines) => lines.iter().map(|l| l.content).collect(),
        }
    }

    /// Joins content spans into a single string, separated by newlines.
    ///
    /// This is the canonical way to get the "without-prefix" view of a block's content.
    #[must_use]
    pub fn join_content(&self, rope: &Rope) -> String {
        match self {
            ContentView::Contiguous(span) => slice_to_string(rope, *span),
            ContentView::Lines(lines) => lines
                .iter()
                .map(|line| slice_to_string(rope, line.content))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
