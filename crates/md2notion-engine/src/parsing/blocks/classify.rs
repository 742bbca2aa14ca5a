use crate::parsing::rope::{lines::LineRef, span::Span};

use super::{
    kinds::FenceSig,
    open::{BlockStart, detect_block_start},
    types::ListKind,
};

/// Default tab stop used when measuring indentation.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// What kind of block a line starts (or continues), with resolved spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Fence(FenceSig),
    Heading { level: u8, text: Span },
    Quote { depth: u8, text: Span },
    ListItem {
        kind: ListKind,
        task: Option<bool>,
        /// Marker plus task box, including the gap before the text.
        marker: Span,
        text: Span,
    },
    ThematicBreak,
    Blank,
    Text { text: Span },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Byte span of the line without its terminator.
    pub content: Span,
    /// Leading whitespace width in columns, tabs expanded.
    pub indent: usize,
    pub kind: LineKind,
}

impl LineClass {
    pub fn fence_sig(&self) -> Option<&FenceSig> {
        match &self.kind {
            LineKind::Fence(sig) => Some(sig),
            _ => None,
        }
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier {
    tab_width: usize,
}

impl MarkdownLineClassifier {
    pub fn new(tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
        }
    }

    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.trimmed();
        let base = lr.span.start;
        let content = lr.content_span();

        let (indent, lead) = self.measure_indent(trimmed);
        let rest = &trimmed[lead..];
        let at = |offset: usize| base + lead + offset;

        let kind = match detect_block_start(rest) {
            BlockStart::Fence(sig) => LineKind::Fence(sig),
            BlockStart::Heading { level, text } => LineKind::Heading {
                level,
                text: Span::new(at(text.0), at(text.1)),
            },
            BlockStart::Quote { depth, text_offset } => LineKind::Quote {
                depth,
                text: trim_span(trimmed, base, lead + text_offset),
            },
            BlockStart::ListItem {
                kind,
                task,
                text_offset,
            } => LineKind::ListItem {
                kind,
                task,
                marker: Span::new(at(0), at(text_offset)),
                text: trim_span(trimmed, base, lead + text_offset),
            },
            BlockStart::ThematicBreak => LineKind::ThematicBreak,
            BlockStart::Blank => LineKind::Blank,
            BlockStart::Text => LineKind::Text {
                text: trim_span(trimmed, base, lead),
            },
        };

        LineClass {
            line: lr.span,
            content,
            indent,
            kind,
        }
    }

    /// Returns (columns, bytes) of leading spaces and tabs.
    ///
    /// A tab advances to the next multiple of the tab width.
    pub fn measure_indent(&self, s: &str) -> (usize, usize) {
        let mut cols = 0usize;
        let mut bytes = 0usize;
        for b in s.bytes() {
            match b {
                b' ' => cols += 1,
                b'\t' => cols += self.tab_width - cols % self.tab_width,
                _ => break,
            }
            bytes += 1;
        }
        (cols, bytes)
    }
}

impl Default for MarkdownLineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_WIDTH)
    }
}

/// Span of `line[from..]` with surrounding whitespace removed.
fn trim_span(line: &str, base: usize, from: usize) -> Span {
    let tail = &line[from..];
    let start = from + (tail.len() - tail.trim_start().len());
    let end = from + tail.trim_end().len();
    let start = start.min(end);
    Span::new(base + start, base + end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::lines_with_spans;
    use xi_rope::Rope;

    fn classify_all(src: &str, tab_width: usize) -> Vec<LineClass> {
        let rope = Rope::from(src);
        let classifier = MarkdownLineClassifier::new(tab_width);
        lines_with_spans(&rope)
            .map(|lr| classifier.classify(&lr))
            .collect()
    }

    #[test]
    fn text_span_is_trimmed() {
        let lines = classify_all("  hello  \n", 4);
        assert_eq!(lines[0].indent, 2);
        assert_eq!(
            lines[0].kind,
            LineKind::Text {
                text: Span::new(2, 7)
            }
        );
        assert_eq!(lines[0].content, Span::new(0, 9));
    }

    #[test]
    fn tabs_expand_to_tab_stops() {
        let classifier = MarkdownLineClassifier::new(4);
        assert_eq!(classifier.measure_indent("\tx"), (4, 1));
        assert_eq!(classifier.measure_indent("  \tx"), (4, 3));
        assert_eq!(classifier.measure_indent("     \tx"), (8, 6));

        let classifier = MarkdownLineClassifier::new(2);
        assert_eq!(classifier.measure_indent("\t\tx"), (4, 2));
    }

    #[test]
    fn zero_tab_width_is_treated_as_one() {
        let classifier = MarkdownLineClassifier::new(0);
        assert_eq!(classifier.measure_indent("\t\t"), (2, 2));
    }

    #[test]
    fn nested_list_item_records_indent_and_marker() {
        let lines = classify_all("- a\n  - b\n", 4);
        assert_eq!(lines[1].indent, 2);
        match &lines[1].kind {
            LineKind::ListItem { marker, text, .. } => {
                assert_eq!(*marker, Span::new(6, 8));
                assert_eq!(*text, Span::new(8, 9));
            }
            other => panic!("expected list item, got {other:?}"),
        }
    }

    #[test]
    fn heading_text_span_is_absolute() {
        let lines = classify_all("x\n### Title\n", 4);
        assert_eq!(
            lines[1].kind,
            LineKind::Heading {
                level: 3,
                text: Span::new(6, 11)
            }
        );
    }

    #[test]
    fn empty_quote_line_has_empty_text() {
        let lines = classify_all(">\n", 4);
        match lines[0].kind {
            LineKind::Quote { depth, text } => {
                assert_eq!(depth, 1);
                assert!(text.is_empty());
            }
            ref other => panic!("expected quote, got {other:?}"),
        }
    }

    #[test]
    fn blank_lines() {
        let lines = classify_all("\n \t \n", 4);
        assert!(lines.iter().all(|l| l.kind == LineKind::Blank));
    }

    #[test]
    fn fence_sig_accessor() {
        let lines = classify_all("```rust\nx\n", 4);
        assert_eq!(lines[0].fence_sig().map(|s| s.info.as_str()), Some("rust"));
        assert!(lines[1].fence_sig().is_none());
    }
}
