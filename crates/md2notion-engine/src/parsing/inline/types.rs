use crate::models::{Annotations, InlineSpan};

/// A run of `*`, `_` or `~` that may open or close emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterRun {
    pub ch: u8,
    /// Chars not yet consumed by a match.
    pub count: usize,
    /// Run length as written, for the rule of three.
    pub orig: usize,
    pub can_open: bool,
    pub can_close: bool,
    /// Formatting applied to leftover chars when rendered as text.
    pub annotations: Annotations,
}

impl DelimiterRun {
    pub fn new(ch: u8, count: usize, can_open: bool, can_close: bool) -> Self {
        Self {
            ch,
            count,
            orig: count,
            can_open,
            can_close,
            annotations: Annotations::PLAIN,
        }
    }
}

/// Intermediate inline item between tokenizing and emphasis resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineItem {
    /// Finished text (plain text, code span or link label).
    Span(InlineSpan),
    /// A delimiter run awaiting a partner.
    Delimiter(DelimiterRun),
}

impl InlineItem {
    pub fn as_delimiter(&self) -> Option<&DelimiterRun> {
        match self {
            InlineItem::Delimiter(d) => Some(d),
            InlineItem::Span(_) => None,
        }
    }

    /// Adds `mark` to this item's formatting.
    pub fn annotate(&mut self, mark: Annotations) {
        match self {
            InlineItem::Span(span) => span.annotations = span.annotations.with(mark),
            InlineItem::Delimiter(d) => d.annotations = d.annotations.with(mark),
        }
    }

    /// Consumes `n` chars of a delimiter run.
    pub fn consume(&mut self, n: usize) {
        if let InlineItem::Delimiter(d) = self {
            d.count = d.count.saturating_sub(n);
        }
    }

    /// Final text span. Fully consumed delimiters vanish; leftover chars
    /// become literal text.
    pub fn into_span(self) -> Option<InlineSpan> {
        match self {
            InlineItem::Span(span) => Some(span),
            InlineItem::Delimiter(d) if d.count > 0 => Some(InlineSpan::new(
                (d.ch as char).to_string().repeat(d.count),
                d.annotations,
            )),
            InlineItem::Delimiter(_) => None,
        }
    }
}
