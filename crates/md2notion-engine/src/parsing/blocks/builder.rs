use crate::{error::ConversionError, parsing::rope::span::Span};

use super::{
    classify::{LineClass, LineKind},
    containers::ListStack,
    content::{ContentLine, ContentView},
    kinds::{CodeFence, FenceSig},
    types::{BlockKind, BlockNode, ListFrame},
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        span: Span,
        lines: Vec<ContentLine>,
    },
    Quote {
        span: Span,
        lines: Vec<ContentLine>,
    },
    Fence {
        sig: FenceSig,
        /// Indent of the opening line, in columns.
        indent: usize,
        span: Span,
        lines: Vec<ContentLine>,
    },
}

/// Line-by-line block segmentation state.
///
/// Holds the open leaf (paragraph, quote or fence), the list nesting stack
/// and the finished top-level nodes. Created per conversion and consumed by
/// [`BlockBuilder::finish`].
pub struct BlockBuilder {
    lists: ListStack,
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            lists: ListStack::default(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) -> Result<(), ConversionError> {
        if self.in_fence() {
            self.consume_fence_line(c);
            return Ok(());
        }

        match &c.kind {
            LineKind::Blank => {
                self.flush_leaf();
                self.lists.close_all(&mut self.out)?;
            }
            LineKind::Fence(sig) => {
                self.flush_leaf();
                self.lists.close_all(&mut self.out)?;
                self.leaf = LeafState::Fence {
                    sig: sig.clone(),
                    indent: c.indent,
                    span: c.line,
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => {
                self.flush_leaf();
                self.lists.close_all(&mut self.out)?;
                self.out.push(BlockNode::leaf(
                    BlockKind::Heading { level: *level },
                    c.line,
                    ContentView::Contiguous(*text),
                ));
            }
            LineKind::ThematicBreak => {
                self.flush_leaf();
                self.lists.close_all(&mut self.out)?;
                self.out.push(BlockNode::leaf(
                    BlockKind::ThematicBreak,
                    c.line,
                    ContentView::Contiguous(Span::new(c.line.start, c.line.start)),
                ));
            }
            LineKind::Quote { text, .. } => {
                if !matches!(self.leaf, LeafState::Quote { .. }) {
                    self.flush_leaf();
                    self.lists.close_all(&mut self.out)?;
                }
                self.extend_quote(c, *text);
            }
            LineKind::ListItem {
                kind,
                task,
                marker,
                text,
            } => {
                self.flush_leaf();
                let line = ContentLine {
                    raw_line: c.line,
                    prefix: Span::new(c.content.start, marker.end),
                    content: *text,
                };
                let node = BlockNode::leaf(
                    BlockKind::ListItem {
                        kind: *kind,
                        task: *task,
                    },
                    c.line,
                    ContentView::Lines(vec![line]),
                );
                let frame = ListFrame {
                    indent: c.indent,
                    kind: *kind,
                };
                self.lists.open(frame, node, &mut self.out)?;
            }
            LineKind::Text { text } => self.extend_text(c, *text),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Vec<BlockNode>, ConversionError> {
        // EOF flush; an unterminated fence is closed here.
        self.flush_leaf();
        self.lists.close_all(&mut self.out)?;
        Ok(self.out)
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            sig,
            indent,
            span,
            lines,
        } = &mut self.leaf
        else {
            return;
        };
        *span = span.cover(c.line);

        if CodeFence::closes(sig, c.fence_sig(), c.indent.saturating_sub(*indent)) {
            self.flush_leaf();
        } else {
            lines.push(ContentLine::verbatim(c.line, c.content));
        }
    }

    fn extend_quote(&mut self, c: &LineClass, text: Span) {
        let line = ContentLine {
            raw_line: c.line,
            prefix: Span::new(c.content.start, text.start),
            content: text,
        };
        match &mut self.leaf {
            LeafState::Quote { span, lines } => {
                *span = span.cover(c.line);
                lines.push(line);
            }
            _ => {
                self.leaf = LeafState::Quote {
                    span: c.line,
                    lines: vec![line],
                }
            }
        }
    }

    /// Plain text continues the open paragraph, else the innermost open
    /// list item, else starts a new paragraph.
    fn extend_text(&mut self, c: &LineClass, text: Span) {
        let line = ContentLine {
            raw_line: c.line,
            prefix: Span::new(c.content.start, text.start),
            content: text,
        };

        if let LeafState::Paragraph { span, lines } = &mut self.leaf {
            *span = span.cover(c.line);
            lines.push(line);
            return;
        }

        if matches!(self.leaf, LeafState::None)
            && let Some(item) = self.lists.top_mut()
        {
            item.span = item.span.cover(c.line);
            if let ContentView::Lines(lines) = &mut item.content {
                lines.push(line);
            }
            return;
        }

        self.flush_leaf();
        self.leaf = LeafState::Paragraph {
            span: c.line,
            lines: vec![line],
        };
    }

    fn flush_leaf(&mut self) {
        let node = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph { span, lines } => {
                BlockNode::leaf(BlockKind::Paragraph, span, ContentView::Lines(lines))
            }
            LeafState::Quote { span, lines } => {
                BlockNode::leaf(BlockKind::BlockQuote, span, ContentView::Lines(lines))
            }
            LeafState::Fence { sig, span, lines, .. } => BlockNode::leaf(
                BlockKind::FencedCode {
                    kind: sig.kind,
                    info: sig.info,
                },
                span,
                ContentView::Lines(lines),
            ),
        };
        self.out.push(node);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
