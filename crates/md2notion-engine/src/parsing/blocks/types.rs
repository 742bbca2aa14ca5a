use crate::parsing::rope::span::Span;

use super::{content::ContentView, kinds::FenceKind};

/// Which flavour of list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// `-`, `*` or `+` markers.
    Bulleted,
    /// `N.` markers.
    Numbered,
}

/// A frame in the list nesting stack: one open list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    /// Indentation of the item's marker, in columns.
    pub indent: usize,
    pub kind: ListKind,
}

/// The structural kind of a block, as segmented from source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// An ATX heading with its source level (1-6).
    Heading { level: u8 },
    /// One or more consecutive `>` lines; nesting depth is flattened.
    BlockQuote,
    /// A list item. `task` is set for `[ ]` / `[x]` boxes.
    ListItem { kind: ListKind, task: Option<bool> },
    /// A fenced code block (``` or ~~~).
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
        /// Info string from the opening fence.
        info: String,
    },
    /// `---`, `***` or `___` on its own line.
    ThematicBreak,
}

/// A parsed block node with its kind, spans and nested children.
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters and children.
    pub span: Span,
    /// Content for inline parsing (excludes markers, prefixes and fences).
    pub content: ContentView,
    /// Nested list items. Empty for every other kind.
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    pub fn leaf(kind: BlockKind, span: Span, content: ContentView) -> Self {
        Self {
            kind,
            span,
            content,
            children: vec![],
        }
    }
}
