use super::kinds::{BlockQuote, CodeFence, FenceSig, Heading, ListItem, ThematicBreak};
use super::types::ListKind;

/// The block-start rule a line matched.
///
/// Offsets are byte offsets into the string passed to [`detect_block_start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockStart {
    Fence(FenceSig),
    Heading {
        level: u8,
        text: (usize, usize),
    },
    Quote {
        depth: u8,
        text_offset: usize,
    },
    ListItem {
        kind: ListKind,
        task: Option<bool>,
        text_offset: usize,
    },
    ThematicBreak,
    Blank,
    Text,
}

/// Matches block-start rules against a line with indentation stripped.
///
/// Precedence: fence > heading > blockquote > list item (task boxes are a
/// refinement of bullets) > thematic break > blank > text. Every line
/// matches something, so classification is total.
pub fn detect_block_start(s: &str) -> BlockStart {
    if let Some(sig) = CodeFence::sig(s) {
        return BlockStart::Fence(sig);
    }
    if let Some(h) = Heading::parse(s) {
        return BlockStart::Heading {
            level: h.level,
            text: h.text,
        };
    }
    let (depth, idx) = BlockQuote::strip_prefixes(s);
    if depth > 0 {
        return BlockStart::Quote {
            depth,
            text_offset: idx,
        };
    }
    if let Some(m) = ListItem::parse(s) {
        return BlockStart::ListItem {
            kind: m.kind,
            task: m.task,
            text_offset: m.content_offset,
        };
    }
    if ThematicBreak::matches(s) {
        return BlockStart::ThematicBreak;
    }
    if s.trim().is_empty() {
        return BlockStart::Blank;
    }
    BlockStart::Text
}
