use serde::{Serialize, Serializer};

use super::rich_text::{InlineSpan, plain_text};

/// A heading depth the target schema supports (1-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MAX: u8 = 3;

    /// Clamps a Markdown heading level (1-6) into 1-3.
    ///
    /// Levels 4-6 collapse to 3; this mapping is lossy.
    pub fn clamped(level: u8) -> Self {
        Self(level.clamp(1, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// The kind of a block plus its kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading { level: HeadingLevel },
    BulletedListItem,
    NumberedListItem,
    Quote,
    Code { language: String },
    Divider,
    ToDo { checked: bool },
}

impl BlockType {
    /// The `type` string used by the content-block schema.
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading { level } => match level.get() {
                1 => "heading_1",
                2 => "heading_2",
                _ => "heading_3",
            },
            BlockType::BulletedListItem => "bulleted_list_item",
            BlockType::NumberedListItem => "numbered_list_item",
            BlockType::Quote => "quote",
            BlockType::Code { .. } => "code",
            BlockType::Divider => "divider",
            BlockType::ToDo { .. } => "to_do",
        }
    }

    /// Whether blocks of this type may carry nested children.
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            BlockType::BulletedListItem | BlockType::NumberedListItem | BlockType::ToDo { .. }
        )
    }
}

/// One structural unit of the converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockType,
    pub rich_text: Vec<InlineSpan>,
    /// Nested list items; always empty unless `kind.accepts_children()`.
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(kind: BlockType, rich_text: Vec<InlineSpan>) -> Self {
        Self {
            kind,
            rich_text,
            children: vec![],
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    /// Concatenated text of this block's rich text (children excluded).
    pub fn plain_text(&self) -> String {
        plain_text(&self.rich_text)
    }
}

#[derive(Serialize)]
struct BlockRepr<'a> {
    object: &'static str,
    #[serde(rename = "type")]
    block_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    heading_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checked: Option<bool>,
    rich_text: &'a [InlineSpan],
    #[serde(skip_serializing_if = "no_children")]
    children: &'a [Block],
}

fn no_children(children: &&[Block]) -> bool {
    children.is_empty()
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (heading_level, language, checked) = match &self.kind {
            BlockType::Heading { level } => (Some(level.get()), None, None),
            BlockType::Code { language } => (None, Some(language.as_str()), None),
            BlockType::ToDo { checked } => (None, None, Some(*checked)),
            _ => (None, None, None),
        };
        BlockRepr {
            object: "block",
            block_type: self.kind.type_name(),
            heading_level,
            language,
            checked,
            rich_text: &self.rich_text,
            children: &self.children,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn heading_levels_clamp_to_three() {
        assert_eq!(HeadingLevel::clamped(1).get(), 1);
        assert_eq!(HeadingLevel::clamped(3).get(), 3);
        assert_eq!(HeadingLevel::clamped(6).get(), 3);
        assert_eq!(HeadingLevel::clamped(0).get(), 1);
    }

    #[test]
    fn heading_serializes_type_and_level() {
        let block = Block::new(
            BlockType::Heading {
                level: HeadingLevel::clamped(2),
            },
            vec![InlineSpan::plain("Title")],
        );
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["object"], "block");
        assert_eq!(json["type"], "heading_2");
        assert_eq!(json["heading_level"], 2);
        assert!(json.get("children").is_none());
        assert!(json.get("language").is_none());
    }

    #[test]
    fn divider_has_empty_rich_text() {
        let json = serde_json::to_value(Block::new(BlockType::Divider, vec![])).unwrap();
        assert_eq!(
            json,
            json!({"object": "block", "type": "divider", "rich_text": []})
        );
    }

    #[test]
    fn todo_with_children_serializes_checked_and_children() {
        let block = Block::new(BlockType::ToDo { checked: true }, vec![InlineSpan::plain("a")])
            .with_children(vec![Block::new(
                BlockType::BulletedListItem,
                vec![InlineSpan::plain("b")],
            )]);
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "to_do");
        assert_eq!(json["checked"], true);
        assert_eq!(json["children"][0]["type"], "bulleted_list_item");
    }

    #[test]
    fn code_carries_language() {
        let block = Block::new(
            BlockType::Code {
                language: "rust".into(),
            },
            vec![InlineSpan::plain("fn main() {}")],
        );
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["language"], "rust");
        assert_eq!(json["rich_text"][0]["plain_text"], "fn main() {}");
    }

    #[test]
    fn serialization_is_stable() {
        let block = Block::new(BlockType::Quote, vec![InlineSpan::plain("q")]);
        let a = serde_json::to_string(&block).unwrap();
        let b = serde_json::to_string(&block).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn only_list_kinds_accept_children() {
        assert!(BlockType::NumberedListItem.accepts_children());
        assert!(BlockType::ToDo { checked: false }.accepts_children());
        assert!(!BlockType::Paragraph.accepts_children());
        assert!(!BlockType::Divider.accepts_children());
    }
}
