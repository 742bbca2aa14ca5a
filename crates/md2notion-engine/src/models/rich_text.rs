use serde::{Serialize, Serializer};

/// Notion's per-item limit on rich text content, in characters.
pub const MAX_TEXT_CONTENT: usize = 2000;

/// Formatting flags applied to one run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
}

impl Annotations {
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        strikethrough: false,
        code: false,
    };
    pub const BOLD: Self = Self {
        bold: true,
        ..Self::PLAIN
    };
    pub const ITALIC: Self = Self {
        italic: true,
        ..Self::PLAIN
    };
    pub const STRIKETHROUGH: Self = Self {
        strikethrough: true,
        ..Self::PLAIN
    };
    pub const CODE: Self = Self {
        code: true,
        ..Self::PLAIN
    };

    /// Union of two annotation sets.
    #[must_use]
    pub fn with(self, other: Annotations) -> Annotations {
        Annotations {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            strikethrough: self.strikethrough || other.strikethrough,
            code: self.code || other.code,
        }
    }
}

#[derive(Serialize)]
struct AnnotationsRepr {
    bold: bool,
    italic: bool,
    strikethrough: bool,
    underline: bool,
    code: bool,
    color: &'static str,
}

impl Serialize for Annotations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AnnotationsRepr {
            bold: self.bold,
            italic: self.italic,
            strikethrough: self.strikethrough,
            // Markdown has no underline syntax
            underline: false,
            code: self.code,
            color: "default",
        }
        .serialize(serializer)
    }
}

/// A run of text with uniform formatting and an optional link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub annotations: Annotations,
    pub href: Option<String>,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, annotations: Annotations) -> Self {
        Self {
            text: text.into(),
            annotations,
            href: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Annotations::PLAIN)
    }

    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Whether `other` could be appended to this span without changing meaning.
    fn same_format(&self, other: &InlineSpan) -> bool {
        self.annotations == other.annotations && self.href == other.href
    }
}

#[derive(Serialize)]
struct LinkRepr<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct TextRepr<'a> {
    content: &'a str,
    link: Option<LinkRepr<'a>>,
}

#[derive(Serialize)]
struct InlineSpanRepr<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextRepr<'a>,
    annotations: &'a Annotations,
    plain_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<&'a str>,
}

impl Serialize for InlineSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let href = self.href.as_deref();
        InlineSpanRepr {
            kind: "text",
            text: TextRepr {
                content: &self.text,
                link: href.map(|url| LinkRepr { url }),
            },
            annotations: &self.annotations,
            plain_text: &self.text,
            href,
        }
        .serialize(serializer)
    }
}

/// Concatenated text of a rich text sequence.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Drops empty spans and joins neighbours with identical formatting.
pub fn merge_adjacent(spans: impl IntoIterator<Item = InlineSpan>) -> Vec<InlineSpan> {
    let mut out: Vec<InlineSpan> = vec![];
    for span in spans {
        if span.text.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.same_format(&span) => last.text.push_str(&span.text),
            _ => out.push(span),
        }
    }
    out
}

/// Splits spans longer than `max` characters into consecutive spans with the
/// same formatting. Concatenated text is unchanged.
pub fn split_long_spans(spans: Vec<InlineSpan>, max: usize) -> Vec<InlineSpan> {
    let max = max.max(1);
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.text.chars().count() <= max {
            out.push(span);
            continue;
        }
        let chars: Vec<char> = span.text.chars().collect();
        for chunk in chars.chunks(max) {
            out.push(InlineSpan {
                text: chunk.iter().collect(),
                annotations: span.annotations,
                href: span.href.clone(),
            });
        }
    }
    out
}
