use crate::models::Annotations;

/// Emphasis and strikethrough delimiter characters.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const TILDE: u8 = b'~';
    /// Strikethrough only uses runs of exactly this many tildes.
    pub const TILDE_RUN: usize = 2;

    pub fn is_delimiter(b: u8) -> bool {
        matches!(b, Self::STAR | Self::UNDERSCORE | Self::TILDE)
    }

    /// Annotation produced by matching `used` delimiter chars of `ch`.
    pub fn mark(ch: u8, used: usize) -> Annotations {
        match (ch, used) {
            (Self::TILDE, _) => Annotations::STRIKETHROUGH,
            (_, 2) => Annotations::BOLD,
            _ => Annotations::ITALIC,
        }
    }

    /// Computes (can_open, can_close) for a delimiter run.
    ///
    /// `before` / `after` are the chars adjacent to the run; `None` means the
    /// start or end of the text, which counts as whitespace.
    pub fn flanking(ch: u8, before: Option<char>, after: Option<char>) -> (bool, bool) {
        let ws_before = before.is_none_or(char::is_whitespace);
        let ws_after = after.is_none_or(char::is_whitespace);
        let punct_before = before.is_some_and(is_punctuation);
        let punct_after = after.is_some_and(is_punctuation);

        let left = !ws_after && (!punct_after || ws_before || punct_before);
        let right = !ws_before && (!punct_before || ws_after || punct_after);

        match ch {
            // Intraword underscores never open or close
            Self::UNDERSCORE => (
                left && (!right || punct_before),
                right && (!left || punct_after),
            ),
            _ => (left, right),
        }
    }
}

/// Punctuation for flanking purposes: ASCII punctuation plus any other
/// non-alphanumeric, non-whitespace symbol.
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_whitespace() && !c.is_control())
}
