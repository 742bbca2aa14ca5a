use crate::parsing::inline::cursor::Cursor;

/// Backslash escapes: `\*` is a literal `*`.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// If the cursor is on `\` followed by ASCII punctuation, consumes both
    /// and returns the escaped character.
    pub fn try_parse(cur: &mut Cursor<'_>) -> Option<char> {
        if cur.peek() != Some(Self::BACKSLASH) {
            return None;
        }
        let next = cur.peek_at(1)?;
        if !next.is_ascii_punctuation() {
            return None;
        }
        cur.bump_n(2);
        Some(next as char)
    }
}
