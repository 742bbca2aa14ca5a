/// ATX heading (`#` .. `######`).
pub struct Heading;

/// A detected heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMatch {
    /// Source level, 1-6. Clamping to the target schema happens at assembly.
    pub level: u8,
    /// Byte range of the heading text within the examined string.
    pub text: (usize, usize),
}

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Matches `#{1,6}` followed by whitespace or end of line.
    ///
    /// An optional closing sequence of `#` (preceded by whitespace) is
    /// excluded from the text.
    pub fn parse(s: &str) -> Option<HeadingMatch> {
        let b = s.as_bytes();
        let hashes = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        if let Some(&next) = b.get(hashes)
            && next != b' '
            && next != b'\t'
        {
            return None;
        }

        let rest = &s[hashes..];
        let lead = rest.len() - rest.trim_start().len();
        let start = hashes + lead;
        let mut body = s[start..].trim_end();

        let without_closing = body.trim_end_matches('#');
        if without_closing.is_empty() {
            body = without_closing;
        } else if without_closing.len() != body.len()
            && without_closing.ends_with([' ', '\t'])
        {
            body = without_closing.trim_end();
        }

        Some(HeadingMatch {
            level: hashes as u8,
            text: (start, start + body.len()),
        })
    }
}
