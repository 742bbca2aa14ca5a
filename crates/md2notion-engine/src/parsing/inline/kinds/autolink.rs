use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::cursor::Cursor;

/// Bare `http://` / `https://` URLs in running text.
pub struct Autolink;

impl Autolink {
    /// Characters allowed directly before a bare URL.
    const LEAD: [char; 4] = ['(', '*', '_', '~'];
    /// Trailing characters treated as sentence punctuation, not URL.
    const TRAIL: [char; 11] = ['.', ',', ':', ';', '!', '?', '\'', '"', '*', '_', '~'];

    /// Attempts to match a bare URL at the cursor.
    ///
    /// The URL must start a word; trailing punctuation and unbalanced
    /// closing parentheses are left out of the match.
    pub fn try_parse<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
        if cur.peek() != Some(b'h') {
            return None;
        }
        if let Some(prev) = cur.prev_char()
            && !prev.is_whitespace()
            && !Self::LEAD.contains(&prev)
        {
            return None;
        }

        let m = url_regex().find(cur.rest())?;
        let url = Self::trim_trailing(m.as_str());
        let host = url.split_once("://").map_or("", |(_, rest)| rest);
        if host.is_empty() {
            return None;
        }
        cur.bump_n(url.len());
        Some(url)
    }

    fn trim_trailing(url: &str) -> &str {
        let opens = url.matches('(').count();
        let mut closes = url.matches(')').count();
        let mut end = url.len();
        loop {
            end = url[..end].trim_end_matches(Self::TRAIL).len();
            if url[..end].ends_with(')') && closes > opens {
                closes -= 1;
                end -= 1;
            } else {
                return &url[..end];
            }
        }
    }
}

fn url_regex() -> &'static Regex {
    // Regex pattern for HTTP/HTTPS URLs
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s<>\[\]]+").expect("Invalid URL regex"))
}
