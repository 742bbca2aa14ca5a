/// Horizontal rule: three or more `-`, `*` or `_` alone on a line.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_RUN: usize = 3;

    /// `s` must already have its leading whitespace stripped.
    pub fn matches(s: &str) -> bool {
        let t = s.trim_end();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::CHARS.contains(&first)
            && t.len() >= Self::MIN_RUN
            && t.chars().all(|c| c == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_stars_underscores() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("***"));
        assert!(ThematicBreak::matches("_____"));
        assert!(ThematicBreak::matches("---   "));
    }

    #[test]
    fn mixed_or_short_runs_do_not_match() {
        assert!(!ThematicBreak::matches("--"));
        assert!(!ThematicBreak::matches("-*-"));
        assert!(!ThematicBreak::matches("--- x"));
        assert!(!ThematicBreak::matches(""));
    }
}
