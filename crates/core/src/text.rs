//! Whitespace tokenization shared by the scorer and the aggregator.

/// Word separator: the set matched by JavaScript's `\s`, i.e. Unicode
/// `White_Space` without U+0085, plus U+FEFF.
#[inline]
#[must_use]
pub fn is_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Returns `true` when `text` has no non-separator character.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_separator)
}

/// Iterates over the non-empty whitespace-delimited tokens of `text`.
///
/// Punctuation stays attached to its token: `"sat."` is one word.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|w| !w.is_empty())
}

#[must_use]
pub fn count_words(text: &str) -> usize {
    words(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn splits_on_any_unicode_space() {
        let tokens: Vec<_> = words("  The\u{a0}cat\tsat.\n\u{feff}on\u{2003}mats ").collect();
        assert_eq!(tokens, ["The", "cat", "sat.", "on", "mats"]);
    }

    #[test]
    fn next_line_is_not_a_separator() {
        assert_eq!(count_words("x\u{85}y"), 1);
        assert!(!is_blank("\u{85}"));
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \n\t\u{a0}\u{feff}"));
        assert!(!is_blank(" . "));
    }

    #[test]
    fn counts_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("a  b\n\nc"), 3);
    }
}
