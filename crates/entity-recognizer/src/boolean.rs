//! Yes/no detection.
//!
//! The trimmed input must start with one of the fixed words, followed by a
//! non-word character or the end, so "yes please" is affirmative and
//! "yesterday" is neither.

use std::sync::LazyLock;

use regex::Regex;

static YES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:1|y|yes|yep|sure|ok|true)(?:\W|$)").unwrap());

static NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:0|n|no|nope|not|false)(?:\W|$)").unwrap());

/// `Some(true)` for affirmative input, `Some(false)` for negative, `None` otherwise.
pub fn parse_boolean(text: &str) -> Option<bool> {
    let text = text.trim();
    if YES_RE.is_match(text) {
        Some(true)
    } else if NO_RE.is_match(text) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_words() {
        for word in ["1", "y", "yes", "Yep", "SURE", "ok", "true"] {
            assert_eq!(parse_boolean(word), Some(true), "word: {word}");
        }
    }

    #[test]
    fn test_negative_words() {
        for word in ["0", "n", "No", "nope", "not", "FALSE"] {
            assert_eq!(parse_boolean(word), Some(false), "word: {word}");
        }
    }

    #[test]
    fn test_neither() {
        assert_eq!(parse_boolean("maybe"), None);
        assert_eq!(parse_boolean(""), None);
        assert_eq!(parse_boolean("yesterday"), None);
        assert_eq!(parse_boolean("nothing"), None);
    }

    #[test]
    fn test_trailing_words_and_whitespace() {
        assert_eq!(parse_boolean("  yes please "), Some(true));
        assert_eq!(parse_boolean("no, thanks"), Some(false));
        assert_eq!(parse_boolean("ok!"), Some(true));
        assert_eq!(parse_boolean("not really"), Some(false));
    }
}
