//! Escape-aware splitting.
//!
//! A delimiter is a split point only when it is not escaped. The escape flag
//! is set by a backslash and cleared by whatever byte follows it, so `\|` is
//! literal while `\\|` splits after the second backslash.
//!
//! [`unescape`] replaces only the designated `\<delimiter>` pair; every other
//! backslash stays.

use std::iter::Enumerate;
use std::str::Bytes;

use super::kinds::Escape;

/// Byte offset of the first unescaped `delim` in `s`.
pub fn find_unescaped(s: &str, delim: u8) -> Option<usize> {
    UnescapedPositions::new(s, delim).next()
}

/// Splits `s` at the first unescaped `delim`, dropping the delimiter.
pub fn split_once_unescaped(s: &str, delim: u8) -> Option<(&str, &str)> {
    let at = find_unescaped(s, delim)?;
    Some((&s[..at], &s[at + 1..]))
}

/// Splits `s` on every unescaped `delim`.
///
/// Always yields at least one segment; escapes are left in place.
pub fn split_unescaped(s: &str, delim: u8) -> Vec<&str> {
    let mut out = vec![];
    let mut start = 0;
    for at in UnescapedPositions::new(s, delim) {
        out.push(&s[start..at]);
        start = at + 1;
    }
    out.push(&s[start..]);
    out
}

/// Replaces the literal pair `\<delim>` with `<delim>`.
pub fn unescape(s: &str, delim: u8) -> String {
    let pair: String = [Escape::CHAR as char, delim as char].iter().collect();
    s.replace(&pair, &(delim as char).to_string())
}

/// Iterator over the byte offsets of unescaped delimiters.
///
/// Delimiters are ASCII, so every offset it yields is a `str` slice boundary.
struct UnescapedPositions<'a> {
    bytes: Enumerate<Bytes<'a>>,
    delim: u8,
    escaped: bool,
}

impl<'a> UnescapedPositions<'a> {
    fn new(s: &'a str, delim: u8) -> Self {
        debug_assert!(delim.is_ascii(), "delimiters must be ASCII");
        Self {
            bytes: s.bytes().enumerate(),
            delim,
            escaped: false,
        }
    }
}

impl Iterator for UnescapedPositions<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for (at, b) in self.bytes.by_ref() {
            if self.escaped {
                self.escaped = false;
            } else if b == Escape::CHAR {
                self.escaped = true;
            } else if b == self.delim {
                return Some(at);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a|b", Some(1))]
    #[case(r"a\|b|c", Some(4))]
    #[case(r"a\|b", None)]
    #[case(r"a\\|b", Some(3))]
    #[case("", None)]
    #[case("|", Some(0))]
    fn finds_first_unescaped(#[case] input: &str, #[case] expected: Option<usize>) {
        assert_eq!(find_unescaped(input, b'|'), expected);
    }

    #[test]
    fn split_once_drops_delimiter() {
        assert_eq!(
            split_once_unescaped(r"Time\::Noon", b':'),
            Some((r"Time\:", "Noon"))
        );
        assert_eq!(split_once_unescaped("no colon", b':'), None);
    }

    #[test]
    fn split_keeps_escapes_and_empty_segments() {
        assert_eq!(
            split_unescaped(r"Red\;White;Blue;", b';'),
            vec![r"Red\;White", "Blue", ""]
        );
        assert_eq!(split_unescaped("", b';'), vec![""]);
    }

    #[test]
    fn unescape_touches_only_the_designated_pair() {
        assert_eq!(unescape(r"Red\;White", b';'), "Red;White");
        assert_eq!(unescape(r"C:\path\;x\:y", b';'), r"C:\path;x\:y");
        assert_eq!(unescape(r"a\\b", b';'), r"a\\b");
    }

    #[rstest]
    #[case(r"a\|b|c\\|d|e", vec![4, 8, 10])]
    #[case(r"\\\|", vec![])]
    #[case("|||", vec![0, 1, 2])]
    #[case("\\", vec![])]
    fn escape_flag_covers_exactly_one_byte(#[case] input: &str, #[case] expected: Vec<usize>) {
        assert_eq!(UnescapedPositions::new(input, b'|').collect::<Vec<_>>(), expected);
    }

    #[test]
    fn trailing_escape_ends_the_scan() {
        let mut positions = UnescapedPositions::new(r"a|\", b'|');
        assert_eq!(positions.next(), Some(1));
        assert_eq!(positions.next(), None);
        assert_eq!(positions.next(), None);
    }

    #[test]
    fn multibyte_text_around_delimiters() {
        assert_eq!(split_unescaped("é;ü", b';'), vec!["é", "ü"]);
        assert_eq!(split_once_unescaped("日本:語", b':'), Some(("日本", "語")));
    }
}
