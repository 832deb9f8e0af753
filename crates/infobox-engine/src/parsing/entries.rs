use crate::models::{TableEntry, Value};

use super::{
    escape::{split_once_unescaped, split_unescaped, unescape},
    kinds::EntryLine,
};

/// Decodes a raw `-<key>:<value>` line.
///
/// Returns `None` when the line isn't an entry candidate or has no unescaped
/// `:`.
pub fn decode_entry(line: &str) -> Option<TableEntry> {
    decode_entry_body(EntryLine::body(line)?)
}

/// Decodes the part of an entry line after the `-` marker.
///
/// The key is split off at the first unescaped `:` and has `\:` unescaped.
/// The value is split on every unescaped `;`, each segment has `\;`
/// unescaped, and a single segment collapses into [`Value::Plain`].
/// Link-shaped segments are stored verbatim apart from that `\;` decoding.
pub fn decode_entry_body(body: &str) -> Option<TableEntry> {
    let (key, value_text) = split_once_unescaped(body, EntryLine::KEY_SEPARATOR)?;
    let key = unescape(key, EntryLine::KEY_SEPARATOR);

    let segments = split_unescaped(value_text, EntryLine::LIST_SEPARATOR)
        .into_iter()
        .map(|seg| unescape(seg, EntryLine::LIST_SEPARATOR));

    Some(TableEntry {
        key,
        value: Value::from_segments(segments),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(key: &str, value: &str) -> TableEntry {
        TableEntry::new(key, Value::Plain(value.into()))
    }

    fn list(key: &str, values: &[&str]) -> TableEntry {
        TableEntry::new(
            key,
            Value::List(values.iter().map(|s| s.to_string()).collect()),
        )
    }

    #[rstest]
    #[case("-HP:10", plain("HP", "10"))]
    #[case(r"-Time\::Noon", plain("Time:", "Noon"))]
    #[case("-URL:https://example.com", plain("URL", "https://example.com"))]
    #[case("-:value", plain("", "value"))]
    #[case("-Key:", plain("Key", ""))]
    #[case("-:", plain("", ""))]
    #[case("-Owner:[[John Doe]]", plain("Owner", "[[John Doe]]"))]
    #[case("-Owner:[[John Doe|Johnny]]", plain("Owner", "[[John Doe|Johnny]]"))]
    #[case(r"-Owner:[[A\|B]]", plain("Owner", r"[[A\|B]]"))]
    #[case(r"-Path:C:\dir\file", plain("Path", r"C:\dir\file"))]
    fn decodes_plain_values(#[case] line: &str, #[case] expected: TableEntry) {
        assert_eq!(decode_entry(line), Some(expected));
    }

    #[rstest]
    #[case("-Tags:Red;Blue;Green", list("Tags", &["Red", "Blue", "Green"]))]
    #[case(r"-Tags:Red\;White;Blue", list("Tags", &["Red;White", "Blue"]))]
    #[case("-Tags:a;", list("Tags", &["a", ""]))]
    #[case("-Who:[[A]];[[B|b]]", list("Who", &["[[A]]", "[[B|b]]"]))]
    fn decodes_lists(#[case] line: &str, #[case] expected: TableEntry) {
        assert_eq!(decode_entry(line), Some(expected));
    }

    #[test]
    fn escaped_list_separator_alone_stays_plain() {
        assert_eq!(decode_entry(r"-Note:a\;b"), Some(plain("Note", "a;b")));
    }

    #[test]
    fn key_keeps_other_escapes() {
        assert_eq!(decode_entry(r"-a\;b:c"), Some(plain(r"a\;b", "c")));
    }

    #[test]
    fn value_keeps_escaped_colons() {
        assert_eq!(decode_entry(r"-k:a\:b"), Some(plain("k", r"a\:b")));
    }

    #[rstest]
    #[case("-no separator")]
    #[case(r"-escaped\:only")]
    #[case("HP:10")]
    #[case("")]
    fn rejects_non_entries(#[case] line: &str) {
        assert_eq!(decode_entry(line), None);
    }
}
