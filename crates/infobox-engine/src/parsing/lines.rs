use super::span::Span;

/// A single source line with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Byte span of the raw line in the source (includes the newline if present).
    pub span: Span,
    /// Line text without the trailing `\n` or `\r\n`.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `split_inclusive` so spans cover the newline, while `text` is the line
/// content only. A trailing `\r` is treated as part of the line terminator.
pub fn lines_with_spans(source: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    source
        .split_inclusive('\n')
        .enumerate()
        .map(move |(idx, raw)| {
            let start = offset;
            offset += raw.len();
            let text = raw.strip_suffix('\n').unwrap_or(raw);
            let text = text.strip_suffix('\r').unwrap_or(text);
            LineRef {
                number: idx + 1,
                span: Span { start, end: offset },
                text,
            }
        })
}
