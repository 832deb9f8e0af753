use std::fmt;

use super::span::Span;

/// Why a line was left out of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `-` line with no unescaped `:`.
    MissingKeySeparator,
    /// `-` line before the first `#` header.
    EntryOutsideGroup,
    /// Non-blank line that starts with none of `!`, `#`, `-`.
    UnrecognizedLine,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MissingKeySeparator => write!(f, "entry has no unescaped ':'"),
            DiagnosticKind::EntryOutsideGroup => write!(f, "entry appears before any group header"),
            DiagnosticKind::UnrecognizedLine => write!(f, "line is not a thumbnail, header or entry"),
        }
    }
}

/// A skipped line. Collected only on request; parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    pub span: Span,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_number() {
        let d = Diagnostic {
            line: 7,
            span: Span { start: 40, end: 52 },
            kind: DiagnosticKind::MissingKeySeparator,
        };
        assert_eq!(d.to_string(), "line 7: entry has no unescaped ':'");
    }
}
