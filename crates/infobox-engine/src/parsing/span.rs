/// A byte range `[start, end)` into the markup source.
///
/// Diagnostics carry spans so callers can point back at the exact line that
/// was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Saturates at zero.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `source` with this span.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}
