/// `!<url>` or `!<url>|<description>`.
pub struct ThumbnailLine;

impl ThumbnailLine {
    pub const MARKER: u8 = b'!';
    pub const SEPARATOR: u8 = b'|';

    /// The line after the `!` marker, if this is a thumbnail line.
    pub fn body(line: &str) -> Option<&str> {
        super::strip_marker(line, Self::MARKER)
    }
}
