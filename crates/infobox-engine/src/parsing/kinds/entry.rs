/// `-<key>:<value>` where the value may be a `;`-separated list.
pub struct EntryLine;

impl EntryLine {
    pub const MARKER: u8 = b'-';
    pub const KEY_SEPARATOR: u8 = b':';
    pub const LIST_SEPARATOR: u8 = b';';

    /// The line after the `-` marker, if this is an entry candidate.
    pub fn body(line: &str) -> Option<&str> {
        super::strip_marker(line, Self::MARKER)
    }
}
