/// `#<name>`; the name runs to end of line.
pub struct GroupHeader;

impl GroupHeader {
    pub const MARKER: u8 = b'#';

    /// The header text after the `#` marker, taken verbatim.
    pub fn body(line: &str) -> Option<&str> {
        super::strip_marker(line, Self::MARKER)
    }
}
