/// Backslash escape: `\<delimiter>` makes the delimiter literal.
pub struct Escape;

impl Escape {
    pub const CHAR: u8 = b'\\';
}
