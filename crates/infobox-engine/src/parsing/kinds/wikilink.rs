/// `[[target]]` or `[[target|label]]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALIAS: u8 = b'|';
}
