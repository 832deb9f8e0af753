//! # Line Kinds
//!
//! Each kind of markup line owns its syntax delimiters.
//!
//! ## Types
//!
//! - **`ThumbnailLine`**: `MARKER = b'!'`, `SEPARATOR = b'|'`
//! - **`GroupHeader`**: `MARKER = b'#'`
//! - **`EntryLine`**: `MARKER = b'-'`, `KEY_SEPARATOR = b':'`, `LIST_SEPARATOR = b';'`
//! - **`WikiLink`**: `OPEN = "[["`, `CLOSE = "]]"`, `ALIAS = b'|'`
//! - **`Escape`**: `CHAR = b'\\'`
//!
//! Parser code calls these constants; it never hardcodes `!`, `#` or `[[`.
//! Every delimiter is ASCII.

pub mod entry;
pub mod escape;
pub mod group_header;
pub mod thumbnail;
pub mod wikilink;

pub use entry::EntryLine;
pub use escape::Escape;
pub use group_header::GroupHeader;
pub use thumbnail::ThumbnailLine;
pub use wikilink::WikiLink;

/// Returns the rest of `line` when its first byte is `marker`.
fn strip_marker(line: &str, marker: u8) -> Option<&str> {
    match line.as_bytes().first() {
        Some(&b) if b == marker => Some(&line[1..]),
        _ => None,
    }
}
