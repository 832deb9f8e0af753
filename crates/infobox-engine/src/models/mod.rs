pub mod document;

pub use document::{Document, Group, TableEntry, Thumbnail, Value};
