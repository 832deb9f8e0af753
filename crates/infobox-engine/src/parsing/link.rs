use super::{
    escape::{split_once_unescaped, unescape},
    kinds::WikiLink,
};

/// A value recognised as `[[target]]` or `[[target|label]]`.
///
/// The parser keeps link values as plain text; renderers call
/// [`LinkShape::parse`] to decide whether a value is a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkShape {
    /// Reference to resolve, with `\|` unescaped.
    pub target: String,
    /// Explicit label after the first unescaped `|`.
    pub label: Option<String>,
}

impl LinkShape {
    /// Recognises a whole value as a link. Surrounding text, an unclosed
    /// bracket pair or an empty target means it is not a link.
    pub fn parse(value: &str) -> Option<Self> {
        let inner = value
            .strip_prefix(WikiLink::OPEN)?
            .strip_suffix(WikiLink::CLOSE)?;

        let (target, label) = match split_once_unescaped(inner, WikiLink::ALIAS) {
            Some((target, label)) => (target, Some(unescape(label, WikiLink::ALIAS))),
            None => (inner, None),
        };
        let target = unescape(target, WikiLink::ALIAS);
        if target.is_empty() {
            return None;
        }

        Some(Self { target, label })
    }
}
