//! # Rendering
//!
//! A [`RenderSink`] receives a parsed [`Document`] as a flat sequence of
//! calls: the thumbnail strip first, then each group header followed by its
//! rows. [`render_document`] drives a sink and is where link-shaped values
//! are recognised and resolved, so sinks never deal with escapes.

pub mod html;

pub use html::{HtmlRenderer, RenderOptions, render_html};

use crate::{
    models::{Document, Thumbnail, Value},
    parsing::LinkShape,
    resolve::LinkResolver,
};

/// A link after resolution, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Resolver output for the link target.
    pub target: String,
    /// Explicit label, or the resolver's display name for `target`.
    pub label: String,
}

/// One displayable string: plain text or a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<'a> {
    Text(&'a str),
    Link(ResolvedLink),
}

/// The value column of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValue<'a> {
    Single(Cell<'a>),
    /// Rendered as bullets.
    List(Vec<Cell<'a>>),
}

pub trait RenderSink {
    /// Called once before the thumbnails, only when there are any.
    fn start_thumbnails(&mut self, _count: usize) {}
    fn thumbnail(&mut self, thumbnail: &Thumbnail);
    fn end_thumbnails(&mut self) {}

    fn group_header(&mut self, name: &str);
    fn entry(&mut self, key: &str, value: RowValue<'_>);
    fn end_group(&mut self) {}
}

/// Feeds `document` to `sink` in display order.
pub fn render_document<R, S>(document: &Document, resolver: &R, sink: &mut S)
where
    R: LinkResolver + ?Sized,
    S: RenderSink + ?Sized,
{
    if !document.thumbnails.is_empty() {
        sink.start_thumbnails(document.thumbnails.len());
        for thumbnail in &document.thumbnails {
            sink.thumbnail(thumbnail);
        }
        sink.end_thumbnails();
    }

    for group in &document.groups {
        sink.group_header(&group.name);
        for entry in &group.entries {
            let value = match &entry.value {
                Value::Plain(text) => RowValue::Single(cell(text, resolver)),
                Value::List(items) => {
                    RowValue::List(items.iter().map(|item| cell(item, resolver)).collect())
                }
            };
            sink.entry(&entry.key, value);
        }
        sink.end_group();
    }
}

/// Turns a stored value into a [`Cell`], resolving it if it is link-shaped.
pub fn cell<'a, R>(value: &'a str, resolver: &R) -> Cell<'a>
where
    R: LinkResolver + ?Sized,
{
    match LinkShape::parse(value) {
        Some(link) => {
            let target = resolver.resolve(&link.target);
            let label = link
                .label
                .unwrap_or_else(|| resolver.display_name(&target));
            Cell::Link(ResolvedLink { target, label })
        }
        None => Cell::Text(value),
    }
}
