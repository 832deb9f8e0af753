use crate::{models::Thumbnail, resolve::LinkResolver};

use super::{
    escape::{split_once_unescaped, unescape},
    kinds::ThumbnailLine,
    lines::lines_with_spans,
};

/// Collects a [`Thumbnail`] for every `!`-prefixed line in `source`.
///
/// Lines are not consumed: group splitting runs over the same source and
/// simply never matches these lines.
pub fn scan_thumbnails<R>(source: &str, resolver: &R) -> Vec<Thumbnail>
where
    R: LinkResolver + ?Sized,
{
    lines_with_spans(source)
        .filter_map(|lr| scan_line(lr.text, resolver))
        .collect()
}

/// Decodes a single thumbnail line, or `None` if the line isn't one.
///
/// The first unescaped `|` separates url from description; `\|` is unescaped
/// on both sides. The url goes through `resolver` before it is stored.
pub fn scan_line<R>(line: &str, resolver: &R) -> Option<Thumbnail>
where
    R: LinkResolver + ?Sized,
{
    let body = ThumbnailLine::body(line)?;
    let (url, description) = match split_once_unescaped(body, ThumbnailLine::SEPARATOR) {
        Some((url, description)) => (url, Some(unescape(description, ThumbnailLine::SEPARATOR))),
        None => (body, None),
    };
    let url = unescape(url, ThumbnailLine::SEPARATOR);

    Some(Thumbnail {
        url: resolver.resolve(&url),
        description,
    })
}
