//! # Parsing
//!
//! Line-oriented, single-pass parsing of infobox markup into a [`Document`].
//!
//! ## Stages
//!
//! 1. **Thumbnail scan** (`thumbnails`): every `!` line becomes a `Thumbnail`
//! 2. **Group split** (`groups`): `#` lines open groups that own the lines below
//! 3. **Entry decode** (`entries`): `-key:value` lines become `TableEntry`s
//!
//! All stages see the same line stream; none consumes lines from another.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter constants owned by each line kind
//! - **`escape`**: escape-aware splitting shared by every stage
//! - **`lines`** / **`span`**: line iteration with byte spans
//! - **`link`**: `[[target|label]]` recognition for renderers
//! - **`diagnostics`**: optional report of skipped lines
//!
//! Parsing is total: malformed lines are dropped, never reported as errors.

pub mod diagnostics;
pub mod entries;
pub mod escape;
pub mod groups;
pub mod kinds;
pub mod lines;
pub mod link;
pub mod span;
pub mod thumbnails;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use entries::decode_entry;
pub use groups::{GroupBuilder, split_groups};
pub use link::LinkShape;
pub use span::Span;
pub use thumbnails::scan_thumbnails;

use crate::{models::Document, resolve::LinkResolver};

use lines::lines_with_spans;

/// A parsed document together with the lines that were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOutput {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses `source` into a [`Document`].
///
/// Thumbnail urls are passed through `resolver` before they are stored.
pub fn parse_document<R>(source: &str, resolver: &R) -> Document
where
    R: LinkResolver + ?Sized,
{
    parse_document_with_diagnostics(source, resolver).document
}

/// Like [`parse_document`], also reporting every line that was skipped.
pub fn parse_document_with_diagnostics<R>(source: &str, resolver: &R) -> ParseOutput
where
    R: LinkResolver + ?Sized,
{
    let mut thumbnails = vec![];
    let mut builder = GroupBuilder::new();
    let mut diagnostics = vec![];

    for lr in lines_with_spans(source) {
        if let Some(thumbnail) = thumbnails::scan_line(lr.text, resolver) {
            thumbnails.push(thumbnail);
        }
        if let Some(kind) = builder.push(&lr) {
            log::debug!("skipping line {}: {kind}", lr.number);
            diagnostics.push(Diagnostic {
                line: lr.number,
                span: lr.span,
                kind,
            });
        }
    }

    ParseOutput {
        document: Document {
            thumbnails,
            groups: builder.finish(),
        },
        diagnostics,
    }
}
