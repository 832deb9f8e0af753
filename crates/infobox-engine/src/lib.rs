pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod resolve;

// Re-export key types for easier usage
pub use models::*;
pub use parsing::{
    Diagnostic, DiagnosticKind, LinkShape, ParseOutput, parse_document,
    parse_document_with_diagnostics,
};
pub use render::{
    Cell, HtmlRenderer, RenderOptions, RenderSink, ResolvedLink, RowValue, render_document,
    render_html,
};
pub use resolve::{IdentityResolver, LinkResolver, MapResolver};
