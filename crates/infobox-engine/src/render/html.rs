use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    models::{Document, Thumbnail},
    resolve::LinkResolver,
};

use super::{Cell, RenderSink, RowValue, render_document};

/// Host settings that affect rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// CSS color for group headers; headers are unstyled when `None`.
    pub header_color: Option<String>,
}

/// Renders a document as an HTML fragment.
///
/// Output is one `<div class="infobox">` containing the thumbnail strip,
/// then an `<h3>` and a two-column `<table>` per group.
pub struct HtmlRenderer {
    options: RenderOptions,
    out: String,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            out: String::from("<div class=\"infobox\">\n"),
        }
    }

    /// Closes the wrapper and returns the markup.
    pub fn finish(mut self) -> String {
        self.out.push_str("</div>\n");
        self.out
    }

    fn push_cell(&mut self, cell: &Cell<'_>) {
        match cell {
            Cell::Text(text) => self.out.push_str(&encode_text(text)),
            Cell::Link(link) => {
                self.out.push_str("<a class=\"internal-link\" href=\"");
                self.out.push_str(&encode_double_quoted_attribute(&link.target));
                self.out.push_str("\">");
                self.out.push_str(&encode_text(&link.label));
                self.out.push_str("</a>");
            }
        }
    }
}

impl RenderSink for HtmlRenderer {
    fn start_thumbnails(&mut self, _count: usize) {
        self.out.push_str("<div class=\"infobox-thumbnails\">\n");
    }

    fn thumbnail(&mut self, thumbnail: &Thumbnail) {
        self.out.push_str("<img class=\"infobox-thumbnail\" src=\"");
        self.out.push_str(&encode_double_quoted_attribute(&thumbnail.url));
        self.out.push('"');
        if let Some(description) = &thumbnail.description {
            self.out.push_str(" title=\"");
            self.out.push_str(&encode_double_quoted_attribute(description));
            self.out.push('"');
        }
        self.out.push_str(">\n");
    }

    fn end_thumbnails(&mut self) {
        self.out.push_str("</div>\n");
    }

    fn group_header(&mut self, name: &str) {
        self.out.push_str("<h3 class=\"infobox-group\"");
        if let Some(color) = &self.options.header_color {
            self.out.push_str(" style=\"color: ");
            self.out.push_str(&encode_double_quoted_attribute(color));
            self.out.push('"');
        }
        self.out.push('>');
        self.out.push_str(&encode_text(name));
        self.out.push_str("</h3>\n<table class=\"infobox-table\">\n");
    }

    fn entry(&mut self, key: &str, value: RowValue<'_>) {
        self.out.push_str("<tr><th>");
        self.out.push_str(&encode_text(key));
        self.out.push_str("</th><td>");
        match &value {
            RowValue::Single(cell) => self.push_cell(cell),
            RowValue::List(cells) => {
                self.out.push_str("<ul>");
                for cell in cells {
                    self.out.push_str("<li>");
                    self.push_cell(cell);
                    self.out.push_str("</li>");
                }
                self.out.push_str("</ul>");
            }
        }
        self.out.push_str("</td></tr>\n");
    }

    fn end_group(&mut self) {
        self.out.push_str("</table>\n");
    }
}

/// Renders `document` to an HTML string in one call.
pub fn render_html<R>(document: &Document, resolver: &R, options: RenderOptions) -> String
where
    R: LinkResolver + ?Sized,
{
    let mut renderer = HtmlRenderer::new(options);
    render_document(document, resolver, &mut renderer);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parsing::parse_document, resolve::IdentityResolver};
    use pretty_assertions::assert_eq;

    fn html(src: &str, options: RenderOptions) -> String {
        let doc = parse_document(src, &IdentityResolver);
        render_html(&doc, &IdentityResolver, options)
    }

    #[test]
    fn empty_document_is_just_the_wrapper() {
        assert_eq!(
            html("", RenderOptions::default()),
            "<div class=\"infobox\">\n</div>\n"
        );
    }

    #[test]
    fn full_document() {
        let out = html(
            "!cat.png|A cat\n#Stats\n-HP:10\n-Owner:[[John Doe|Johnny]]\n-Tags:Red;Blue\n",
            RenderOptions {
                header_color: Some("#ff0000".into()),
            },
        );
        assert_eq!(
            out,
            concat!(
                "<div class=\"infobox\">\n",
                "<div class=\"infobox-thumbnails\">\n",
                "<img class=\"infobox-thumbnail\" src=\"cat.png\" title=\"A cat\">\n",
                "</div>\n",
                "<h3 class=\"infobox-group\" style=\"color: #ff0000\">Stats</h3>\n",
                "<table class=\"infobox-table\">\n",
                "<tr><th>HP</th><td>10</td></tr>\n",
                "<tr><th>Owner</th><td><a class=\"internal-link\" href=\"John Doe\">Johnny</a></td></tr>\n",
                "<tr><th>Tags</th><td><ul><li>Red</li><li>Blue</li></ul></td></tr>\n",
                "</table>\n",
                "</div>\n",
            )
        );
    }

    #[test]
    fn thumbnail_without_description_has_no_title() {
        let out = html("!a.png\n", RenderOptions::default());
        assert!(out.contains("<img class=\"infobox-thumbnail\" src=\"a.png\">\n"));
        assert!(!out.contains("title="));
    }

    #[test]
    fn unstyled_header_without_color() {
        let out = html("#G\n", RenderOptions::default());
        assert!(out.contains("<h3 class=\"infobox-group\">G</h3>"));
    }

    #[test]
    fn text_is_escaped() {
        let out = html("#<G>\n-a&b:<script>\n", RenderOptions::default());
        assert!(out.contains("&lt;G&gt;"));
        assert!(out.contains("<th>a&amp;b</th>"));
        assert!(out.contains("<td>&lt;script&gt;</td>"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn attributes_are_escaped() {
        let out = html("!a\"b.png|x\n", RenderOptions::default());
        assert!(out.contains("src=\"a&quot;b.png\""));
    }
}
