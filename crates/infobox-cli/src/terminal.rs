use infobox_engine::{Cell, RenderSink, RowValue, Thumbnail};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Render sink producing styled terminal lines.
pub struct TerminalRenderer {
    header_style: Style,
    lines: Vec<Line<'static>>,
}

impl TerminalRenderer {
    pub fn new(header_color: Color) -> Self {
        Self {
            header_style: Style::default()
                .fg(header_color)
                .add_modifier(Modifier::BOLD),
            lines: Vec::new(),
        }
    }

    pub fn finish(self) -> Vec<Line<'static>> {
        self.lines
    }

    fn cell_spans(cell: &Cell<'_>) -> Vec<Span<'static>> {
        match cell {
            Cell::Text(text) => vec![Span::raw(text.to_string())],
            Cell::Link(link) => {
                let mut spans = vec![Span::styled(
                    link.label.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                )];
                if link.label != link.target {
                    spans.push(Span::styled(
                        format!(" ({})", link.target),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                spans
            }
        }
    }
}

impl RenderSink for TerminalRenderer {
    fn start_thumbnails(&mut self, count: usize) {
        let title = if count == 1 { "image" } else { "images" };
        self.lines.push(Line::from(Span::styled(
            format!("{count} {title}"),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    fn thumbnail(&mut self, thumbnail: &Thumbnail) {
        let mut spans = vec![Span::raw("🖼  "), Span::raw(thumbnail.url.clone())];
        if let Some(description) = &thumbnail.description {
            spans.push(Span::styled(
                format!(" - {description}"),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        }
        self.lines.push(Line::from(spans));
    }

    fn end_thumbnails(&mut self) {
        self.lines.push(Line::default());
    }

    fn group_header(&mut self, name: &str) {
        self.lines
            .push(Line::from(Span::styled(name.to_string(), self.header_style)));
    }

    fn entry(&mut self, key: &str, value: RowValue<'_>) {
        let key = Span::styled(
            format!("{key}: "),
            Style::default().add_modifier(Modifier::BOLD),
        );
        match value {
            RowValue::Single(cell) => {
                let mut spans = vec![key];
                spans.extend(Self::cell_spans(&cell));
                self.lines.push(Line::from(spans));
            }
            RowValue::List(cells) => {
                self.lines.push(Line::from(key));
                for cell in &cells {
                    let mut spans = vec![Span::raw("  • ")];
                    spans.extend(Self::cell_spans(cell));
                    self.lines.push(Line::from(spans));
                }
            }
        }
    }

    fn end_group(&mut self) {
        self.lines.push(Line::default());
    }
}
