use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use infobox_config::Config;
use infobox_engine::{
    Document, IdentityResolver, LinkResolver, ParseOutput, RenderOptions, io, io::VaultResolver,
    parse_document_with_diagnostics, render_document, render_html,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
    str::FromStr,
};

mod terminal;

use terminal::TerminalRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    View,
    Html,
    Dump,
}

#[derive(Debug, PartialEq)]
struct Args {
    mode: Mode,
    markup_path: PathBuf,
    notes_path: Option<PathBuf>,
}

impl Args {
    /// `[--html | --dump] <markup-file> [notes-folder]`
    fn parse(args: &[String]) -> Option<Self> {
        let mut mode = Mode::View;
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--html" if mode == Mode::View => mode = Mode::Html,
                "--dump" if mode == Mode::View => mode = Mode::Dump,
                flag if flag.starts_with("--") => return None,
                path => positional.push(PathBuf::from(path)),
            }
        }

        let mut positional = positional.into_iter();
        let markup_path = positional.next()?;
        let notes_path = positional.next();
        if positional.next().is_some() {
            return None;
        }

        Some(Self {
            mode,
            markup_path,
            notes_path,
        })
    }
}

struct App {
    title: String,
    lines: Vec<Line<'static>>,
    diagnostics: Vec<String>,
    scroll: u16,
}

impl App {
    fn new(
        title: String,
        output: &ParseOutput,
        resolver: &dyn LinkResolver,
        header_color: Color,
    ) -> Self {
        let lines = if output.document.is_empty() {
            vec![Line::from("Nothing to show: no thumbnails or groups found")]
        } else {
            let mut sink = TerminalRenderer::new(header_color);
            render_document(&output.document, resolver, &mut sink);
            sink.finish()
        };

        Self {
            title,
            lines,
            diagnostics: output.diagnostics.iter().map(|d| d.to_string()).collect(),
            scroll: 0,
        }
    }

    fn scroll_down(&mut self) {
        let max = u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn header_color(config: &Config) -> Color {
    match Color::from_str(&config.header_color) {
        Ok(color) => color,
        Err(_) => {
            log::warn!(
                "Unrecognised header color '{}', using magenta",
                config.header_color
            );
            Color::Magenta
        }
    }
}

/// The parsed document as TOML, for `--dump`.
fn dump(document: &Document) -> Result<String> {
    Ok(toml::to_string_pretty(document)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("infobox-cli");
    let Some(cli) = Args::parse(&args[1.min(args.len())..]) else {
        eprintln!("Usage: {program} [--html | --dump] <markup-file> [notes-folder-path]");
        process::exit(1);
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!("No config file at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    // Notes folder from CLI args, then config file
    let from_config = cli.notes_path.is_none();
    let notes_path = cli.notes_path.clone().or_else(|| config.notes_path.clone());

    let resolver: Box<dyn LinkResolver> = match &notes_path {
        Some(path) => match VaultResolver::build(path) {
            Ok(vault) => Box::new(vault),
            Err(e) => {
                let source = if from_config {
                    format!(" from config file '{}'", config_path.display())
                } else {
                    String::new()
                };
                eprintln!(
                    "Error: Notes path '{}'{} is invalid: {e}",
                    path.display(),
                    source
                );
                process::exit(1);
            }
        },
        None => Box::new(IdentityResolver),
    };

    let source = io::read_file(&cli.markup_path)?;
    let output = parse_document_with_diagnostics(&source, &*resolver);
    log::info!(
        "{}: {} thumbnails, {} groups, {} entries",
        cli.markup_path.display(),
        output.document.thumbnails.len(),
        output.document.groups.len(),
        output.document.entry_count()
    );
    for diagnostic in &output.diagnostics {
        log::info!("{}: {diagnostic}", cli.markup_path.display());
    }

    match cli.mode {
        Mode::Html => {
            let options = RenderOptions {
                header_color: Some(config.header_color.clone()),
            };
            print!("{}", render_html(&output.document, &*resolver, options));
        }
        Mode::Dump => {
            println!("{}", dump(&output.document)?);
        }
        Mode::View => {
            let title = cli.markup_path.display().to_string();
            let mut app = App::new(title, &output, &*resolver, header_color(&config));
            run_terminal(&mut app)?;
        }
    }

    Ok(())
}

fn run_terminal(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let diagnostics_height = if app.diagnostics.is_empty() {
        0
    } else {
        app.diagnostics.len().min(6) as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(diagnostics_height),
            Constraint::Length(1),
        ])
        .split(f.area());

    let content = Paragraph::new(app.lines.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.as_str()),
        )
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    if !app.diagnostics.is_empty() {
        let skipped: Vec<Line> = app
            .diagnostics
            .iter()
            .map(|d| Line::from(Span::raw(d.as_str())))
            .collect();
        let panel = Paragraph::new(skipped).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Skipped lines"),
        );
        f.render_widget(panel, chunks[1]);
    }

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("g: Top"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[2]);
}
