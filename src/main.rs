mod app;
mod data;
mod modal;
mod ui;

use app::{App, Focus, InputMode};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use data::Catalog;
use ratatui::layout::Position;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// TUI catalog browser for podcasts and genres
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a catalog JSON file (defaults to the bundled catalog)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Verbose logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the terminal UI.
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Dataset problems are fatal before the terminal enters raw mode.
    let loaded = match &cli.data {
        Some(path) => Catalog::load(path),
        None => Catalog::embedded(),
    };
    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(
        podcasts = catalog.podcasts.len(),
        genres = catalog.genres.len(),
        "catalog loaded"
    );

    let mut app = App::new(catalog);

    let mut terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let size = terminal.size()?;
    app.update_page_size(size.height);

    let result = run_app(&mut terminal, &mut app);

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout. Hit areas were recorded by
        // the draw above, so mouse events always resolve against the
        // current layout.
        if event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key(app, key);
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::Resize(_, height) => {
                    app.update_page_size(height);
                }
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Help toggle (global)
    if key.code == KeyCode::Char('?')
        && app.input_mode == InputMode::Normal
        && !app.modal.is_visible()
    {
        app.show_help = !app.show_help;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.modal.is_visible() {
        handle_modal_key(app, key);
        return;
    }

    if app.input_mode == InputMode::Editing {
        handle_filter_input(app, key);
        return;
    }

    handle_browse_key(app, key);
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => {
            app.modal.close();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.modal.row_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.modal.row_prev();
        }
        KeyCode::Enter => {
            app.modal.activate_selected();
        }
        _ => {}
    }
}

fn handle_filter_input(app: &mut App, key: KeyEvent) {
    let mut changed = false;
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.filter.pop();
            changed = true;
        }
        KeyCode::Char(c) => {
            app.filter.push(c);
            changed = true;
        }
        _ => {}
    }

    if changed {
        app.apply_filter();
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Genres => Focus::Podcasts,
                Focus::Podcasts => Focus::Genres,
            };
        }
        KeyCode::Down | KeyCode::Char('j') => match app.focus {
            Focus::Genres => app.genre_next(),
            Focus::Podcasts => app.list_next(),
        },
        KeyCode::Up | KeyCode::Char('k') => match app.focus {
            Focus::Genres => app.genre_prev(),
            Focus::Podcasts => app.list_prev(),
        },
        KeyCode::PageDown => {
            app.list_page_down();
        }
        KeyCode::PageUp => {
            app.list_page_up();
        }
        KeyCode::Enter => match app.focus {
            Focus::Genres => app.open_selected_genre(),
            Focus::Podcasts => app.open_selected_podcast(),
        },
        KeyCode::Char('f') => {
            app.apply_selected_genre();
        }
        KeyCode::Char('g') => {
            app.list_home();
        }
        KeyCode::Char('G') => {
            app.list_end();
        }
        KeyCode::Esc => {
            // Clear filter
            if !app.filter.is_empty() {
                app.filter.clear();
                app.apply_filter();
            }
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            app.show_help = false;
        }
        return;
    }

    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if app.modal.is_visible() {
                app.modal.row_prev();
            } else if app.hits.sidebar.contains(pos) {
                app.genre_prev();
            } else {
                app.list_prev();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.modal.is_visible() {
                app.modal.row_next();
            } else if app.hits.sidebar.contains(pos) {
                app.genre_next();
            } else {
                app.list_next();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.modal.is_visible() {
                if app.hits.modal_close.contains(pos) {
                    app.modal.close();
                } else if let Some(row) = app
                    .hits
                    .modal_rows
                    .iter()
                    .position(|r| r.contains(pos))
                {
                    app.modal.activate_row(row);
                } else if !app.hits.modal_card.contains(pos) {
                    // Click on the overlay outside the card closes; clicks
                    // inside the card do nothing.
                    app.modal.close();
                }
                return;
            }

            if app.hits.sidebar.contains(pos) {
                app.focus = Focus::Genres;
                let row = (mouse.row - app.hits.sidebar.y) as usize;
                if row < app.genre_entries() {
                    app.genre_selected = row;
                    app.apply_selected_genre();
                }
                return;
            }

            if app.hits.list.contains(pos) {
                app.focus = Focus::Podcasts;
                let row = (mouse.row - app.hits.list.y) as usize;
                app.open_podcast_at(row);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Genre, IdValue, Podcast};
    use ratatui::layout::Rect;

    fn catalog() -> Catalog {
        Catalog {
            podcasts: vec![
                Podcast {
                    id: IdValue::Num(3),
                    title: "Midnight Archive".to_string(),
                    description: String::new(),
                    image: String::new(),
                    updated: None,
                    genres: vec![IdValue::Num(2)],
                    seasons: 2,
                },
                Podcast {
                    id: IdValue::Text("7".to_string()),
                    title: "The Long Way Home".to_string(),
                    description: String::new(),
                    image: String::new(),
                    updated: None,
                    genres: vec![IdValue::Num(2)],
                    seasons: 1,
                },
            ],
            genres: vec![Genre {
                id: IdValue::Num(2),
                title: "History".to_string(),
                description: String::new(),
                shows: vec![IdValue::Num(3), IdValue::Text("7".to_string())],
            }],
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_open_genre() -> App {
        let mut app = App::new(catalog());
        app.genre_selected = 1;
        app.open_selected_genre();
        // Layout as the renderer would record it.
        app.hits.modal_card = Rect::new(10, 5, 40, 15);
        app.hits.modal_close = Rect::new(44, 5, 6, 1);
        app.hits.modal_rows = vec![Rect::new(11, 12, 38, 1), Rect::new(11, 13, 38, 1)];
        app
    }

    #[test]
    fn test_escape_closes_modal() {
        let mut app = app_with_open_genre();
        handle_key(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.modal.is_visible());
    }

    #[test]
    fn test_close_control_click_closes_modal() {
        let mut app = app_with_open_genre();
        handle_mouse(&mut app, click(45, 5));
        assert!(!app.modal.is_visible());
    }

    #[test]
    fn test_outside_click_closes_modal() {
        let mut app = app_with_open_genre();
        handle_mouse(&mut app, click(2, 2));
        assert!(!app.modal.is_visible());
    }

    #[test]
    fn test_inside_click_keeps_modal_open() {
        let mut app = app_with_open_genre();
        handle_mouse(&mut app, click(20, 8));
        assert!(app.modal.is_visible());
        assert_eq!(app.modal.content().title, "History");
    }

    #[test]
    fn test_show_row_click_reopens_as_podcast() {
        let mut app = app_with_open_genre();
        handle_mouse(&mut app, click(15, 13));
        assert!(app.modal.is_visible());
        assert_eq!(app.modal.content().title, "The Long Way Home");
        assert_eq!(app.modal.content().section_label, "Seasons");
    }

    #[test]
    fn test_modal_keys_navigate_and_follow_rows() {
        let mut app = app_with_open_genre();
        handle_key(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.modal.content().title, "The Long Way Home");
    }

    #[test]
    fn test_list_click_opens_podcast() {
        let mut app = App::new(catalog());
        app.hits.list = Rect::new(30, 7, 40, 10);
        handle_mouse(&mut app, click(35, 8));
        assert!(app.modal.is_visible());
        assert_eq!(app.modal.content().title, "The Long Way Home");
    }

    #[test]
    fn test_sidebar_click_applies_genre_filter() {
        let mut app = App::new(catalog());
        app.hits.sidebar = Rect::new(1, 7, 26, 10);
        handle_mouse(&mut app, click(3, 8));
        assert_eq!(app.genre_filter, Some(0));
        assert_eq!(app.focus, Focus::Genres);

        // Clicking "All" clears it again.
        handle_mouse(&mut app, click(3, 7));
        assert_eq!(app.genre_filter, None);
    }

    #[test]
    fn test_filter_input_editing_round_trip() {
        let mut app = App::new(catalog());
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
        );
        assert_eq!(app.input_mode, InputMode::Editing);
        for c in "long".chars() {
            handle_key(&mut app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(app.filtered.len(), 1);
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(catalog());
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
