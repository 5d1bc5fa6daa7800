use crate::app::{App, Focus, InputMode};
use crate::modal::render_tags;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Layout: header(3) + filter(3) + main(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let header_text = format!(" Podcast Explorer   [{} podcasts]", app.filtered.len());
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, chunks[0]);

    // ── Filter bar ──
    let filter_style = match app.input_mode {
        InputMode::Editing => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default().fg(Color::DarkGray),
    };
    let filter_label = if app.input_mode == InputMode::Editing {
        " 🔍 Filter (Enter to apply, Esc to cancel): "
    } else {
        " 🔍 Filter (/): "
    };
    let filter_text = format!("{}{}", filter_label, app.filter);
    let filter_bar = Paragraph::new(filter_text).style(filter_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(filter_style)
            .title(" Search "),
    );
    frame.render_widget(filter_bar, chunks[1]);

    // Set cursor position when editing
    if app.input_mode == InputMode::Editing {
        let cursor_x = chunks[1].x + filter_label.width() as u16 + app.filter.width() as u16;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    // ── Main: genre sidebar + podcast list ──
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(chunks[2]);

    render_sidebar(app, frame, main[0]);
    render_list(app, frame, main[1]);

    // ── Status bar ──
    let status_line = Line::from(vec![
        Span::styled(
            " ↑↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Navigate  "),
        Span::styled(
            "Tab",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Pane  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Details  "),
        Span::styled(
            "/",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Search  "),
        Span::styled(
            "?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Help  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Quit  "),
        Span::styled(&app.status_msg, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[3]);
}

fn render_sidebar(app: &mut App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let focused = app.focus == Focus::Genres;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Genres ");
    app.hits.sidebar = block.inner(area);

    let items: Vec<ListItem> = (0..app.genre_entries())
        .map(|i| {
            let (label, active) = match i {
                0 => ("All".to_string(), app.genre_filter.is_none()),
                n => {
                    let genre = &app.catalog.genres[n - 1];
                    (genre.title.clone(), app.genre_filter == Some(n - 1))
                }
            };
            let marker = if active { "● " } else { "  " };
            let style = if active {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(label, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.genre_selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_list(app: &mut App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let focused = app.focus == Focus::Podcasts;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let page_info = format!(
        " {}-{} of {} ",
        if app.filtered.is_empty() {
            0
        } else {
            app.list_offset + 1
        },
        app.list_offset + app.page().len(),
        app.filtered.len()
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Podcasts ")
        .title_bottom(Line::from(page_info).alignment(Alignment::Right));
    app.hits.list = block.inner(area);

    if app.filtered.is_empty() {
        let empty = Paragraph::new("No podcasts found")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let title_width = (area.width as usize).saturating_sub(30);
    let items: Vec<ListItem> = app
        .page()
        .iter()
        .map(|&idx| {
            let podcast = &app.catalog.podcasts[idx];
            let tags = render_tags(&podcast.genres, &app.genre_map).join(", ");
            let seasons = if podcast.seasons > 0 {
                format!("{:>2} seasons  ", podcast.seasons)
            } else {
                String::new()
            };
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", truncate_str(&podcast.title, title_width)),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(seasons, Style::default().fg(Color::Yellow)),
                Span::styled(tags, Style::default().fg(Color::DarkGray)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.list_selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
