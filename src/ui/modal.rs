use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

/// Render the detail modal overlay, recording hit-test areas on the app so
/// mouse events can be resolved against this frame's layout.
pub fn render(app: &mut App, frame: &mut Frame) {
    if !app.modal.is_visible() {
        app.hits.clear_modal();
        return;
    }

    let area = super::centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let content = app.modal.content().clone();

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Details ")
        .title_top(
            Line::from(Span::styled(
                " ✕ close ",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
        );
    let inner = card.inner(area);
    frame.render_widget(card, area);

    app.hits.modal_card = area;
    // The close control sits at the right end of the top border line.
    app.hits.modal_close = Rect {
        x: area.x + area.width.saturating_sub(11),
        y: area.y,
        width: 10.min(area.width),
        height: 1,
    };

    // ── Header lines ──
    let mut header_lines: Vec<Line> = Vec::new();
    header_lines.push(Line::from(Span::styled(
        content.title.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(cover) = &content.cover {
        header_lines.push(Line::from(vec![
            Span::styled("🖼  ", Style::default().fg(Color::DarkGray)),
            Span::styled(cover.image.clone(), Style::default().fg(Color::DarkGray)),
        ]));
    }
    if !content.updated.is_empty() {
        header_lines.push(Line::from(Span::styled(
            content.updated.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }
    let mut tag_spans: Vec<Span> = Vec::new();
    for tag in &content.tags {
        if !tag_spans.is_empty() {
            tag_spans.push(Span::raw(" "));
        }
        tag_spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(Color::Cyan),
        ));
    }
    header_lines.push(Line::from(tag_spans));

    // Rough wrap estimate so the description does not starve the body rows.
    let desc_height = if content.description.is_empty() {
        1
    } else {
        let cols = inner.width.max(1) as usize;
        ((content.description.len() / cols) as u16 + 1).min(5)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_lines.len() as u16 + 1),
            Constraint::Length(desc_height + 1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(header_lines), chunks[0]);

    let description = Paragraph::new(content.description.clone())
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));
    frame.render_widget(description, chunks[1]);

    let section = Paragraph::new(Span::styled(
        content.section_label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(section, chunks[2]);

    // ── Body rows ──
    let rows_area = chunks[3];
    let clickable = content.rows.iter().any(|r| r.link.is_some());

    let items: Vec<ListItem> = content
        .rows
        .iter()
        .map(|row| {
            let style = if row.link.is_some() {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(row.text.clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    if clickable {
        state.select(Some(app.modal.selected_row()));
    }
    frame.render_stateful_widget(list, rows_area, &mut state);

    // Map content rows to screen rects, accounting for list scroll. Rows
    // scrolled out of view get a zero rect and match no clicks.
    let offset = state.offset();
    app.hits.modal_rows.clear();
    for i in 0..content.rows.len() {
        let rect = if i >= offset && (i - offset) < rows_area.height as usize {
            Rect {
                x: rows_area.x,
                y: rows_area.y + (i - offset) as u16,
                width: rows_area.width,
                height: 1,
            }
        } else {
            Rect::default()
        };
        app.hits.modal_rows.push(rect);
    }
}
