use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame) {
    let area = super::centered_rect(70, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Global",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("    ?         ", Style::default().fg(Color::Yellow)),
            Span::raw("Toggle this help"),
        ]),
        Line::from(vec![
            Span::styled("    q         ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit application"),
        ]),
        Line::from(vec![
            Span::styled("    Esc       ", Style::default().fg(Color::Yellow)),
            Span::raw("Close modal / clear filter"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Browse",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("    Tab       ", Style::default().fg(Color::Yellow)),
            Span::raw("Switch between genres and podcasts"),
        ]),
        Line::from(vec![
            Span::styled("    ↑/k ↓/j   ", Style::default().fg(Color::Yellow)),
            Span::raw("Navigate up/down"),
        ]),
        Line::from(vec![
            Span::styled("    Enter     ", Style::default().fg(Color::Yellow)),
            Span::raw("Open details for podcast or genre"),
        ]),
        Line::from(vec![
            Span::styled("    f         ", Style::default().fg(Color::Yellow)),
            Span::raw("Filter list by the highlighted genre"),
        ]),
        Line::from(vec![
            Span::styled("    /         ", Style::default().fg(Color::Yellow)),
            Span::raw("Start text filtering (type to search)"),
        ]),
        Line::from(vec![
            Span::styled("    g/G       ", Style::default().fg(Color::Yellow)),
            Span::raw("Jump to first/last page"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Detail Modal",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("    ↑/↓       ", Style::default().fg(Color::Yellow)),
            Span::raw("Select a show (genre view)"),
        ]),
        Line::from(vec![
            Span::styled("    Enter     ", Style::default().fg(Color::Yellow)),
            Span::raw("Open the selected show"),
        ]),
        Line::from(vec![
            Span::styled("    x/Esc     ", Style::default().fg(Color::Yellow)),
            Span::raw("Close (clicking outside the card also closes)"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Mouse",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("    Click     ", Style::default().fg(Color::Yellow)),
            Span::raw("Open a podcast, pick a genre, follow a show row"),
        ]),
        Line::from(vec![
            Span::styled("    Scroll    ", Style::default().fg(Color::Yellow)),
            Span::raw("Move the active selection"),
        ]),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help — Keybindings ")
                .title_bottom(
                    Line::from(" Press ? or Esc to close ")
                        .style(Style::default().fg(Color::DarkGray)),
                ),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}
