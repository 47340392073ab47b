use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, InputMode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.input_mode == InputMode::Search;

    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::raw(app.search_term.as_str())];
    if active {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    } else if app.search_term.is_empty() {
        spans = vec![Span::styled(
            "Press / to search through tons of movies",
            Style::default().fg(Color::DarkGray),
        )];
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search "),
    );

    frame.render_widget(input, area);
}
