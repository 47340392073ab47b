use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::types::Movie;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(movie) = &app.selected else {
        let block = Block::default().borders(Borders::ALL).title(" Movie ");
        let empty = Paragraph::new("No movie selected")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    render_summary(frame, movie, chunks[0]);
    render_body(frame, app, movie, chunks[1]);
}

fn render_summary(frame: &mut Frame, movie: &Movie, area: Rect) {
    let rating_color = if movie.vote_average >= 7.0 {
        Color::Green
    } else if movie.vote_average >= 5.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let mut lines = vec![Line::from(Span::styled(
        movie.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(tagline) = movie.tagline.as_deref().filter(|t| !t.is_empty()) {
        lines.push(Line::from(Span::styled(
            tagline.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!("★ {:.1}", movie.vote_average),
            Style::default()
                .fg(rating_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" ({} votes)", movie.vote_count)),
        Span::raw(" | "),
        Span::styled("Language: ", Style::default().fg(Color::Gray)),
        Span::raw(movie.original_language.clone()),
    ]));

    let released = if movie.release_date.is_empty() {
        "unknown".to_string()
    } else {
        movie.release_date.clone()
    };
    lines.push(Line::from(vec![
        Span::styled("Released: ", Style::default().fg(Color::Gray)),
        Span::raw(released),
    ]));

    let summary =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Details "));

    frame.render_widget(summary, area);
}

fn render_body(frame: &mut Frame, app: &App, movie: &Movie, area: Rect) {
    let overview = if movie.overview.is_empty() {
        "No overview available."
    } else {
        movie.overview.as_str()
    };

    let mut lines = vec![Line::from(overview)];

    if let Some(poster) = app.poster_url(movie) {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Poster: ", Style::default().fg(Color::Gray)),
            Span::styled(poster, Style::default().fg(Color::Blue)),
        ]));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Overview "));

    frame.render_widget(body, area);
}
