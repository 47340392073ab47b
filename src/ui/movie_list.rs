use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.movies.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(" Movies ");
        let empty = Paragraph::new("No movies found")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    render_rows(frame, app, chunks[0]);
    render_pager(frame, app, chunks[1]);
}

fn render_rows(frame: &mut Frame, app: &App, area: Rect) {
    let w = area.width.saturating_sub(2) as usize;
    let fixed = 16; // year(6) + rating(8) + spaces(2)
    let flex = w.saturating_sub(fixed).max(10);

    let items: Vec<ListItem> = app
        .movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let style = if i == app.movie_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let title = if movie.title.chars().count() > flex {
                let truncated: String = movie.title.chars().take(flex.saturating_sub(3)).collect();
                format!("{}...", truncated)
            } else {
                movie.title.clone()
            };

            let year = movie
                .release_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "----".to_string());

            let line = Line::from(vec![
                Span::styled(format!("{:<flex$}", title), style),
                Span::raw("  "),
                Span::styled(format!("({})", year), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(
                    format!("★ {:.1}", movie.vote_average),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} Movies ({}) ", app.catalog_name(), app.movies.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.movie_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_pager(frame: &mut Frame, app: &App, area: Rect) {
    let at_first = app.page <= 1;
    let at_last = app.page >= app.total_pages;

    let bound_style = Style::default().fg(Color::DarkGray);
    let free_style = Style::default().fg(Color::Cyan);

    let pager = Line::from(vec![
        Span::styled("◄ Back", if at_first { bound_style } else { free_style }),
        Span::raw("   "),
        Span::styled(
            format!("Page {} of {}", app.page, app.total_pages),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("   "),
        Span::styled("Next ►", if at_last { bound_style } else { free_style }),
    ]);

    frame.render_widget(Paragraph::new(pager).right_aligned(), area);
}
