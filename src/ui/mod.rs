mod movie_detail;
mod movie_list;
mod search_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, InputMode, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.screen {
        Screen::Detail => movie_detail::render(frame, app, chunks[1]),
        Screen::Browse => render_browse(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);
}

fn render_browse(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    search_bar::render(frame, app, chunks[0]);

    // One branch at a time: loading, then error, then the list itself.
    if app.loading {
        render_loading(frame, chunks[1]);
    } else if let Some(error) = &app.error {
        render_error(frame, error, chunks[1]);
    } else {
        movie_list::render(frame, app, chunks[1]);
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new(Line::from(Span::styled(
        "Loading movies...",
        Style::default().fg(Color::Yellow),
    )))
    .centered();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(loading, vertical[1]);
}

fn render_error(frame: &mut Frame, error: &str, area: Rect) {
    let message = Paragraph::new(Line::from(Span::styled(
        error,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .centered();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(message, vertical[1]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Browse => {
            if app.debounced_term.trim().is_empty() {
                "reel - Popular Movies".to_string()
            } else {
                format!("reel - Search: {}", app.debounced_term.trim())
            }
        }
        Screen::Detail => {
            if let Some(movie) = &app.selected {
                format!("reel - {}", movie.title)
            } else {
                "reel - Movie".to_string()
            }
        }
    };

    let header = Paragraph::new(Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.screen {
        Screen::Browse => {
            if app.input_mode == InputMode::Search {
                "type to search | Enter: search now | Ctrl+u: clear | Esc: done"
            } else {
                "/: search | j/k: move | h/l: page | Enter: details | r: refresh | o: open | y: yank | q: quit"
            }
        }
        Screen::Detail => "o: open in browser | y: yank url | q/Esc: back",
    };

    let status_bar = Paragraph::new(Line::from(Span::styled(
        help,
        Style::default().fg(Color::Gray),
    )))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
