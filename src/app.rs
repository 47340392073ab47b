use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::action::Action;
use crate::catalog::Catalog;
use crate::event::Event;
use crate::types::Movie;

/// Quiet period after the last keystroke before the query is committed.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Browse, // search bar + result list + pager
    Detail, // single movie, rendered from the already-fetched record
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

pub struct App {
    pub screen: Screen,
    pub input_mode: InputMode,

    // Search input
    pub search_term: String,
    pub debounced_term: String,
    search_dirty_since: Option<Instant>,

    // Results
    pub movies: Vec<Movie>,
    pub movie_index: usize,
    pub page: u32,
    pub total_pages: u32,
    pub selected: Option<Movie>,

    // Per-fetch state
    pub loading: bool,
    pub error: Option<String>,
    load_seq: u64,

    pub should_quit: bool,
    catalog: Arc<dyn Catalog>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        action_tx: mpsc::UnboundedSender<Action>,
        initial_query: String,
    ) -> Self {
        Self {
            screen: Screen::Browse,
            input_mode: InputMode::default(),
            search_term: initial_query.clone(),
            debounced_term: initial_query,
            search_dirty_since: None,
            movies: Vec::new(),
            movie_index: 0,
            page: 1,
            total_pages: 1,
            selected: None,
            loading: false,
            error: None,
            load_seq: 0,
            should_quit: false,
            catalog,
            action_tx,
        }
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Init => Action::Refresh,
            Event::Tick => {
                if self.debounce_expired(Instant::now()) {
                    Action::CommitSearch
                } else {
                    Action::None
                }
            }
            Event::Key(key) => self.handle_key(key),
            _ => Action::None,
        }
    }

    fn debounce_expired(&self, now: Instant) -> bool {
        matches!(self.search_dirty_since, Some(t) if now.duration_since(t) >= SEARCH_DEBOUNCE)
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        if self.input_mode == InputMode::Search {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.screen == Screen::Browse {
                    Action::Quit
                } else {
                    Action::Back
                }
            }
            KeyCode::Char('/') => {
                if self.screen == Screen::Browse {
                    Action::EnterSearch
                } else {
                    Action::None
                }
            }
            KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
            KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
            KeyCode::Char('g') => Action::CursorTop,
            KeyCode::Char('G') => Action::CursorBottom,
            KeyCode::Enter => Action::Select,
            KeyCode::Char('l') | KeyCode::Right => {
                if self.screen == Screen::Browse {
                    Action::NextPage
                } else {
                    Action::None
                }
            }
            KeyCode::Char('h') | KeyCode::Left => {
                if self.screen == Screen::Browse {
                    Action::PrevPage
                } else {
                    Action::None
                }
            }
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('o') => Action::OpenInBrowser,
            KeyCode::Char('y') => Action::YankUrl,
            _ => Action::None,
        }
    }

    fn handle_search_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ExitSearch,
            KeyCode::Enter => Action::CommitSearch,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::SearchClear
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::SearchInput(c)
            }
            _ => Action::None,
        }
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Back => match self.screen {
                Screen::Browse => {
                    self.should_quit = true;
                }
                Screen::Detail => {
                    // Restore the list exactly as it was; no refetch.
                    self.screen = Screen::Browse;
                    self.selected = None;
                }
            },

            Action::CursorUp => {
                if self.movie_index > 0 {
                    self.movie_index -= 1;
                }
            }
            Action::CursorDown => {
                if !self.movies.is_empty() && self.movie_index < self.movies.len() - 1 {
                    self.movie_index += 1;
                }
            }
            Action::CursorTop => {
                self.movie_index = 0;
            }
            Action::CursorBottom => {
                self.movie_index = self.movies.len().saturating_sub(1);
            }

            Action::Select => {
                if self.screen == Screen::Browse {
                    if let Some(movie) = self.movies.get(self.movie_index) {
                        self.selected = Some(movie.clone());
                        self.screen = Screen::Detail;
                    }
                }
            }

            Action::EnterSearch => {
                self.input_mode = InputMode::Search;
            }
            Action::ExitSearch => {
                self.input_mode = InputMode::Normal;
            }
            Action::SearchInput(c) => {
                self.search_term.push(c);
                self.search_dirty_since = Some(Instant::now());
            }
            Action::SearchBackspace => {
                self.search_term.pop();
                self.search_dirty_since = Some(Instant::now());
            }
            Action::SearchClear => {
                self.search_term.clear();
                self.search_dirty_since = Some(Instant::now());
            }
            Action::CommitSearch => {
                self.search_dirty_since = None;
                if self.search_term != self.debounced_term {
                    self.debounced_term = self.search_term.clone();
                    self.page = 1;
                    self.spawn_fetch();
                }
            }

            Action::NextPage => {
                if self.page < self.total_pages {
                    self.page += 1;
                    self.spawn_fetch();
                }
            }
            Action::PrevPage => {
                if self.page > 1 {
                    self.page -= 1;
                    self.spawn_fetch();
                }
            }
            Action::Refresh => {
                self.spawn_fetch();
            }

            Action::MoviesLoaded { page, load_id } => {
                if load_id != self.load_seq {
                    tracing::debug!(load_id, current = self.load_seq, "dropping stale result");
                    return;
                }
                self.loading = false;
                self.movies = page.results;
                self.total_pages = page.total_pages.max(1);
                self.page = self.page.min(self.total_pages);
                self.movie_index = 0;
            }
            Action::FetchFailed { message, load_id } => {
                if load_id != self.load_seq {
                    tracing::debug!(load_id, current = self.load_seq, "dropping stale error");
                    return;
                }
                self.loading = false;
                // The previous result list stays in place behind the error.
                self.error = Some(message);
            }

            Action::OpenInBrowser => {
                if let Some(movie) = self.current_movie() {
                    let url = self.catalog.movie_url(movie.id);
                    if let Err(e) = open::that(&url) {
                        tracing::warn!(error = %e, %url, "failed to open browser");
                    }
                }
            }
            Action::YankUrl => {
                if let Some(movie) = self.current_movie() {
                    let url = self.catalog.movie_url(movie.id);
                    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(url)) {
                        Ok(()) => {}
                        Err(e) => tracing::warn!(error = %e, "clipboard unavailable"),
                    }
                }
            }

            Action::Error(msg) => {
                self.loading = false;
                self.error = Some(msg);
            }
            Action::None => {}
        }
    }

    pub fn catalog_name(&self) -> &str {
        self.catalog.name()
    }

    /// Full poster image URL for a movie, if it has a poster path.
    pub fn poster_url(&self, movie: &Movie) -> Option<String> {
        movie
            .poster_path
            .as_deref()
            .map(|path| self.catalog.poster_url(path))
    }

    /// Movie the next item-scoped action applies to: the open detail record,
    /// or the highlighted list row.
    fn current_movie(&self) -> Option<&Movie> {
        match self.screen {
            Screen::Detail => self.selected.as_ref(),
            Screen::Browse => self.movies.get(self.movie_index),
        }
    }

    fn spawn_fetch(&mut self) {
        self.load_seq += 1;
        let load_id = self.load_seq;
        self.loading = true;
        self.error = None;

        let query = self.debounced_term.trim().to_string();
        let page = self.page;
        let catalog = Arc::clone(&self.catalog);
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = if query.is_empty() {
                catalog.discover(page).await
            } else {
                catalog.search(&query, page).await
            };

            match result {
                Ok(movies) => {
                    tx.send(Action::MoviesLoaded {
                        page: Box::new(movies),
                        load_id,
                    })
                    .ok();
                }
                Err(e) => {
                    tx.send(Action::FetchFailed {
                        message: e.to_string(),
                        load_id,
                    })
                    .ok();
                }
            }
        });
    }
}
