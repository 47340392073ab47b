mod action;
mod app;
mod catalog;
mod config;
mod error;
mod event;
mod tmdb;
mod tui;
mod types;
mod ui;

use std::panic;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::action::Action;
use crate::app::App;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::event::Event;
use crate::tmdb::Tmdb;
use crate::tui::EventHandler;

#[derive(Debug, Parser)]
#[command(name = "reel", version, about = "Search and browse movies from the terminal")]
struct Cli {
    /// Start with a search query instead of the popular listing
    query: Vec<String>,

    /// Use an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    // Build the injected configuration once, up front
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let token = config.resolve_token()?;
    let catalog: Arc<dyn Catalog> = Arc::new(Tmdb::new(config.api.clone(), token));

    let result = run(catalog, cli.query.join(" ")).await;

    // Restore terminal
    tui::restore()?;

    result
}

async fn run(
    catalog: Arc<dyn Catalog>,
    initial_query: String,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize terminal
    let mut terminal = tui::init()?;

    // Create action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Create app state
    let mut app = App::new(catalog, action_tx.clone(), initial_query);

    // Create event handler; the tick drives debounce expiry, so it has to be
    // a fraction of the 500ms quiet period
    let tick_rate = Duration::from_millis(100);
    let render_rate = Duration::from_millis(16); // ~60fps
    let mut events = EventHandler::new(tick_rate, render_rate);

    // Main loop
    loop {
        tokio::select! {
            Some(event) = events.next() => {
                if event.is_quit() {
                    break;
                }

                match event {
                    Event::Render => {
                        terminal.draw(|frame| ui::render(frame, &app))?;
                    }
                    _ => {
                        let action = app.handle_event(event);
                        if !matches!(action, Action::None) {
                            action_tx.send(action)?;
                        }
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                app.update(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
