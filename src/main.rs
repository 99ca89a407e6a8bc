// Segment Bar
// Terminal demo hosting the configured segmented controls

// IMPORTS ------------------>>

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use segment_bar::core::{App, EventHandler, UiSettings};
use segment_bar::load_and_validate_config;
use segment_bar::render::render_app;

//--------------------------------------------------------<<

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let settings = UiSettings::default();
    init_logging(&settings)?;

    // Optional config path as the only argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let app_config = load_and_validate_config(config_path).context("loading segment configuration")?;
    let mut app = App::from_config(&app_config, settings).context("building segment controls")?;
    info!(controls = app.controls().len(), "segment bar started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if app.settings.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    if app.settings.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    info!("segment bar stopped");
    result
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(settings: &UiSettings) -> Result<()> {
    let file = File::create(&settings.log_file)
        .with_context(|| format!("creating log file {}", settings.log_file))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| render_app(f, app, now))?;

        if event::poll(app.settings.tick_rate)? {
            let event = EventHandler::handle(event::read()?);
            app.handle_event(event, Instant::now());
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
