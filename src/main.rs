//! Municipal TUI - the municipality's information page in the terminal
//!
//! A Ratatui-based page with in-page navigation, a collapsible services list
//! and a validated contact form.

mod app;
mod config;
mod event;
mod logging;
mod platform;
mod state;
mod submission;
mod timer;
mod ui;

use anyhow::Result;
use app::App;
use config::PageConfig;
use crossterm::{
    event::{
        self as term_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use submission::LogSink;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let log_path = logging::init();
    tracing::info!(log_file = ?log_path, "starting municipal-tui");

    let config = PageConfig::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read page config, using defaults");
        PageConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, Box::new(LogSink::new()));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "municipal-tui exited with an error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!("municipal-tui stopped");
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        if app.terminal_size != Some((term_size.height, term_size.width)) {
            app.resize(term_size.height, term_size.width);
        }

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // The notice goes up once the page has been drawn
        if !app.state.flags().info_overlay_shown {
            app.mount();
            continue;
        }

        // Handle crossterm events
        if term_event::poll(POLL_INTERVAL)? {
            match term_event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.request_quit();
                    } else {
                        app.handle_key(key).await?;
                    }
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse).await?;
                }
                Event::Resize(width, height) => {
                    app.resize(height, width);
                }
                _ => {}
            }
        }

        // Deferred events (banner expiry)
        app.drain_events();

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
