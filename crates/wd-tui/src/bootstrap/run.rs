//! Terminal entry point and event loop.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use wd_core::ports::ClockPort;
use wd_core::settings::Settings;

use crate::adapters::SystemClock;
use crate::app::App;
use crate::{input, view};

use super::{config, logging, wiring};

/// Poll timeout; also the cadence of toast expiry checks.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn run() -> Result<()> {
    if let Some(dir) = logging::log_dir() {
        logging::init(dir)?;
    }

    // An unusable settings file must not keep the UI from coming up.
    let settings = match config::settings_path() {
        Some(path) => match config::load_settings(&path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, path = %path.display(), "settings file unusable, using defaults");
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let (usecases, toast_rx) = wiring::build_usecases();
    let mut app = App::new(usecases, settings, toast_rx);

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    info!("watchdeck started");
    let result = run_loop(&mut terminal, &mut app);

    // Restore the terminal on every exit path, including errors.
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    info!("watchdeck stopped");
    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let clock = SystemClock;
    while !app.should_quit {
        app.tick(clock.now_ms());
        terminal
            .draw(|frame| view::render(frame, app))
            .context("draw frame")?;

        if event::poll(TICK_INTERVAL).context("poll events")? {
            if let Event::Key(key) = event::read().context("read event")? {
                input::handle_key(app, key);
            }
        }
    }
    Ok(())
}
