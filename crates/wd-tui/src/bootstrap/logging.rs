//! File logging for the TUI.
//!
//! The terminal belongs to ratatui while the app runs, so log output goes
//! to a file under the platform data dir, never to stdout.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

// Keeps the non-blocking writer flushing until process exit.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Platform log location, e.g. `~/.local/share/watchdeck/logs` on Linux.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("watchdeck").join("logs"))
}

/// Install the tracing subscriber writing to `<dir>/watchdeck.log`.
///
/// Level defaults to debug in dev builds and info otherwise; `RUST_LOG`
/// overrides both. Must be called once, before the terminal is taken over.
pub fn init(dir: PathBuf) -> anyhow::Result<()> {
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file = tracing_appender::rolling::never(&dir, "watchdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(file);
    if LOG_GUARD.set(guard).is_err() {
        anyhow::bail!("logging initialized twice");
    }

    let default_level = if is_development() { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
