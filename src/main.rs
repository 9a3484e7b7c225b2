mod command_runner;
mod config;
mod toggle;
mod x11_client;

use anyhow::{Context, Result};
use command_runner::ShellRunner;
use config::Cli;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::{error, info};
use x11_client::CommandX11Client;

/// Open the append-only log file and route all tracing output to it.
///
/// The toggle runs from a keybinding with no interactive feedback channel,
/// so the log file is the only diagnostic surface.
fn init_logging() -> Result<()> {
    let path = config::log_file_path()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn run() -> Result<()> {
    let mut client = CommandX11Client::new(ShellRunner);
    toggle::toggle(&mut client)
}

fn main() {
    Cli::parse();

    if let Err(e) = init_logging() {
        // No log file to report into; stderr is the last resort.
        eprintln!("terminal-toggle: {:#}", e);
        return;
    }

    info!("Toggling terminal");

    // Every failure ends up in the log; the process still exits 0.
    if let Err(e) = run() {
        error!("Toggle failed: {:?}", e);
    }
}
