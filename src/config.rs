use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Process name of the terminal emulator to toggle.
///
/// Change this to match your terminal and rebuild.
pub const TERMINAL_PROCESS: &str = "terminator";

/// File name of the append-only log in the user's home directory.
const LOG_FILE_NAME: &str = "toggle-terminal.log";

#[derive(Debug, Clone, Parser)]
#[command(name = "terminal-toggle")]
#[command(about = "Toggle a terminal window between foreground and background", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn parse() -> Self {
        <Cli as Parser>::parse()
    }
}

/// Get the path to the append-only log file
pub fn log_file_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;

    Ok(home.join(LOG_FILE_NAME))
}
