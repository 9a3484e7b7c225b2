//! X11 window system abstraction for testability.
//!
//! This module provides a trait that abstracts the window system queries the
//! toggle depends on, allowing for mock implementations in tests. The real
//! implementation shells out to `xprop`, `xdotool` and `pgrep`.

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::command_runner::{CommandOutput, CommandRunner};
use crate::config;

pub type WindowId = u64;
pub type Pid = u32;
pub type DesktopNumber = u32;

/// Marker preceding the comma-separated window IDs in the stacking query
/// output.
const STACKING_MARKER: &str = "window id # ";

/// Trait for window system queries and commands.
///
/// All operations may fail (window system unreachable, malformed output);
/// failures are propagated, never silently defaulted.
pub trait X11Client {
    /// Get all windows in bottom-to-top stacking order
    fn window_stack(&mut self) -> Result<Vec<WindowId>>;

    /// Get the currently focused window
    fn active_window(&mut self) -> Result<WindowId>;

    /// Get the process owning a window
    fn window_pid(&mut self, window: WindowId) -> Result<Pid>;

    /// Get the currently focused virtual desktop
    fn current_desktop(&mut self) -> Result<DesktopNumber>;

    /// Get the virtual desktop a window lives on
    fn window_desktop(&mut self, window: WindowId) -> Result<DesktopNumber>;

    /// Raise a window to the top of the stack and focus it
    fn activate(&mut self, window: WindowId) -> Result<()>;

    /// Get the process ID of the first running process whose name matches
    /// the configured terminal
    fn terminal_pid(&mut self) -> Result<Pid>;
}

/// Real implementation shelling out to the X11 command-line tools
pub struct CommandX11Client<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> CommandX11Client<R> {
    pub fn new(runner: R) -> Self {
        CommandX11Client { runner }
    }

    /// Run a command, surface captured stderr in the log, and hand back
    /// stdout. Stderr does not invalidate stdout.
    fn run(&mut self, program: &str, args: &[&str]) -> Result<String> {
        let CommandOutput { stdout, stderr } = self.runner.run(program, args)?;

        if !stderr.trim().is_empty() {
            warn!("{} {:?}: {}", program, args, stderr.trim());
        }

        Ok(stdout)
    }
}

impl<R: CommandRunner> X11Client for CommandX11Client<R> {
    fn window_stack(&mut self) -> Result<Vec<WindowId>> {
        let out = self.run("xprop", &["-root", "_NET_CLIENT_LIST_STACKING"])?;
        parse_window_stack(&out)
    }

    fn active_window(&mut self) -> Result<WindowId> {
        let out = self.run("xdotool", &["getwindowfocus"])?;
        parse_id(&out).context("Failed to parse the focused window id")
    }

    fn window_pid(&mut self, window: WindowId) -> Result<Pid> {
        let id = window.to_string();
        let out = self.run("xdotool", &["getwindowpid", &id])?;

        out.trim()
            .parse()
            .with_context(|| format!("Failed to parse the pid of window {}", window))
    }

    fn current_desktop(&mut self) -> Result<DesktopNumber> {
        let out = self.run("xdotool", &["get_desktop"])?;

        out.trim()
            .parse()
            .context("Failed to parse the current desktop number")
    }

    fn window_desktop(&mut self, window: WindowId) -> Result<DesktopNumber> {
        let id = window.to_string();
        let out = self.run("xdotool", &["get_desktop_for_window", &id])?;

        out.trim()
            .parse()
            .with_context(|| format!("Failed to parse the desktop of window {}", window))
    }

    fn activate(&mut self, window: WindowId) -> Result<()> {
        let id = window.to_string();
        self.run("xdotool", &["windowactivate", &id])?;
        Ok(())
    }

    fn terminal_pid(&mut self) -> Result<Pid> {
        let out = self.run("pgrep", &["-o", config::TERMINAL_PROCESS])?;

        if out.trim().is_empty() {
            bail!("No running process named {:?}", config::TERMINAL_PROCESS);
        }

        out.trim()
            .parse()
            .with_context(|| format!("Failed to parse the pid of {:?}", config::TERMINAL_PROCESS))
    }
}

/// Parse the stacking property output: everything after the marker is a
/// comma-separated list of hexadecimal window IDs.
fn parse_window_stack(output: &str) -> Result<Vec<WindowId>> {
    let (_, ids) = output
        .split_once(STACKING_MARKER)
        .with_context(|| format!("No {:?} marker in stacking query output", STACKING_MARKER))?;

    ids.trim().split(',').map(parse_id).collect()
}

/// Parse a window ID, decimal or `0x`-prefixed hexadecimal.
fn parse_id(s: &str) -> Result<WindowId> {
    let s = s.trim();

    let id = match s.strip_prefix("0x") {
        Some(hex) => WindowId::from_str_radix(hex, 16),
        None => s.parse(),
    };

    id.with_context(|| format!("Invalid window id {:?}", s))
}
