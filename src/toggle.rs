//! Toggle decision logic.
//!
//! One invocation looks at who owns the focused window: the terminal gets
//! hidden behind the most recently stacked window on the current desktop,
//! anything else gets the terminal raised over it.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::x11_client::{Pid, WindowId, X11Client};

/// Toggle between the terminal and the last active window.
pub fn toggle<C: X11Client>(client: &mut C) -> Result<()> {
    let terminal_pid = client
        .terminal_pid()
        .context("Terminal process not found")?;
    let active_window = client.active_window()?;
    let active_pid = client.window_pid(active_window)?;

    if active_pid == terminal_pid {
        move_terminal_to_background(client, active_window)
    } else {
        move_terminal_to_foreground(client, terminal_pid)
    }
}

/// Hide the terminal by activating the next-most-recently stacked window on
/// the current desktop.
///
/// Stacking order approximates recency of focus, so the stack is scanned
/// top-to-bottom. Entries are skipped until the terminal's own entry has
/// been passed over; the first window after it on the current desktop wins.
/// Windows on other desktops are never eligible, since activating one would
/// also switch desktops. No eligible window is a valid empty result, not an
/// error.
pub fn move_terminal_to_background<C: X11Client>(
    client: &mut C,
    active_window: WindowId,
) -> Result<()> {
    let mut seen_window = false;

    let current_desktop = client.current_desktop()?;
    let window_stack = client.window_stack()?;

    for window in window_stack.into_iter().rev() {
        if window == active_window {
            seen_window = true;
            continue;
        }

        if seen_window && client.window_desktop(window)? == current_desktop {
            info!("Selecting window: {}", window);
            client.activate(window)?;
            break;
        }
    }

    Ok(())
}

/// Raise every terminal window on the current desktop.
///
/// With several terminal windows on one desktop each is activated in stack
/// iteration order and the last one raised ends up focused. Zero matches
/// means no action.
pub fn move_terminal_to_foreground<C: X11Client>(client: &mut C, terminal_pid: Pid) -> Result<()> {
    let current_desktop = client.current_desktop()?;

    for window in client.window_stack()? {
        let is_terminal = client.window_pid(window)? == terminal_pid;
        let is_same_desktop = client.window_desktop(window)? == current_desktop;

        if is_terminal && is_same_desktop {
            debug!("Raising terminal window: {}", window);
            client.activate(window)?;
        }
    }

    Ok(())
}
