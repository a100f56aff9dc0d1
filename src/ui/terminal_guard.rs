//! Raw-mode guard for the TUI session.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Puts the terminal into raw mode on the alternate screen and restores it
/// when dropped. Restoration also runs on panic via [`install_panic_hook`]
/// and on early returns through `?`.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self { restored: false })
    }

    /// Best-effort terminal restore. Safe to call more than once.
    pub fn restore() {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
        let _ = io::stdout().flush();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !std::mem::replace(&mut self.restored, true) {
            Self::restore();
        }
    }
}

/// Restore the terminal before the default panic output so the message lands
/// on the normal screen instead of the alternate one.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        TerminalGuard::restore();
        default_hook(info);
    }));
}
