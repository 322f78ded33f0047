//! Terminal setup and restoration

use std::ops::{Deref, DerefMut};

use ratatui::DefaultTerminal;

/// Owns the terminal for the lifetime of the UI and restores it on drop,
/// including on early `?` returns.
pub struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// A panic hook is installed first so a panic also leaves the
    /// terminal usable.
    pub fn init() -> Self {
        install_panic_hook();
        Self {
            terminal: ratatui::init(),
        }
    }
}

impl Deref for TerminalGuard {
    type Target = DefaultTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
