//! Terminal setup and restoration

use ratatui::DefaultTerminal;
use vastu_core::prelude::*;

/// Enter raw mode and the alternate screen.
///
/// Also installs a panic hook so a crash leaves the terminal usable.
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave raw mode and the alternate screen.
pub fn restore() {
    ratatui::restore();
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
