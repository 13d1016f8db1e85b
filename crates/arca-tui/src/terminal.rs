//! Terminal setup and restoration

use ratatui::DefaultTerminal;

/// Chain a panic hook that puts the terminal back into cooked mode first,
/// so the panic message is readable.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
}

/// Enter the alternate screen with raw mode enabled.
pub fn enter() -> DefaultTerminal {
    install_panic_hook();
    ratatui::init()
}

/// Leave the alternate screen. Safe to call more than once.
pub fn leave() {
    ratatui::restore();
}
