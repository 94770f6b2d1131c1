//! Terminal lifecycle helpers

/// Install a panic hook that restores the terminal before printing.
///
/// Without this a panic leaves the terminal in raw mode with the alternate
/// screen active, making the backtrace unreadable.
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));
}
