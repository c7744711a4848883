//! Terminal lifecycle: raw-mode setup, restoration, and a panic hook.
//!
//! The board is drawn on the alternate screen with mouse capture enabled
//! so the drag gesture sees motion events. Every entry point that changes
//! terminal state has a matching teardown here, including the panic path.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Puts the terminal into board mode and returns a ratatui handle.
///
/// Enables raw mode, switches to the alternate screen, and turns on mouse
/// capture. Without mouse capture crossterm never reports the drag events
/// that move projects between lists.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any step fails. The terminal may be
/// left partially configured; callers should still attempt restoration.
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Undoes everything [`setup_terminal`] did and makes the cursor visible.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any step fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    leave_board_mode().map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Installs a panic hook that puts the terminal back before reporting.
///
/// A panic while in raw mode on the alternate screen would otherwise eat
/// the panic message and leave the shell unusable. The hook restores the
/// terminal best-effort, then delegates to whichever hook was installed
/// before it. Call once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = leave_board_mode();
        previous(panic_info);
    }));
}

/// Leaves raw mode, drops mouse capture, and returns to the main screen.
fn leave_board_mode() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)
}
