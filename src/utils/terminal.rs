use std::io::{self, Write};

/// Drop raw mode and leave the alternate screen, ignoring failures.
///
/// Called on startup (to undo a previous crashed run), from the panic hook,
/// and from the player's drop guard. Safe to call when the terminal was
/// never touched.
pub fn reset_state() {
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b[0m");
    let _ = stdout.flush();
}
