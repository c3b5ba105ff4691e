//! Raw-mode and alternate-screen handling.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Guard for the terminal state. Restores the terminal on drop.
///
/// Raw mode is disabled and the alternate screen left on every exit path,
/// including errors raised while the guard is alive. Each restore step runs
/// even if an earlier one fails.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode and switches `out` to the alternate screen.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self::restoring(out);
        execute!(guard.out, EnterAlternateScreen)?;
        debug!("Terminal entered alternate screen");
        Ok(guard)
    }

    fn restoring(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        debug!("Terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer whose flush always fails.
    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("flush failed"))
        }
    }

    #[test]
    fn test_drop_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        drop(TerminalGuard::restoring(&mut out));

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    #[test]
    fn test_drop_does_not_panic_when_restore_fails() {
        let mut out = FailingFlush(Vec::new());
        drop(TerminalGuard::restoring(&mut out));
        assert!(String::from_utf8_lossy(&out.0).contains("\x1b[?1049l"));
    }
}
