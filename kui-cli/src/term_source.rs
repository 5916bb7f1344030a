//! A [`CharSource`] reading raw bytes from the current terminal.

use std::collections::VecDeque;
use std::io::Read;
use std::time::Duration;

use kui_core::{CharSource, KeyToken, SourceError};

/// Feeds raw, undecoded bytes from stdin to `kui-core`'s own matcher.
///
/// Deliberately bypasses crossterm's own `Event::Key` parser: the whole
/// point of this crate is that `kui_core::manager::Manager` does the
/// escape-sequence resolution, not the terminal library. `crossterm` is
/// used only for readiness polling ([`crossterm::event::poll`]), which is
/// the cross-platform piece raw `std::io` can't do with a timeout.
pub struct CrosstermSource {
    pending: VecDeque<KeyToken>,
}

impl CrosstermSource {
    pub fn new() -> Self {
        CrosstermSource { pending: VecDeque::new() }
    }
}

impl Default for CrosstermSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CharSource for CrosstermSource {
    fn read(&mut self, timeout: Duration) -> Result<Option<KeyToken>, SourceError> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(Some(token));
        }
        let ready = crossterm::event::poll(timeout).map_err(|e| SourceError(e.to_string()))?;
        if !ready {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        std::io::stdin().read_exact(&mut byte).map_err(|e| SourceError(e.to_string()))?;
        Ok(Some(byte[0] as KeyToken))
    }

    fn unread(&mut self, token: KeyToken) {
        self.pending.push_front(token);
    }
}
