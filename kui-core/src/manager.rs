//! [`Manager`]: the two-layer pipeline a caller actually talks to.

use std::time::Duration;

use tracing::trace;

use crate::context::MatcherContext;
use crate::error::{ContextError, SourceError};
use crate::keytable;
use crate::map_set::MapSet;
use crate::source::CharSource;
use crate::token::KeyToken;

/// Terminal escape sequences are read eagerly: an escape byte with nothing
/// following it within this window is treated as a bare `<ESC>`, not the
/// start of a cut-off sequence. Matches the original's terminal timeout.
pub const TERMINAL_TIMEOUT: Duration = Duration::from_millis(40);

/// Normal-key reads (after terminal escapes are already resolved) can wait
/// much longer, since there's no ambiguous partial sequence to time out.
pub const NORMAL_TIMEOUT: Duration = Duration::from_millis(1000);

/// Bridges a [`MatcherContext`] to act as another context's [`CharSource`].
///
/// This is how the manager's two layers compose: `normal_keys` treats
/// `terminal_keys` as its source of characters, so every token normal_keys
/// sees has already passed through the terminal-escape matcher once.
struct ContextSource<S> {
    inner: MatcherContext<S>,
}

impl<S: CharSource> CharSource for ContextSource<S> {
    fn read(&mut self, timeout: Duration) -> Result<Option<KeyToken>, SourceError> {
        // Mirrors `kui_callback`: ask the inner context's cangetkey first
        // (non-blocking), and only if that's empty, wait on its underlying
        // source up to `timeout` before actually resolving a key.
        if !self.inner.can_get_key_within(timeout).map_err(|e| SourceError(e.to_string()))? {
            return Ok(None);
        }
        self.inner.get_key().map_err(|e| SourceError(e.to_string()))
    }

    fn data_ready(&mut self, timeout: Duration) -> Result<bool, SourceError> {
        self.inner.can_get_key_within(timeout).map_err(|e| SourceError(e.to_string()))
    }

    fn unread(&mut self, _token: KeyToken) {
        unreachable!("ContextSource is only read through MatcherContext::get_key, which never unreads")
    }
}

/// The top-level entry point: a `terminal_keys` context that resolves raw
/// input bytes against terminal escape sequences, feeding a `normal_keys`
/// context that layers user-defined macros on top.
///
/// Mirrors the original's `struct kui_manager` and its `kui_manager_*`
/// forwarding functions, which all operate on `normal_keys` — callers never
/// talk to `terminal_keys` directly.
pub struct Manager<S> {
    normal_keys: MatcherContext<ContextSource<S>>,
}

impl<S: CharSource> Manager<S> {
    /// Builds a manager reading raw bytes from `source`, with `terminal_keys`
    /// preloaded with [`keytable::terminal_mappings`].
    pub fn new(source: S) -> Self {
        let mut terminal_keys = MatcherContext::new(source, TERMINAL_TIMEOUT);
        terminal_keys.add_map_set(keytable::terminal_mappings());
        let normal_keys = MatcherContext::new(ContextSource { inner: terminal_keys }, NORMAL_TIMEOUT);
        Manager { normal_keys }
    }

    /// Registers a user-defined macro map set on top of the terminal layer.
    pub fn add_map_set(&mut self, map_set: MapSet) {
        self.normal_keys.add_map_set(map_set);
    }

    /// The macro map sets currently registered, in scan order.
    pub fn map_sets(&self) -> &[MapSet] {
        self.normal_keys.map_sets()
    }

    /// Reports whether [`get_key`](Self::get_key) can return a token
    /// without blocking past the normal-key timeout.
    pub fn can_get_key(&mut self) -> Result<bool, ContextError> {
        self.normal_keys.can_get_key()
    }

    /// Resolves the next logical key token, with terminal escapes and user
    /// macros both transparently expanded.
    pub fn get_key(&mut self) -> Result<Option<KeyToken>, ContextError> {
        let key = self.normal_keys.get_key();
        trace!(?key, "manager resolved key");
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::VecSource;

    #[test]
    fn terminal_escape_resolves_to_logical_key() {
        let bytes = "\x1b[A".bytes().map(|b| b as KeyToken);
        let mut mgr = Manager::new(VecSource::new(bytes));
        let esc_up = crate::token::LogicalKey::Up.token();
        assert_eq!(mgr.get_key().unwrap(), Some(esc_up));
        assert_eq!(mgr.get_key().unwrap(), None);
    }

    #[test]
    fn user_macro_layers_on_top_of_terminal_layer() {
        let mut macros = MapSet::new();
        macros.register("jk", "<ESC>").unwrap();
        let bytes = "jk".bytes().map(|b| b as KeyToken);
        let mut mgr = Manager::new(VecSource::new(bytes));
        mgr.add_map_set(macros);
        let esc = crate::token::LogicalKey::Esc.token();
        assert_eq!(mgr.get_key().unwrap(), Some(esc));
    }

    #[test]
    fn ordinary_bytes_pass_through_untouched() {
        let bytes = "q".bytes().map(|b| b as KeyToken);
        let mut mgr = Manager::new(VecSource::new(bytes));
        assert_eq!(mgr.get_key().unwrap(), Some(b'q' as KeyToken));
    }
}
