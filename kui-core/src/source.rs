//! The character source a [`crate::context::MatcherContext`] reads from.
//!
//! Physical terminal I/O is explicitly out of scope for this crate (see
//! the crate docs); a [`CharSource`] is how a caller plugs a real
//! descriptor, a test double, or another [`crate::context::MatcherContext`]
//! in as the next layer down.

use std::time::Duration;

use crate::error::SourceError;
use crate::token::KeyToken;

/// Supplies key tokens to a [`crate::context::MatcherContext`].
///
/// Implementations are free to block up to `timeout` in [`read`]; a
/// `timeout` of [`Duration::ZERO`] means "don't block at all".
///
/// [`read`]: CharSource::read
pub trait CharSource {
    /// Reads the next token, waiting up to `timeout` for one to become
    /// available. Returns `Ok(None)` on a timeout with nothing read.
    fn read(&mut self, timeout: Duration) -> Result<Option<KeyToken>, SourceError>;

    /// Reports whether a token is available without blocking past
    /// `timeout`. The default implementation calls [`read`](Self::read)
    /// with a zero timeout and pushes any token it gets back via
    /// [`unread`](Self::unread); sources that can check availability more
    /// cheaply should override this.
    fn data_ready(&mut self, timeout: Duration) -> Result<bool, SourceError> {
        match self.read(timeout)? {
            Some(token) => {
                self.unread(token);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Pushes a token back so the next [`read`](Self::read) returns it
    /// before consuming anything new. Used to give a peeked-at token back
    /// to the source when `data_ready`'s default implementation borrows one.
    fn unread(&mut self, token: KeyToken);
}

/// An in-memory [`CharSource`] over a fixed sequence of tokens, for tests.
/// Never blocks: `read` with any timeout returns immediately.
#[derive(Clone, Debug, Default)]
pub struct VecSource {
    tokens: std::collections::VecDeque<KeyToken>,
}

impl VecSource {
    /// Builds a source that yields `tokens` in order, then exhausts.
    pub fn new(tokens: impl IntoIterator<Item = KeyToken>) -> Self {
        VecSource { tokens: tokens.into_iter().collect() }
    }
}

impl CharSource for VecSource {
    fn read(&mut self, _timeout: Duration) -> Result<Option<KeyToken>, SourceError> {
        Ok(self.tokens.pop_front())
    }

    fn data_ready(&mut self, _timeout: Duration) -> Result<bool, SourceError> {
        Ok(!self.tokens.is_empty())
    }

    fn unread(&mut self, token: KeyToken) {
        self.tokens.push_front(token);
    }
}
