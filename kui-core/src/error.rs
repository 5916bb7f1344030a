//! Error types for the kui-core crate.
//!
//! Each concern gets its own error enum, matching the taxonomy in the
//! design document: invalid argument, parse failure, not-present, source
//! failure, and internal invariant violation. [`KuiError`] aggregates all
//! of them for callers that just want one `Result` type.

use thiserror::Error;

/// Failure to turn an authored key/value string into a [`crate::sequence::KeySequence`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An embedded `<NAME>` escape did not match any known logical key.
    #[error("unknown key name: <{0}>")]
    UnknownKeyName(String),

    /// A `<` was opened but never closed.
    #[error("unterminated key name starting at byte {0}")]
    UnterminatedKeyName(usize),

    /// The zero token (the sequence terminator) appeared inside the string.
    #[error("key sequence cannot contain the NUL token")]
    EmbeddedNul,

    /// The authored string produced an empty sequence.
    #[error("key sequence must not be empty")]
    Empty,
}

/// Errors raised by [`crate::map_set::MapSet`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapSetError {
    /// `register`/`deregister` failed to symbolize the given key or value.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// `deregister` was asked to remove a key that isn't registered.
    #[error("no map registered for that key")]
    NotPresent,
}

/// Errors surfaced by a [`crate::source::CharSource`] implementation.
#[derive(Debug, Error)]
#[error("character source failed: {0}")]
pub struct SourceError(pub String);

/// Errors raised by [`crate::context::MatcherContext`].
#[derive(Debug, Error)]
pub enum ContextError {
    /// A caller-supplied argument violated a documented precondition.
    ///
    /// Nothing in this crate constructs this today — the precondition this
    /// covers (spec §7a) is instead enforced by the type system at every
    /// call site. Kept for API stability: a future `CharSource`/`MapSet`
    /// precondition that can't be expressed in the type system lands here
    /// rather than forcing a new public variant into `ContextError`.
    #[allow(dead_code)]
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying character source failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A single `findkey` pass consumed more than the 1024-token bound
    /// without resolving, almost certainly a runaway recursive macro.
    #[error("pass exceeded the {limit}-token bound (likely a recursive macro with no fixed point)")]
    PassBoundExceeded {
        /// The configured bound that was exceeded.
        limit: usize,
    },
}

/// Umbrella error type returned by the public `kui-core` API.
#[derive(Debug, Error)]
pub enum KuiError {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// See [`MapSetError`].
    #[error(transparent)]
    MapSet(#[from] MapSetError),

    /// See [`ContextError`].
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Result alias used throughout kui-core.
pub type Result<T> = std::result::Result<T, KuiError>;
