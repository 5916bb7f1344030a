//! Greedy-longest-match resolution of terminal input bytes into logical
//! key tokens, with transparent expansion of user-defined macros.
//!
//! A [`manager::Manager`] sits on top of two [`context::MatcherContext`]s:
//! one resolves raw bytes against a built-in table of terminal escape
//! sequences ([`keytable::terminal_mappings`]), the other treats that
//! resolved stream as its own input and layers any number of user-defined
//! [`map_set::MapSet`]s on top. Both contexts share the same matching
//! algorithm — read one token at a time, narrow every registered map set's
//! candidate range, and stop as soon as none of them can possibly extend
//! further (spec for the greedy search lives on [`map_set::MapSet::update`]).
//!
//! A macro's value isn't handed back to the caller directly: it's pushed
//! back onto the context's own input and re-scanned, so a macro that
//! expands to another macro's trigger sequence (or a terminal escape)
//! resolves all the way down before [`manager::Manager::get_key`] returns.
//!
//! This crate has no opinion about where the raw bytes come from or what
//! happens to a resolved key afterwards — plugging in a real terminal
//! descriptor, rendering, and dispatch are all left to the caller via the
//! [`source::CharSource`] trait.

pub mod context;
pub mod error;
pub mod keytable;
pub mod manager;
pub mod map;
pub mod map_set;
pub mod sequence;
pub mod source;
pub mod token;

pub use context::MatcherContext;
pub use error::{ContextError, KuiError, MapSetError, ParseError, Result, SourceError};
pub use manager::Manager;
pub use map::Map;
pub use map_set::{MapSet, State};
pub use source::{CharSource, VecSource};
pub use token::{KeyToken, LogicalKey};
