//! The key token alphabet.
//!
//! Every "character" the matcher operates on is a [`KeyToken`]: a plain
//! `u32` drawn from a union of two disjoint ranges.
//!
//! ```text
//! 0                                   reserved: sequence terminator
//! 1..=0xFF                            ordinary byte (an input codepoint)
//! 0x100..=0x1FF                       named logical key (ESC, F1, UP, ...)
//! ```
//!
//! Token `0` is never a valid member of a key or value sequence; it exists
//! only as the historical terminator of the C implementation's
//! zero-terminated arrays. [`crate::sequence::KeySequence`] stores its
//! length explicitly (it's a `Vec`), so nothing in this crate relies on a
//! physical trailing zero — but the invariant that `0` never appears
//! *inside* a sequence is still enforced at construction time, since the
//! rest of the matching algorithm (`cmp`/`cmpn`) is defined in terms of it.

use std::fmt;

/// A single token in the key alphabet. See the module docs for the range
/// layout.
pub type KeyToken = u32;

/// Reserved terminator value. Never valid inside a [`crate::sequence::KeySequence`].
pub const NUL: KeyToken = 0;

/// First token value in the ordinary byte range.
pub const ORDINARY_MIN: KeyToken = 0x01;
/// Last token value in the ordinary byte range.
pub const ORDINARY_MAX: KeyToken = 0xFF;

/// First token value in the named logical key range.
pub const LOGICAL_MIN: KeyToken = 0x100;
/// Last token value in the named logical key range reserved by this crate.
pub const LOGICAL_MAX: KeyToken = 0x1FF;

/// Returns true if `token` is an ordinary input byte (not the NUL sentinel,
/// not a named logical key).
#[inline]
pub const fn is_ordinary(token: KeyToken) -> bool {
    token >= ORDINARY_MIN && token <= ORDINARY_MAX
}

/// Returns true if `token` falls in the named logical key range.
#[inline]
pub const fn is_logical(token: KeyToken) -> bool {
    token >= LOGICAL_MIN && token <= LOGICAL_MAX
}

/// Named logical keys: the non-byte half of the alphabet. Terminal escape
/// sequences resolve to these; they're also what a user macro's `<NAME>`
/// escapes refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum LogicalKey {
    Esc,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
    Backspace,
    Tab,
    Enter,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl LogicalKey {
    /// All named logical keys, in table order. Used to build the
    /// name-lookup table once.
    pub const ALL: &'static [LogicalKey] = &[
        LogicalKey::Esc,
        LogicalKey::Up,
        LogicalKey::Down,
        LogicalKey::Left,
        LogicalKey::Right,
        LogicalKey::Home,
        LogicalKey::End,
        LogicalKey::Insert,
        LogicalKey::Delete,
        LogicalKey::PageUp,
        LogicalKey::PageDown,
        LogicalKey::Backspace,
        LogicalKey::Tab,
        LogicalKey::Enter,
        LogicalKey::F1,
        LogicalKey::F2,
        LogicalKey::F3,
        LogicalKey::F4,
        LogicalKey::F5,
        LogicalKey::F6,
        LogicalKey::F7,
        LogicalKey::F8,
        LogicalKey::F9,
        LogicalKey::F10,
        LogicalKey::F11,
        LogicalKey::F12,
    ];

    /// The `<NAME>` spelling used in authored key strings, without the
    /// angle brackets.
    pub const fn name(self) -> &'static str {
        match self {
            LogicalKey::Esc => "ESC",
            LogicalKey::Up => "UP",
            LogicalKey::Down => "DOWN",
            LogicalKey::Left => "LEFT",
            LogicalKey::Right => "RIGHT",
            LogicalKey::Home => "HOME",
            LogicalKey::End => "END",
            LogicalKey::Insert => "INSERT",
            LogicalKey::Delete => "DELETE",
            LogicalKey::PageUp => "PAGEUP",
            LogicalKey::PageDown => "PAGEDOWN",
            LogicalKey::Backspace => "BACKSPACE",
            LogicalKey::Tab => "TAB",
            LogicalKey::Enter => "ENTER",
            LogicalKey::F1 => "F1",
            LogicalKey::F2 => "F2",
            LogicalKey::F3 => "F3",
            LogicalKey::F4 => "F4",
            LogicalKey::F5 => "F5",
            LogicalKey::F6 => "F6",
            LogicalKey::F7 => "F7",
            LogicalKey::F8 => "F8",
            LogicalKey::F9 => "F9",
            LogicalKey::F10 => "F10",
            LogicalKey::F11 => "F11",
            LogicalKey::F12 => "F12",
        }
    }

    /// Looks up a logical key by its bare (no angle brackets) name,
    /// case-insensitively.
    pub fn from_name(name: &str) -> Option<LogicalKey> {
        Self::ALL.iter().copied().find(|k| k.name().eq_ignore_ascii_case(name))
    }

    /// The token this logical key occupies. Stable for the lifetime of the
    /// enum (position in [`Self::ALL`]).
    pub fn token(self) -> KeyToken {
        let index = Self::ALL.iter().position(|&k| k == self).expect("self is in ALL");
        LOGICAL_MIN + index as KeyToken
    }

    /// Recovers a [`LogicalKey`] from its token, if `token` is in range.
    pub fn from_token(token: KeyToken) -> Option<LogicalKey> {
        if !is_logical(token) {
            return None;
        }
        let index = (token - LOGICAL_MIN) as usize;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_key_token_roundtrips() {
        for key in LogicalKey::ALL.iter().copied() {
            let token = key.token();
            assert!(is_logical(token));
            assert_eq!(LogicalKey::from_token(token), Some(key));
        }
    }

    #[test]
    fn tokens_are_unique_and_ordered() {
        let tokens: Vec<KeyToken> = LogicalKey::ALL.iter().map(|k| k.token()).collect();
        let mut sorted = tokens.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(tokens, sorted, "ALL must already be in token order with no duplicates");
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(LogicalKey::from_name("esc"), Some(LogicalKey::Esc));
        assert_eq!(LogicalKey::from_name("Esc"), Some(LogicalKey::Esc));
        assert_eq!(LogicalKey::from_name("nonexistent"), None);
    }

    #[test]
    fn ordinary_and_logical_ranges_are_disjoint() {
        for b in 0..=0xFFu32 {
            if b == NUL {
                assert!(!is_ordinary(b));
            } else {
                assert!(is_ordinary(b));
            }
            assert!(!is_logical(b));
        }
        for key in LogicalKey::ALL.iter().copied() {
            assert!(!is_ordinary(key.token()));
        }
    }
}
