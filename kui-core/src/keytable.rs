//! Symbolization: turning authored key strings into [`KeySequence`]s, and
//! back again for diagnostics.
//!
//! An authored string is ordinary text with embedded `<NAME>` escapes for
//! named logical keys, e.g. `"<ESC>[A"` or `"<C-w>"`-style user macros
//! (multi-character names inside the angle brackets are looked up against
//! [`LogicalKey::from_name`]; anything else between `<` and `>` that isn't
//! a known name is a [`ParseError::UnknownKeyName`]).
//!
//! This module also supplies the one piece of "provided" external data
//! spec §4.5/§6 leaves abstract: a built-in table of terminal escape
//! sequences for the [`crate::manager::Manager`]'s terminal layer,
//! generalized from the original's (unavailable) `kui_term_get_terminal_mappings`.

use crate::error::ParseError;
use crate::map_set::MapSet;
use crate::sequence::KeySequence;
use crate::token::{KeyToken, LogicalKey};

/// Parses an authored string into a [`KeySequence`], resolving `<NAME>`
/// escapes to their logical key token and every other byte to its own
/// ordinary-range token.
///
/// # Errors
///
/// Returns [`ParseError::UnterminatedKeyName`] if a `<` is never closed,
/// [`ParseError::UnknownKeyName`] if the name inside `<...>` isn't
/// recognized, and [`ParseError::Empty`] if `s` is empty.
pub fn symbolize(s: &str) -> Result<KeySequence, ParseError> {
    let bytes = s.as_bytes();
    let mut tokens: Vec<KeyToken> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            let close = bytes[i + 1..].iter().position(|&b| b == b'>').map(|p| i + 1 + p);
            let Some(close) = close else {
                return Err(ParseError::UnterminatedKeyName(i));
            };
            let name = &s[i + 1..close];
            let key = LogicalKey::from_name(name).ok_or_else(|| ParseError::UnknownKeyName(name.to_string()))?;
            tokens.push(key.token());
            i = close + 1;
        } else {
            tokens.push(bytes[i] as KeyToken);
            i += 1;
        }
    }
    KeySequence::new(tokens)
}

/// Renders a key sequence back to its `<NAME>` form, for logging only.
/// Ordinary printable bytes are emitted as themselves; control bytes and
/// named logical keys are emitted as `<NAME>`.
pub fn pretty(tokens: &[KeyToken]) -> String {
    let mut out = String::with_capacity(tokens.len());
    for &token in tokens {
        if let Some(key) = LogicalKey::from_token(token) {
            out.push_str(&key.to_string());
        } else if (0x20..0x7F).contains(&token) {
            out.push(token as u8 as char);
        } else {
            out.push_str(&format!("<0x{token:02X}>"));
        }
    }
    out
}

/// A built-in [`MapSet`] translating common VT100/xterm escape sequences
/// into named logical keys. Meant to seed a `terminal_keys` matcher context
/// (spec §4.5) so the manager works against a real terminal out of the box.
///
/// Keys are authored as the literal bytes a terminal actually sends (the
/// raw `ESC` byte, not the `<ESC>` escape, since that name instead denotes
/// the *logical* key token a fully-matched sequence resolves to).
pub fn terminal_mappings() -> MapSet {
    let mut ms = MapSet::new();
    let entries: &[(&str, LogicalKey)] = &[
        ("\x1b[A", LogicalKey::Up),
        ("\x1b[B", LogicalKey::Down),
        ("\x1b[C", LogicalKey::Right),
        ("\x1b[D", LogicalKey::Left),
        ("\x1bOA", LogicalKey::Up),
        ("\x1bOB", LogicalKey::Down),
        ("\x1bOC", LogicalKey::Right),
        ("\x1bOD", LogicalKey::Left),
        ("\x1b[H", LogicalKey::Home),
        ("\x1b[F", LogicalKey::End),
        ("\x1b[1~", LogicalKey::Home),
        ("\x1b[4~", LogicalKey::End),
        ("\x1b[2~", LogicalKey::Insert),
        ("\x1b[3~", LogicalKey::Delete),
        ("\x1b[5~", LogicalKey::PageUp),
        ("\x1b[6~", LogicalKey::PageDown),
        ("\x1bOP", LogicalKey::F1),
        ("\x1bOQ", LogicalKey::F2),
        ("\x1bOR", LogicalKey::F3),
        ("\x1bOS", LogicalKey::F4),
        ("\x1b[15~", LogicalKey::F5),
        ("\x1b[17~", LogicalKey::F6),
        ("\x1b[18~", LogicalKey::F7),
        ("\x1b[19~", LogicalKey::F8),
        ("\x1b[20~", LogicalKey::F9),
        ("\x1b[21~", LogicalKey::F10),
        ("\x1b[23~", LogicalKey::F11),
        ("\x1b[24~", LogicalKey::F12),
        ("\x1b", LogicalKey::Esc),
    ];
    for &(key, value) in entries {
        let value_str = value.to_string();
        ms.register(key, &value_str).expect("built-in terminal mappings are well-formed");
    }
    ms
}
