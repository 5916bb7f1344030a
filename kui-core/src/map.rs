//! A single key-to-value mapping within a [`crate::map_set::MapSet`].

use crate::error::ParseError;
use crate::keytable;
use crate::sequence::KeySequence;
use crate::token::KeyToken;

/// One registered mapping: an authored key sequence that, once fully
/// matched, expands to an authored value sequence.
///
/// Mirrors the original `struct kui_map`'s four fields: the caller's
/// original strings are kept alongside the symbolized (literal) token
/// sequences so a [`crate::map_set::MapSet`] can report what was actually
/// registered without re-running [`keytable::pretty`] on every lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    original_key: String,
    original_value: String,
    literal_key: KeySequence,
    literal_value: KeySequence,
}

impl Map {
    /// Symbolizes `key` and `value` and pairs them into a [`Map`].
    pub fn new(key: &str, value: &str) -> Result<Self, ParseError> {
        let literal_key = keytable::symbolize(key)?;
        let literal_value = keytable::symbolize(value)?;
        Ok(Map {
            original_key: key.to_string(),
            original_value: value.to_string(),
            literal_key,
            literal_value,
        })
    }

    /// The key string exactly as registered.
    pub fn original_key(&self) -> &str {
        &self.original_key
    }

    /// The value string exactly as registered.
    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    /// The symbolized key sequence matched against incoming tokens.
    pub fn literal_key(&self) -> &[KeyToken] {
        self.literal_key.as_slice()
    }

    /// The symbolized value sequence substituted in on a full match.
    pub fn literal_value(&self) -> &[KeyToken] {
        self.literal_value.as_slice()
    }
}
