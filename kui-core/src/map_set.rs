//! A set of [`Map`]s matched together as one greedy longest-match search.

use crate::error::MapSetError;
use crate::keytable;
use crate::map::Map;
use crate::sequence;
use crate::token::KeyToken;

/// Outcome of the in-progress match held by a [`MapSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// At least one registered map still shares this prefix; feed another token.
    StillLooking,
    /// An exact match exists at the current depth. The candidate range may
    /// still contain longer matches, so the caller can keep probing; the
    /// match is latched in `best_so_far` either way.
    Found,
    /// No registered map shares this prefix. Whatever `best_so_far` latched
    /// on an earlier call is the only possible result of this pass.
    NotFound,
}

/// A sorted collection of [`Map`]s sharing one match cursor.
///
/// The map list is kept sorted by literal key (see [`sequence::cmp`]) so
/// that feeding one more token narrows the live candidate range with a
/// pair of binary searches instead of a linear rescan. This mirrors the
/// original's `map_iter` cursor over a sorted `map_list`, generalized from
/// a single STL-style iterator pair to an explicit `[lo, hi)` range.
#[derive(Clone, Debug, Default)]
pub struct MapSet {
    maps: Vec<Map>,
    lo: usize,
    hi: usize,
    depth: usize,
    best_so_far: Option<usize>,
}

impl MapSet {
    /// An empty map set with no in-progress match.
    pub fn new() -> Self {
        MapSet::default()
    }

    /// All registered maps, in sorted literal-key order.
    pub fn maps(&self) -> &[Map] {
        &self.maps
    }

    /// Number of registered maps.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// True if no maps are registered.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    fn locate(&self, literal_key: &[KeyToken]) -> Result<usize, usize> {
        self.maps.binary_search_by(|m| sequence::cmp(m.literal_key(), literal_key))
    }

    /// Registers `key` -> `value`, symbolizing both sides. Registering a
    /// key that's already present replaces its value; the set never holds
    /// two maps with the same literal key. Resets the in-progress match.
    pub fn register(&mut self, key: &str, value: &str) -> Result<(), MapSetError> {
        let map = Map::new(key, value)?;
        match self.locate(map.literal_key()) {
            Ok(existing) => self.maps[existing] = map,
            Err(insert_at) => self.maps.insert(insert_at, map),
        }
        self.reset();
        Ok(())
    }

    /// Removes the map registered under `key`. `key` is symbolized first
    /// and compared against each map's literal key, so authored spelling
    /// differences (e.g. whitespace around an escape) don't matter as long
    /// as they resolve to the same tokens.
    ///
    /// # Errors
    ///
    /// [`MapSetError::NotPresent`] if no map with that literal key exists.
    pub fn deregister(&mut self, key: &str) -> Result<(), MapSetError> {
        let literal_key = keytable::symbolize(key).map_err(MapSetError::Parse)?;
        match self.locate(literal_key.as_slice()) {
            Ok(found) => {
                self.maps.remove(found);
                self.reset();
                Ok(())
            }
            Err(_) => Err(MapSetError::NotPresent),
        }
    }

    /// Resets the match cursor to the whole map list with no tokens
    /// consumed. An empty map set resets straight to [`State::NotFound`]
    /// (there's nothing to look for).
    pub fn reset(&mut self) {
        self.lo = 0;
        self.hi = self.maps.len();
        self.depth = 0;
        self.best_so_far = None;
    }

    fn exact_match_in_range(&self) -> Option<usize> {
        self.maps[self.lo..self.hi].iter().position(|m| m.literal_key().len() == self.depth).map(|i| self.lo + i)
    }

    fn longer_candidate_remains(&self) -> bool {
        self.maps[self.lo..self.hi].iter().any(|m| m.literal_key().len() > self.depth)
    }

    /// The current match state, without consuming a token.
    ///
    /// `Found` only once the candidate range can no longer extend: an
    /// exact match sitting alongside a still-viable longer candidate is
    /// `StillLooking` (the match is latched into `best_so_far` regardless,
    /// via [`update`](Self::update), so it isn't lost if the longer
    /// candidate later fails).
    pub fn state(&self) -> State {
        if self.maps.is_empty() || self.lo >= self.hi {
            State::NotFound
        } else if self.longer_candidate_remains() {
            State::StillLooking
        } else {
            State::Found
        }
    }

    /// Feeds one more token into the in-progress match, narrowing the
    /// candidate range to maps that agree with the input up to the new
    /// depth. Candidates shorter than the new depth (already fully
    /// matched) fall out of the range, since they can't match anything
    /// longer. Whenever an exact match sits in the narrowed range, it
    /// overwrites the latch, whether or not longer candidates remain.
    pub fn update(&mut self, token: KeyToken) -> State {
        if self.lo >= self.hi {
            return State::NotFound;
        }
        let position = self.depth;
        let candidates = &self.maps[self.lo..self.hi];
        let below = candidates.partition_point(|m| m.literal_key().get(position).copied().unwrap_or(0) < token);
        let through = candidates.partition_point(|m| m.literal_key().get(position).copied().unwrap_or(0) <= token);
        self.lo += below;
        self.hi = self.lo + (through - below);
        self.depth += 1;

        if self.lo >= self.hi {
            return State::NotFound;
        }
        if let Some(index) = self.exact_match_in_range() {
            self.best_so_far = Some(index);
        }
        self.state()
    }

    /// True once a full match has been latched, whether or not the
    /// candidate range has since gone empty from a failed extension.
    pub fn has_latched_match(&self) -> bool {
        self.best_so_far.is_some()
    }

    /// Ends the in-progress match and returns whatever the latch caught,
    /// resetting the cursor for the next attempt.
    pub fn finalize(&mut self) -> Option<Map> {
        let result = self.best_so_far.map(|index| self.maps[index].clone());
        self.reset();
        result
    }
}
