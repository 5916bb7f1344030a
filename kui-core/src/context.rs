//! [`MatcherContext`]: the greedy-longest-match engine itself.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::ContextError;
use crate::map_set::{MapSet, State};
use crate::source::CharSource;
use crate::token::KeyToken;

/// Upper bound on tokens consumed by a single `findkey` pass before giving
/// up. Guards against a macro whose value expands back into itself (or a
/// cycle of macros) looping forever; see spec §4.4 / §8. Chosen to match
/// the original's fixed `bufmax[1024]` scratch buffer.
pub const PASS_MAX_TOKENS: usize = 1024;

enum PassOutcome {
    /// A macro matched; its value (plus any unconsumed tail) has been
    /// pushed back for the next pass to re-scan.
    Substituted,
    /// No macro matched (or the candidate match ran out of runway); the
    /// given token is the resolved key.
    Literal(KeyToken),
    /// The source had nothing to offer and the pushback buffer was empty.
    NoData,
}

/// A greedy-longest-match engine over one or more [`MapSet`]s, reading
/// from a [`CharSource`].
///
/// Feeding a token through every registered map set in parallel and
/// stopping as soon as none of them could possibly extend further is the
/// `findkey` pass from spec §4.4. A pass that resolves to a macro's value
/// doesn't return that value to the caller directly — it's pushed back
/// onto the context's own buffer and re-scanned by another pass, so a
/// macro whose value is itself a key sequence recognized by another map
/// (or the same one) expands transparently.
pub struct MatcherContext<S> {
    map_sets: Vec<MapSet>,
    pushback: VecDeque<KeyToken>,
    source: S,
    timeout: Duration,
}

impl<S: CharSource> MatcherContext<S> {
    /// Builds a context with no map sets yet, reading from `source` with
    /// reads and readiness checks bounded by `timeout`.
    pub fn new(source: S, timeout: Duration) -> Self {
        MatcherContext { map_sets: Vec::new(), pushback: VecDeque::new(), source, timeout }
    }

    /// Registers another map set. Map sets are scanned in registration
    /// order; when two map sets both match at the same final depth, the
    /// one registered later wins (spec §4.3/§9).
    pub fn add_map_set(&mut self, map_set: MapSet) {
        self.map_sets.push(map_set);
    }

    /// The map sets currently registered, in scan order.
    pub fn map_sets(&self) -> &[MapSet] {
        &self.map_sets
    }

    /// Reports whether the pushback buffer has a token ready to return.
    /// Never blocks, never touches the source (spec §4.4): a pushed-back
    /// macro value always counts as "ready" even if the underlying source
    /// has nothing of its own.
    pub fn can_get_key(&mut self) -> Result<bool, ContextError> {
        Ok(!self.pushback.is_empty())
    }

    /// Like [`can_get_key`](Self::can_get_key), but when the pushback
    /// buffer is empty, probes the source's readiness bounded by `timeout`
    /// instead of returning `false` outright. Used by [`crate::manager`]
    /// to bridge one context's read timeout down to the context it reads
    /// from, mirroring the original's cangetkey-then-timed-read bridge.
    pub fn can_get_key_within(&mut self, timeout: Duration) -> Result<bool, ContextError> {
        if !self.pushback.is_empty() {
            return Ok(true);
        }
        self.source.data_ready(timeout).map_err(ContextError::from)
    }

    /// Resolves and returns the next key token, transparently expanding
    /// any number of chained macro substitutions. Returns `Ok(None)` if
    /// the source had nothing to offer within the timeout.
    pub fn get_key(&mut self) -> Result<Option<KeyToken>, ContextError> {
        loop {
            match self.findkey_pass()? {
                PassOutcome::Substituted => continue,
                PassOutcome::Literal(token) => return Ok(Some(token)),
                PassOutcome::NoData => return Ok(None),
            }
        }
    }

    /// Reads the next token, preferring anything already pushed back over
    /// a fresh read from the source.
    fn findchar(&mut self) -> Result<Option<KeyToken>, ContextError> {
        if let Some(token) = self.pushback.pop_front() {
            return Ok(Some(token));
        }
        self.source.read(self.timeout).map_err(ContextError::from)
    }

    fn findkey_pass(&mut self) -> Result<PassOutcome, ContextError> {
        for ms in &mut self.map_sets {
            ms.reset();
        }
        let mut consumed: Vec<KeyToken> = Vec::new();

        loop {
            if consumed.len() >= PASS_MAX_TOKENS {
                return Err(ContextError::PassBoundExceeded { limit: PASS_MAX_TOKENS });
            }
            let Some(token) = self.findchar()? else { break };
            consumed.push(token);
            for ms in &mut self.map_sets {
                ms.update(token);
            }
            if self.map_sets.iter().all(|ms| ms.state() != State::StillLooking) {
                break;
            }
        }

        // A map set's final per-token state can be `NotFound` even though
        // it latched a match earlier (the longer candidate it kept
        // probing for simply didn't pan out) — `has_latched_match` is the
        // right test for "this map set has a result", not `state()`.
        let winner = self
            .map_sets
            .iter()
            .enumerate()
            .filter(|(_, ms)| ms.has_latched_match())
            .map(|(i, _)| i)
            .last();

        let outcome = if let Some(index) = winner {
            let matched = self.map_sets[index].finalize().expect("Found implies a latched match");
            let consumed_len = matched.literal_key().len();
            let tail = &consumed[consumed_len..];
            trace!(key = %matched.original_key(), value = %matched.original_value(), tail_len = tail.len(), "macro matched, substituting");
            for &token in tail.iter().rev() {
                self.pushback.push_front(token);
            }
            for &token in matched.literal_value().iter().rev() {
                self.pushback.push_front(token);
            }
            PassOutcome::Substituted
        } else if let Some(&first) = consumed.first() {
            for &token in consumed[1..].iter().rev() {
                self.pushback.push_front(token);
            }
            PassOutcome::Literal(first)
        } else {
            PassOutcome::NoData
        };

        for (i, ms) in self.map_sets.iter_mut().enumerate() {
            if winner != Some(i) {
                ms.finalize();
            }
        }

        debug!(consumed = consumed.len(), "findkey pass complete");
        Ok(outcome)
    }
}
