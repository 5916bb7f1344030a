//! End-to-end scenarios exercising the full matcher pipeline through the
//! public API only.

use std::time::Duration;

use kui_core::{CharSource, ContextError, LogicalKey, Manager, MapSet, MatcherContext, VecSource};

fn tokens(s: &str) -> impl Iterator<Item = u32> + '_ {
    s.bytes().map(|b| b as u32)
}

#[test]
fn prefix_is_returned_when_input_diverges_before_the_longer_match() {
    let mut ms = MapSet::new();
    ms.register("a", "short").unwrap();
    ms.register("ab", "long").unwrap();
    let mut ctx = MatcherContext::new(VecSource::new(tokens("az")), Duration::ZERO);
    ctx.add_map_set(ms);

    // "a" matches, "z" doesn't continue "ab", so the shorter match wins and
    // "z" is returned unconsumed on the next call.
    assert_eq!(ctx.get_key().unwrap(), Some(b's' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b'h' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b'o' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b'r' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b't' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b'z' as u32));
    assert_eq!(ctx.get_key().unwrap(), None);
}

#[test]
fn longer_match_wins_when_input_continues_to_extend_it() {
    let mut ms = MapSet::new();
    ms.register("a", "short").unwrap();
    ms.register("ab", "long").unwrap();
    let mut ctx = MatcherContext::new(VecSource::new(tokens("ab")), Duration::ZERO);
    ctx.add_map_set(ms);

    assert_eq!(ctx.get_key().unwrap(), Some(b'l' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b'o' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b'n' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b'g' as u32));
    assert_eq!(ctx.get_key().unwrap(), None);
}

#[test]
fn macro_value_is_rescanned_and_expands_recursively() {
    let mut ms = MapSet::new();
    ms.register("jj", "<ESC>").unwrap();
    ms.register("jk", "jj").unwrap();
    let mut ctx = MatcherContext::new(VecSource::new(tokens("jk")), Duration::ZERO);
    ctx.add_map_set(ms);

    // "jk" expands to "jj", which is itself a registered macro expanding to
    // the logical ESC key, so the final resolved token is ESC, not 'j'.
    assert_eq!(ctx.get_key().unwrap(), Some(LogicalKey::Esc.token()));
    assert_eq!(ctx.get_key().unwrap(), None);
}

#[test]
fn no_match_returns_first_byte_literally_and_preserves_the_rest() {
    let mut ms = MapSet::new();
    ms.register("xy", "Z").unwrap();
    let mut ctx = MatcherContext::new(VecSource::new(tokens("abc")), Duration::ZERO);
    ctx.add_map_set(ms);

    assert_eq!(ctx.get_key().unwrap(), Some(b'a' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b'b' as u32));
    assert_eq!(ctx.get_key().unwrap(), Some(b'c' as u32));
    assert_eq!(ctx.get_key().unwrap(), None);
}

#[test]
fn later_map_set_overrides_an_earlier_ones_match_at_the_same_depth() {
    let mut first = MapSet::new();
    first.register("a", "from-first").unwrap();
    let mut second = MapSet::new();
    second.register("a", "from-second").unwrap();

    let mut ctx = MatcherContext::new(VecSource::new(tokens("a")), Duration::ZERO);
    ctx.add_map_set(first);
    ctx.add_map_set(second);

    for expected in "from-second".bytes() {
        assert_eq!(ctx.get_key().unwrap(), Some(expected as u32));
    }
    assert_eq!(ctx.get_key().unwrap(), None);
}

#[test]
fn manager_composes_terminal_layer_with_a_user_macro_layer() {
    let mut macros = MapSet::new();
    macros.register("<UP>", "k").unwrap();

    let mut mgr = Manager::new(VecSource::new(tokens("\x1b[A")));
    mgr.add_map_set(macros);

    // The raw escape sequence resolves to the logical UP key through the
    // terminal layer, which the macro layer then remaps to 'k'.
    assert_eq!(mgr.get_key().unwrap(), Some(b'k' as u32));
    assert_eq!(mgr.get_key().unwrap(), None);
}

#[test]
fn can_get_key_does_not_consume_pushback() {
    // `can_get_key` never touches the source (spec §4.4) — it only reports
    // whether the pushback buffer already has something, so this needs a
    // macro substitution to put anything there in the first place.
    let mut ms = MapSet::new();
    ms.register("a", "bc").unwrap();
    let mut ctx = MatcherContext::new(VecSource::new(tokens("a")), Duration::ZERO);
    ctx.add_map_set(ms);

    assert_eq!(ctx.get_key().unwrap(), Some(b'b' as u32));
    assert!(ctx.can_get_key().unwrap());
    assert!(ctx.can_get_key().unwrap());
    assert_eq!(ctx.get_key().unwrap(), Some(b'c' as u32));
    assert!(!ctx.can_get_key().unwrap());
}

struct NeverReady;

impl CharSource for NeverReady {
    fn read(&mut self, _timeout: Duration) -> Result<Option<u32>, kui_core::SourceError> {
        Ok(None)
    }

    fn unread(&mut self, _token: u32) {
        unreachable!("never produces a token to unread")
    }
}

#[test]
fn empty_source_resolves_to_no_data_not_an_error() {
    let mut ctx: MatcherContext<NeverReady> = MatcherContext::new(NeverReady, Duration::ZERO);
    assert_eq!(ctx.get_key().unwrap(), None);
}

struct FailingSource;

impl CharSource for FailingSource {
    fn read(&mut self, _timeout: Duration) -> Result<Option<u32>, kui_core::SourceError> {
        Err(kui_core::SourceError("disconnected".to_string()))
    }

    fn unread(&mut self, _token: u32) {
        unreachable!("never produces a token to unread")
    }
}

#[test]
fn source_failure_propagates_as_a_context_error() {
    let mut ctx: MatcherContext<FailingSource> = MatcherContext::new(FailingSource, Duration::ZERO);
    assert!(matches!(ctx.get_key(), Err(ContextError::Source(_))));
}
