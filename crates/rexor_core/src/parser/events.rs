//! The builder-event vocabulary emitted by the validator.
//!
//! The validator drives an [`EventSink`] through a strictly properly-nested
//! stream: every `*_enter` has a matching `*_leave` at the same depth, in
//! LIFO order, and leaf events arrive between them. All offsets are UTF-16
//! code-unit indices into the original input.
//!
//! Every method has a no-op default body, so a sink only implements what it
//! cares about. The unit type implements the trait, which is what the
//! validation-only entry points use — validating allocates nothing.

use crate::parser::ast::{
    BackrefKey, EdgeKind, EscapeSetKind, LookaroundKind, ModifierFlags, RegExpFlags,
};

/// Receiver for the validator's builder events.
#[allow(unused_variables)]
pub trait EventSink {
    // ── Flags ───────────────────────────────────────────────────────────────

    /// The validated flag set of a literal (or a bare flags parse).
    fn on_flags(&mut self, start: usize, end: usize, flags: RegExpFlags) {}

    // ── Pattern / alternatives ──────────────────────────────────────────────

    /// A pattern begins.
    fn on_pattern_enter(&mut self, start: usize) {}
    /// The pattern ends. Backreference resolution happens here.
    fn on_pattern_leave(&mut self, start: usize, end: usize) {}
    /// The `index`-th alternative of the enclosing disjunction begins.
    fn on_alternative_enter(&mut self, start: usize, index: usize) {}
    /// The `index`-th alternative ends.
    fn on_alternative_leave(&mut self, start: usize, end: usize, index: usize) {}

    // ── Groups ──────────────────────────────────────────────────────────────

    /// A non-capturing group begins.
    fn on_group_enter(&mut self, start: usize) {}
    /// A non-capturing group ends.
    fn on_group_leave(&mut self, start: usize, end: usize) {}
    /// The modifier record of a `(?ims-ims:…)` group begins.
    fn on_modifiers_enter(&mut self, start: usize) {}
    /// The modifier record ends.
    fn on_modifiers_leave(&mut self, start: usize, end: usize) {}
    /// The flags switched on by an inline modifier group.
    fn on_add_modifiers(&mut self, start: usize, end: usize, flags: ModifierFlags) {}
    /// The flags switched off by an inline modifier group.
    fn on_remove_modifiers(&mut self, start: usize, end: usize, flags: ModifierFlags) {}
    /// A capturing group begins.
    fn on_capturing_group_enter(&mut self, start: usize, name: Option<&str>) {}
    /// A capturing group ends.
    fn on_capturing_group_leave(&mut self, start: usize, end: usize, name: Option<&str>) {}

    // ── Quantifier ──────────────────────────────────────────────────────────

    /// A quantifier was recognized; it wraps the element emitted
    /// immediately before it. `max` of `None` is +∞.
    fn on_quantifier(&mut self, start: usize, end: usize, min: u32, max: Option<u32>, greedy: bool) {
    }

    // ── Assertions ──────────────────────────────────────────────────────────

    /// A lookaround assertion begins.
    fn on_lookaround_assertion_enter(&mut self, start: usize, kind: LookaroundKind, negate: bool) {}
    /// A lookaround assertion ends.
    fn on_lookaround_assertion_leave(
        &mut self,
        start: usize,
        end: usize,
        kind: LookaroundKind,
        negate: bool,
    ) {
    }
    /// `^` or `$`.
    fn on_edge_assertion(&mut self, start: usize, end: usize, kind: EdgeKind) {}
    /// `\b` or `\B`.
    fn on_word_boundary_assertion(&mut self, start: usize, end: usize, negate: bool) {}

    // ── Character sets / characters ─────────────────────────────────────────

    /// `.`
    fn on_any_character_set(&mut self, start: usize, end: usize) {}
    /// `\d`, `\D`, `\s`, `\S`, `\w`, `\W`.
    fn on_escape_character_set(
        &mut self,
        start: usize,
        end: usize,
        kind: EscapeSetKind,
        negate: bool,
    ) {
    }
    /// `\p{…}` / `\P{…}`.
    fn on_unicode_property_character_set(
        &mut self,
        start: usize,
        end: usize,
        key: &str,
        value: Option<&str>,
        negate: bool,
        strings: bool,
    ) {
    }
    /// A single code point, literal or escaped.
    fn on_character(&mut self, start: usize, end: usize, value: u32) {}

    // ── Backreferences ──────────────────────────────────────────────────────

    /// `\1` or `\k<name>`. Resolution is deferred to pattern-leave.
    fn on_backreference(&mut self, start: usize, end: usize, key: &BackrefKey) {}

    // ── Character classes ───────────────────────────────────────────────────

    /// A character class begins.
    fn on_character_class_enter(&mut self, start: usize, negate: bool, unicode_sets: bool) {}
    /// A character class ends. If set operators were observed inside, the
    /// class is restructured into an expression character class here.
    fn on_character_class_leave(&mut self, start: usize, end: usize, negate: bool) {}
    /// `a-z` inside a class; collapses the preceding endpoint characters.
    fn on_character_class_range(&mut self, start: usize, end: usize, min: u32, max: u32) {}
    /// One `&&` application; folds the two most recent operands.
    fn on_class_intersection(&mut self, start: usize, end: usize) {}
    /// One `--` application; folds the two most recent operands.
    fn on_class_subtraction(&mut self, start: usize, end: usize) {}
    /// `\q{…}` begins.
    fn on_class_string_disjunction_enter(&mut self, start: usize) {}
    /// `\q{…}` ends.
    fn on_class_string_disjunction_leave(&mut self, start: usize, end: usize) {}
    /// The `index`-th branch of a `\q{…}` begins.
    fn on_string_alternative_enter(&mut self, start: usize, index: usize) {}
    /// The `index`-th branch of a `\q{…}` ends.
    fn on_string_alternative_leave(&mut self, start: usize, end: usize, index: usize) {}
}

/// Pure validation: accept and discard every event.
impl EventSink for () {}

#[cfg(test)]
mod tests {
    use super::*;

    /// A sink that records event names, for order assertions in validator
    /// tests.
    #[derive(Default)]
    pub struct RecordingSink {
        pub events: Vec<String>,
    }

    impl EventSink for RecordingSink {
        fn on_pattern_enter(&mut self, start: usize) {
            self.events.push(format!("pattern_enter@{start}"));
        }
        fn on_pattern_leave(&mut self, start: usize, end: usize) {
            self.events.push(format!("pattern_leave@{start}..{end}"));
        }
        fn on_character(&mut self, start: usize, end: usize, value: u32) {
            self.events.push(format!("character@{start}..{end}={value}"));
        }
    }

    #[test]
    fn test_unit_sink_accepts_everything() {
        let mut sink = ();
        sink.on_pattern_enter(0);
        sink.on_character(0, 1, 97);
        sink.on_quantifier(1, 2, 0, None, true);
        sink.on_pattern_leave(0, 2);
    }

    #[test]
    fn test_partial_sink_only_sees_overridden_events() {
        let mut sink = RecordingSink::default();
        sink.on_pattern_enter(0);
        sink.on_group_enter(0); // default no-op
        sink.on_character(1, 2, 98);
        sink.on_pattern_leave(0, 3);
        assert_eq!(
            sink.events,
            vec!["pattern_enter@0", "character@1..2=98", "pattern_leave@0..3"]
        );
    }
}
