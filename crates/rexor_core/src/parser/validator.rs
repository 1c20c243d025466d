//! Recursive-descent RegExp validator.
//!
//! [`RegExpValidator`] walks a literal, flags string, or bare pattern under
//! one edition/mode combination, rejecting every construct the configured
//! grammar forbids and emitting a builder-event stream describing what it
//! accepted. It never allocates AST nodes itself — an
//! [`EventSink`](crate::parser::events::EventSink) does that (or discards
//! the stream, for validation-only callers).
//!
//! # Dialect switches
//!
//! Three booleans pick the grammar:
//!
//! - `unicode_mode` — set by `u` or `v`: surrogate pairs decode as code
//!   points, Annex B escapes become hard errors, `\u{…}` is admitted.
//! - `unicode_sets_mode` — set by `v`: class bodies switch to the
//!   set-notation grammar (`&&`, `--`, nesting, `\q{…}`).
//! - `strict` — disables Annex B even without `u`/`v`.
//!
//! The edition (`EcmaVersion`) gates features orthogonally: lookbehind and
//! named groups at 2018, the `d` flag at 2022, the `v` flag at 2024,
//! duplicate names across branches and inline modifiers at 2025.

use std::collections::HashSet;

use crate::error::{ErrorKind, ParseResult, RegExpSyntaxError};
use crate::parser::ast::{
    BackrefKey, EdgeKind, EscapeSetKind, LookaroundKind, ModifierFlags, RegExpFlags,
};
use crate::parser::events::EventSink;
use crate::parser::prescan;
use crate::parser::reader::Reader;
use crate::parser::scope::GroupNames;
use crate::parser::{EcmaVersion, ParserOptions};
use crate::unicode::{
    is_class_set_reserved_double_punctuator, is_class_set_reserved_punctuator,
    is_class_set_syntax_character, is_decimal_digit, is_id_continue, is_id_start,
    is_lead_surrogate, is_line_terminator, is_octal_digit, is_syntax_character,
    is_trail_surrogate, properties,
};

/// Inputs above this many code units are refused outright.
pub const MAX_PATTERN_UNITS: usize = 1 << 20;

/// Tracks whether a `v`-mode class production may match strings (rather
/// than single characters). A negated class must not.
#[derive(Debug, Default, Clone, Copy)]
struct ClassSetResult {
    may_contain_strings: bool,
}

/// Result of a successful `\p{…}` body parse.
#[derive(Debug)]
struct PropertyResult {
    key: String,
    value: Option<String>,
    strings: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Validator
// ─────────────────────────────────────────────────────────────────────────────

/// The validator. Construct one per parse; entry points are
/// [`validate_literal_at`](Self::validate_literal_at),
/// [`validate_flags_at`](Self::validate_flags_at), and
/// [`validate_pattern_at`](Self::validate_pattern_at).
pub struct RegExpValidator<'s, S: EventSink> {
    sink: &'s mut S,
    strict: bool,
    ecma_version: EcmaVersion,
    reader: Reader,
    unicode_mode: bool,
    unicode_sets_mode: bool,
    /// `true` when the named-backreference production (`\k<name>`) is
    /// active: unicode mode, or a named group somewhere in the pattern.
    n_flag: bool,
    /// Total capturing groups, from the pre-scan.
    num_capturing_parens: u32,
    /// Declared group names, from the pre-scan.
    pattern_names: HashSet<String>,
    /// Branch-scoped registry of names declared so far in the walk.
    group_names: GroupNames,
    /// Named backreferences seen, with their offsets, checked at pattern
    /// end against `pattern_names`.
    backreference_names: Vec<(String, usize)>,
    /// Value of the most recent escape/character production.
    last_int_value: u32,
    /// Value of the most recent class atom; `None` when it was a character
    /// set (`\d`, `\p{…}`) and therefore unusable as a range endpoint.
    last_atom_value: Option<u32>,
    /// Bounds of the most recent braced quantifier.
    last_range: (u32, Option<u32>),
    /// Text of the most recent group-name/property-name production.
    last_str_value: String,
    /// Whether the most recent assertion may take a quantifier (Annex B
    /// lookahead only).
    last_assertion_is_quantifiable: bool,
}

impl<'s, S: EventSink> RegExpValidator<'s, S> {
    /// Creates a validator with the given options, forwarding events to
    /// `sink`.
    pub fn new(options: &ParserOptions, sink: &'s mut S) -> Self {
        Self {
            sink,
            strict: options.strict,
            ecma_version: options.ecma_version,
            reader: Reader::new(""),
            unicode_mode: false,
            unicode_sets_mode: false,
            n_flag: false,
            num_capturing_parens: 0,
            pattern_names: HashSet::new(),
            group_names: GroupNames::flat(),
            backreference_names: Vec::new(),
            last_int_value: 0,
            last_atom_value: None,
            last_range: (0, None),
            last_str_value: String::new(),
            last_assertion_is_quantifiable: false,
        }
    }

    // ── Entry points ────────────────────────────────────────────────────────

    /// Validates the literal `source[start..end)` (`/pattern/flags`,
    /// offsets in code units). Emits the flags event followed by the
    /// pattern event stream.
    pub fn validate_literal_at(
        &mut self,
        source: &str,
        start: usize,
        end: usize,
    ) -> ParseResult<()> {
        self.reader = Reader::new(source);
        self.check_size_cap(start)?;
        self.reader.reset(start, end, false);

        if !self.reader.eat('/') {
            if start >= end {
                return Err(self.err_at(
                    ErrorKind::InvalidGrammar,
                    start,
                    "empty regular expression literal",
                ));
            }
            return self.raise(ErrorKind::InvalidGrammar, "regular expression literal must start with '/'");
        }
        self.eat_regexp_body()?;
        // The body scan stops at the closing solidus.
        self.reader.eat('/');
        let flag_start = self.reader.index();

        self.reader.reset(flag_start, end, false);
        let flags = self.validate_flags_window(flag_start, end)?;
        self.validate_pattern_window(
            start + 1,
            flag_start - 1,
            flags.contains(RegExpFlags::UNICODE),
            flags.contains(RegExpFlags::UNICODE_SETS),
        )?;
        Ok(())
    }

    /// Validates the flags string `source[start..end)` and returns the
    /// flag set.
    pub fn validate_flags_at(
        &mut self,
        source: &str,
        start: usize,
        end: usize,
    ) -> ParseResult<RegExpFlags> {
        self.reader = Reader::new(source);
        self.check_size_cap(start)?;
        self.reader.reset(start, end, false);
        self.validate_flags_window(start, end)
    }

    /// Validates the bare pattern `source[start..end)` under the given
    /// mode.
    pub fn validate_pattern_at(
        &mut self,
        source: &str,
        start: usize,
        end: usize,
        unicode: bool,
        unicode_sets: bool,
    ) -> ParseResult<()> {
        self.reader = Reader::new(source);
        self.check_size_cap(start)?;
        self.validate_pattern_window(start, end, unicode, unicode_sets)
    }

    fn check_size_cap(&self, start: usize) -> ParseResult<()> {
        if self.reader.unit_len() > MAX_PATTERN_UNITS {
            return Err(self.err_at(
                ErrorKind::PatternTooLarge,
                start,
                format!("input exceeds {MAX_PATTERN_UNITS} code units"),
            ));
        }
        Ok(())
    }

    // ── Errors ──────────────────────────────────────────────────────────────

    fn err_at(&self, kind: ErrorKind, offset: usize, message: impl Into<String>) -> RegExpSyntaxError {
        RegExpSyntaxError::new(kind, offset, message)
    }

    /// Error at the current cursor position.
    fn raise<T>(&self, kind: ErrorKind, message: &str) -> ParseResult<T> {
        Err(self.err_at(kind, self.reader.index(), message))
    }

    // ── Literal body ────────────────────────────────────────────────────────

    /// Scans the pattern body of a literal up to (not including) the
    /// closing `/`, honoring escapes and character classes.
    fn eat_regexp_body(&mut self) -> ParseResult<()> {
        let start = self.reader.index();
        let mut in_class = false;
        let mut escaped = false;
        loop {
            let cp = match self.reader.current() {
                None => {
                    return if in_class {
                        self.raise(ErrorKind::UnterminatedClass, "unterminated character class")
                    } else {
                        self.raise(
                            ErrorKind::InvalidGrammar,
                            "unterminated regular expression literal",
                        )
                    };
                }
                Some(cp) => cp,
            };
            if is_line_terminator(cp) {
                return self.raise(
                    ErrorKind::InvalidGrammar,
                    "unterminated regular expression literal",
                );
            }
            if escaped {
                escaped = false;
            } else if cp == '\\' as u32 {
                escaped = true;
            } else if cp == '[' as u32 {
                in_class = true;
            } else if cp == ']' as u32 {
                in_class = false;
            } else if cp == '/' as u32 && !in_class {
                break;
            }
            self.reader.advance();
        }
        if self.reader.index() == start {
            return self.raise(ErrorKind::InvalidGrammar, "empty regular expression body");
        }
        Ok(())
    }

    // ── Flags ───────────────────────────────────────────────────────────────

    fn validate_flags_window(&mut self, start: usize, end: usize) -> ParseResult<RegExpFlags> {
        let mut flags = RegExpFlags::empty();
        while let Some(cp) = self.reader.current() {
            let offset = self.reader.index();
            let flag = match char::from_u32(cp) {
                Some('g') => RegExpFlags::GLOBAL,
                Some('i') => RegExpFlags::IGNORE_CASE,
                Some('m') => RegExpFlags::MULTILINE,
                Some('u') => RegExpFlags::UNICODE,
                Some('y') => RegExpFlags::STICKY,
                Some('s') if self.ecma_version >= EcmaVersion::Es2018 => RegExpFlags::DOT_ALL,
                Some('d') if self.ecma_version >= EcmaVersion::Es2022 => RegExpFlags::HAS_INDICES,
                Some('v') if self.ecma_version >= EcmaVersion::Es2024 => RegExpFlags::UNICODE_SETS,
                Some(c) if c.is_ascii_alphanumeric() => {
                    return Err(self.err_at(
                        ErrorKind::InvalidFlags,
                        offset,
                        format!("invalid flag {c}"),
                    ));
                }
                _ => {
                    return Err(self.err_at(ErrorKind::InvalidFlags, offset, "invalid flag"));
                }
            };
            if flags.contains(flag) {
                return Err(self.err_at(ErrorKind::InvalidFlags, offset, "duplicated flag"));
            }
            flags |= flag;
            self.reader.advance();
        }
        if flags.contains(RegExpFlags::UNICODE) && flags.contains(RegExpFlags::UNICODE_SETS) {
            return Err(self.err_at(
                ErrorKind::InvalidFlags,
                start,
                "cannot use the u and v flags together",
            ));
        }
        self.sink.on_flags(start, end, flags);
        Ok(flags)
    }

    // ── Pattern ─────────────────────────────────────────────────────────────

    fn validate_pattern_window(
        &mut self,
        start: usize,
        end: usize,
        unicode: bool,
        unicode_sets: bool,
    ) -> ParseResult<()> {
        if unicode && unicode_sets {
            return Err(self.err_at(
                ErrorKind::InvalidFlags,
                start,
                "cannot use the u and v flags together",
            ));
        }
        if unicode_sets && self.ecma_version < EcmaVersion::Es2024 {
            return Err(self.err_at(
                ErrorKind::InvalidGrammar,
                start,
                "the v flag requires ECMAScript 2024",
            ));
        }
        self.unicode_mode = unicode || unicode_sets;
        self.unicode_sets_mode = unicode_sets;
        self.reader.reset(start, end, self.unicode_mode);

        let summary = prescan::scan_pattern(&mut self.reader);
        self.num_capturing_parens = summary.capture_count;
        self.n_flag = self.ecma_version >= EcmaVersion::Es2018
            && (self.unicode_mode || summary.has_names());
        self.pattern_names = summary.names;
        self.group_names = if self.ecma_version >= EcmaVersion::Es2025 {
            GroupNames::branched()
        } else {
            GroupNames::flat()
        };
        self.backreference_names.clear();

        self.consume_pattern(start)
    }

    fn consume_pattern(&mut self, start: usize) -> ParseResult<()> {
        self.sink.on_pattern_enter(start);
        self.consume_disjunction()?;

        if let Some(cp) = self.reader.current() {
            if cp == ')' as u32 {
                return self.raise(ErrorKind::InvalidGrammar, "unmatched ')'");
            }
            if cp == '\\' as u32 {
                return self.raise(ErrorKind::UnterminatedEscape, "\\ at end of pattern");
            }
            if cp == ']' as u32 || cp == '}' as u32 {
                return self.raise(ErrorKind::InvalidGrammar, "lone quantifier brackets");
            }
            return self.raise(ErrorKind::InvalidGrammar, "unexpected character");
        }

        for (name, offset) in std::mem::take(&mut self.backreference_names) {
            if !self.pattern_names.contains(&name) {
                return Err(self.err_at(
                    ErrorKind::InvalidBackreference,
                    offset,
                    format!("invalid named reference <{name}>"),
                ));
            }
        }

        self.sink.on_pattern_leave(start, self.reader.index());
        Ok(())
    }

    fn consume_disjunction(&mut self) -> ParseResult<()> {
        self.group_names.enter_disjunction();
        let mut i = 0;
        loop {
            self.consume_alternative(i)?;
            i += 1;
            if !self.reader.eat('|') {
                break;
            }
        }
        if self.consume_quantifier(true)? {
            return self.raise(ErrorKind::InvalidQuantifier, "nothing to repeat");
        }
        if self.reader.eat('{') {
            return self.raise(ErrorKind::InvalidQuantifier, "lone quantifier brackets");
        }
        self.group_names.leave_disjunction();
        Ok(())
    }

    fn consume_alternative(&mut self, index: usize) -> ParseResult<()> {
        let start = self.reader.index();
        self.group_names.enter_alternative(index);
        self.sink.on_alternative_enter(start, index);
        while self.reader.current().is_some() && self.consume_term()? {}
        self.sink.on_alternative_leave(start, self.reader.index(), index);
        Ok(())
    }

    // ── Terms ───────────────────────────────────────────────────────────────

    fn consume_term(&mut self) -> ParseResult<bool> {
        if self.unicode_mode || self.strict {
            if self.consume_assertion()? {
                return Ok(true);
            }
            if self.consume_atom()? {
                self.consume_optional_quantifier()?;
                return Ok(true);
            }
            return Ok(false);
        }
        if self.consume_assertion()? {
            if self.last_assertion_is_quantifiable {
                self.consume_optional_quantifier()?;
            }
            return Ok(true);
        }
        if self.consume_extended_atom()? {
            self.consume_optional_quantifier()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn consume_optional_quantifier(&mut self) -> ParseResult<()> {
        self.consume_quantifier(false)?;
        Ok(())
    }

    fn consume_assertion(&mut self) -> ParseResult<bool> {
        let start = self.reader.index();
        self.last_assertion_is_quantifiable = false;

        if self.reader.eat('^') {
            self.sink
                .on_edge_assertion(start, self.reader.index(), EdgeKind::Start);
            return Ok(true);
        }
        if self.reader.eat('$') {
            self.sink
                .on_edge_assertion(start, self.reader.index(), EdgeKind::End);
            return Ok(true);
        }
        if self.reader.eat2('\\', 'B') {
            self.sink
                .on_word_boundary_assertion(start, self.reader.index(), true);
            return Ok(true);
        }
        if self.reader.eat2('\\', 'b') {
            self.sink
                .on_word_boundary_assertion(start, self.reader.index(), false);
            return Ok(true);
        }

        // Lookahead / lookbehind.
        if self.reader.eat2('(', '?') {
            let lookbehind =
                self.ecma_version >= EcmaVersion::Es2018 && self.reader.eat('<');
            let mut negate = false;
            if self.reader.eat('=') || {
                negate = self.reader.eat('!');
                negate
            } {
                let kind = if lookbehind {
                    LookaroundKind::Lookbehind
                } else {
                    LookaroundKind::Lookahead
                };
                self.sink.on_lookaround_assertion_enter(start, kind, negate);
                self.consume_disjunction()?;
                if !self.reader.eat(')') {
                    return self.raise(ErrorKind::UnterminatedGroup, "unterminated group");
                }
                self.last_assertion_is_quantifiable = !lookbehind && !self.strict;
                self.sink
                    .on_lookaround_assertion_leave(start, self.reader.index(), kind, negate);
                return Ok(true);
            }
            self.reader.rewind(start);
        }
        Ok(false)
    }

    // ── Quantifiers ─────────────────────────────────────────────────────────

    fn consume_quantifier(&mut self, no_consume: bool) -> ParseResult<bool> {
        let start = self.reader.index();
        let (min, max) = if self.reader.eat('*') {
            (0, None)
        } else if self.reader.eat('+') {
            (1, None)
        } else if self.reader.eat('?') {
            (0, Some(1))
        } else if self.eat_braced_quantifier(no_consume)? {
            self.last_range
        } else {
            return Ok(false);
        };
        let greedy = !self.reader.eat('?');
        if !no_consume {
            self.sink
                .on_quantifier(start, self.reader.index(), min, max, greedy);
        }
        Ok(true)
    }

    fn eat_braced_quantifier(&mut self, no_error: bool) -> ParseResult<bool> {
        let start = self.reader.index();
        if self.reader.eat('{') {
            if let Some(min) = self.reader.eat_decimal_digits() {
                let mut max = Some(min);
                if self.reader.eat(',') {
                    max = self.reader.eat_decimal_digits();
                }
                if self.reader.eat('}') {
                    if !no_error {
                        if let Some(m) = max {
                            if m < min {
                                return Err(self.err_at(
                                    ErrorKind::InvalidQuantifier,
                                    start,
                                    "numbers out of order in {} quantifier",
                                ));
                            }
                        }
                    }
                    self.last_range = (min, max);
                    return Ok(true);
                }
            }
            if !no_error && (self.unicode_mode || self.strict) {
                return Err(self.err_at(
                    ErrorKind::InvalidQuantifier,
                    start,
                    "incomplete quantifier",
                ));
            }
            self.reader.rewind(start);
        }
        Ok(false)
    }

    // ── Atoms ───────────────────────────────────────────────────────────────

    fn consume_atom(&mut self) -> ParseResult<bool> {
        Ok(self.consume_pattern_character()
            || self.consume_dot()
            || self.consume_reverse_solidus_atom_escape()?
            || self.consume_character_class()?.is_some()
            || self.consume_uncapturing_group()?
            || self.consume_capturing_group()?)
    }

    fn consume_extended_atom(&mut self) -> ParseResult<bool> {
        Ok(self.consume_dot()
            || self.consume_reverse_solidus_atom_escape()?
            || self.consume_reverse_solidus_followed_by_c()
            || self.consume_character_class()?.is_some()
            || self.consume_uncapturing_group()?
            || self.consume_capturing_group()?
            || self.consume_invalid_braced_quantifier()?
            || self.consume_extended_pattern_character())
    }

    fn consume_dot(&mut self) -> bool {
        let start = self.reader.index();
        if self.reader.eat('.') {
            self.sink.on_any_character_set(start, self.reader.index());
            return true;
        }
        false
    }

    fn consume_pattern_character(&mut self) -> bool {
        let start = self.reader.index();
        match self.reader.current() {
            Some(cp) if !is_syntax_character(cp) => {
                self.reader.advance();
                self.sink.on_character(start, self.reader.index(), cp);
                true
            }
            _ => false,
        }
    }

    /// Annex B: every code point except `^ $ \ . * + ? ( ) [ |` is a
    /// literal character (lone `]`, `{`, `}` included).
    fn consume_extended_pattern_character(&mut self) -> bool {
        let start = self.reader.index();
        match self.reader.current() {
            Some(cp)
                if !matches!(
                    char::from_u32(cp),
                    Some('^' | '$' | '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | '|')
                ) =>
            {
                self.reader.advance();
                self.sink.on_character(start, self.reader.index(), cp);
                true
            }
            _ => false,
        }
    }

    /// Annex B: `\c` not followed by a control letter is a literal `\`.
    fn consume_reverse_solidus_followed_by_c(&mut self) -> bool {
        let start = self.reader.index();
        if self.reader.current() == Some('\\' as u32) && self.reader.next() == Some('c' as u32) {
            self.last_int_value = '\\' as u32;
            self.reader.advance();
            self.sink
                .on_character(start, self.reader.index(), '\\' as u32);
            return true;
        }
        false
    }

    /// Annex B: a well-formed `{n,m}` with nothing before it is an error
    /// even in sloppy mode.
    fn consume_invalid_braced_quantifier(&mut self) -> ParseResult<bool> {
        if self.eat_braced_quantifier(true)? {
            return self.raise(ErrorKind::InvalidQuantifier, "nothing to repeat");
        }
        Ok(false)
    }

    fn consume_reverse_solidus_atom_escape(&mut self) -> ParseResult<bool> {
        let start = self.reader.index();
        if self.reader.eat('\\') {
            if self.consume_atom_escape(start)? {
                return Ok(true);
            }
            self.reader.rewind(start);
        }
        Ok(false)
    }

    // ── Groups ──────────────────────────────────────────────────────────────

    fn consume_uncapturing_group(&mut self) -> ParseResult<bool> {
        let start = self.reader.index();
        if self.reader.eat2('(', '?') {
            if self.reader.eat(':') {
                self.sink.on_group_enter(start);
                self.consume_disjunction()?;
                if !self.reader.eat(')') {
                    return self.raise(ErrorKind::UnterminatedGroup, "unterminated group");
                }
                self.sink.on_group_leave(start, self.reader.index());
                return Ok(true);
            }
            if self.ecma_version >= EcmaVersion::Es2025 && self.at_modifier_head() {
                self.sink.on_group_enter(start);
                self.consume_modifiers()?;
                if !self.reader.eat(':') {
                    return self.raise(ErrorKind::InvalidGrammar, "invalid group");
                }
                self.consume_disjunction()?;
                if !self.reader.eat(')') {
                    return self.raise(ErrorKind::UnterminatedGroup, "unterminated group");
                }
                self.sink.on_group_leave(start, self.reader.index());
                return Ok(true);
            }
            self.reader.rewind(start);
        }
        Ok(false)
    }

    fn at_modifier_head(&self) -> bool {
        matches!(
            self.reader.current().and_then(char::from_u32),
            Some('i' | 'm' | 's' | '-')
        )
    }

    fn consume_modifiers(&mut self) -> ParseResult<()> {
        let start = self.reader.index();
        self.sink.on_modifiers_enter(start);

        let add = self.eat_modifier_flags()?;
        self.sink
            .on_add_modifiers(start, self.reader.index(), add);

        if self.reader.eat('-') {
            let remove_start = self.reader.index();
            let remove = self.eat_modifier_flags()?;
            if add.is_empty() && remove.is_empty() {
                return Err(self.err_at(
                    ErrorKind::InvalidFlags,
                    start,
                    "modifiers must not be empty on both sides",
                ));
            }
            if add.intersects(remove) {
                return Err(self.err_at(
                    ErrorKind::InvalidFlags,
                    remove_start,
                    "modifier both added and removed",
                ));
            }
            self.sink
                .on_remove_modifiers(remove_start, self.reader.index(), remove);
        }

        self.sink.on_modifiers_leave(start, self.reader.index());
        Ok(())
    }

    fn eat_modifier_flags(&mut self) -> ParseResult<ModifierFlags> {
        let mut flags = ModifierFlags::empty();
        while let Some(cp) = self.reader.current() {
            let flag = match char::from_u32(cp) {
                Some('i') => ModifierFlags::IGNORE_CASE,
                Some('m') => ModifierFlags::MULTILINE,
                Some('s') => ModifierFlags::DOT_ALL,
                _ => break,
            };
            if flags.contains(flag) {
                return self.raise(ErrorKind::InvalidFlags, "duplicated modifier");
            }
            flags |= flag;
            self.reader.advance();
        }
        Ok(flags)
    }

    fn consume_capturing_group(&mut self) -> ParseResult<bool> {
        let start = self.reader.index();
        if self.reader.eat('(') {
            let mut name: Option<String> = None;
            if self.ecma_version >= EcmaVersion::Es2018 {
                if self.consume_group_specifier()? {
                    name = Some(self.last_str_value.clone());
                } else if self.reader.current_is('?') {
                    return self.raise(ErrorKind::InvalidGrammar, "invalid group");
                }
            } else if self.reader.current_is('?') {
                return self.raise(ErrorKind::InvalidGrammar, "invalid group");
            }

            self.sink.on_capturing_group_enter(start, name.as_deref());
            self.consume_disjunction()?;
            if !self.reader.eat(')') {
                return self.raise(ErrorKind::UnterminatedGroup, "unterminated group");
            }
            self.sink
                .on_capturing_group_leave(start, self.reader.index(), name.as_deref());
            return Ok(true);
        }
        Ok(false)
    }

    fn consume_group_specifier(&mut self) -> ParseResult<bool> {
        let start = self.reader.index();
        if self.reader.eat('?') {
            let name_start = self.reader.index();
            if self.eat_group_name()? {
                if !self.group_names.has_in_scope(&self.last_str_value) {
                    let name = self.last_str_value.clone();
                    self.group_names.add_to_scope(&name);
                    return Ok(true);
                }
                return Err(self.err_at(
                    ErrorKind::InvalidNamedCapture,
                    name_start,
                    "duplicate capture group name",
                ));
            }
            self.reader.rewind(start);
        }
        Ok(false)
    }

    /// `< RegExpIdentifierName >`, with unicode escapes decoded.
    fn eat_group_name(&mut self) -> ParseResult<bool> {
        if self.reader.eat('<') {
            if self.eat_regexp_identifier_name()? && self.reader.eat('>') {
                return Ok(true);
            }
            return self.raise(ErrorKind::InvalidNamedCapture, "invalid capture group name");
        }
        Ok(false)
    }

    fn eat_regexp_identifier_name(&mut self) -> ParseResult<bool> {
        if let Some(cp) = self.eat_regexp_identifier_char(true)? {
            self.last_str_value.clear();
            if let Some(c) = char::from_u32(cp) {
                self.last_str_value.push(c);
            }
            while let Some(cp) = self.eat_regexp_identifier_char(false)? {
                if let Some(c) = char::from_u32(cp) {
                    self.last_str_value.push(c);
                }
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// One identifier start/continue character, possibly written as a
    /// unicode escape or (outside unicode mode) a raw surrogate pair.
    fn eat_regexp_identifier_char(&mut self, start_char: bool) -> ParseResult<Option<u32>> {
        let start = self.reader.index();
        let force_u = !self.unicode_mode && self.ecma_version >= EcmaVersion::Es2020;
        let mut cp = match self.reader.current() {
            None => return Ok(None),
            Some(cp) => cp,
        };
        self.reader.advance();

        if cp == '\\' as u32 {
            match self.eat_unicode_escape_checked(force_u)? {
                Some(value) => cp = value,
                None => {
                    self.reader.rewind(start);
                    return Ok(None);
                }
            }
        } else if force_u && is_lead_surrogate(cp) {
            if let Some(next) = self.reader.current() {
                if is_trail_surrogate(next) {
                    cp = crate::unicode::combine_surrogate_pair(cp, next);
                    self.reader.advance();
                }
            }
        }

        let valid = if start_char {
            is_id_start(cp)
        } else {
            is_id_continue(cp)
        };
        if valid {
            Ok(Some(cp))
        } else {
            self.reader.rewind(start);
            Ok(None)
        }
    }

    // ── Atom escapes ────────────────────────────────────────────────────────

    fn consume_atom_escape(&mut self, escape_start: usize) -> ParseResult<bool> {
        if self.consume_backreference(escape_start)? {
            return Ok(true);
        }
        if self.consume_character_class_escape(escape_start)?.is_some() {
            return Ok(true);
        }
        if self.consume_character_escape(escape_start)? {
            return Ok(true);
        }
        if self.n_flag && self.consume_k_group_name(escape_start)? {
            return Ok(true);
        }
        if self.strict || self.unicode_mode {
            return self.raise(ErrorKind::InvalidEscape, "invalid escape");
        }
        Ok(false)
    }

    fn consume_backreference(&mut self, escape_start: usize) -> ParseResult<bool> {
        let start = self.reader.index();
        if self.eat_decimal_escape() {
            let n = self.last_int_value;
            if n <= self.num_capturing_parens {
                self.sink.on_backreference(
                    escape_start,
                    self.reader.index(),
                    &BackrefKey::Index(n),
                );
                return Ok(true);
            }
            if self.strict || self.unicode_mode {
                return Err(self.err_at(
                    ErrorKind::InvalidBackreference,
                    escape_start,
                    "backreference to nonexistent group",
                ));
            }
            self.reader.rewind(start);
        }
        Ok(false)
    }

    fn eat_decimal_escape(&mut self) -> bool {
        match self.reader.current() {
            Some(cp) if (0x31..=0x39).contains(&cp) => {
                // eat_decimal_digits always succeeds here.
                self.last_int_value = self.reader.eat_decimal_digits().unwrap_or(0);
                true
            }
            _ => false,
        }
    }

    fn consume_k_group_name(&mut self, escape_start: usize) -> ParseResult<bool> {
        if self.reader.eat('k') {
            if self.eat_group_name()? {
                let name = self.last_str_value.clone();
                self.backreference_names.push((name.clone(), escape_start));
                self.sink.on_backreference(
                    escape_start,
                    self.reader.index(),
                    &BackrefKey::Name(name),
                );
                return Ok(true);
            }
            return self.raise(ErrorKind::InvalidBackreference, "invalid named reference");
        }
        Ok(false)
    }

    // ── Character class escapes (\d \s \w \p) ───────────────────────────────

    fn consume_character_class_escape(
        &mut self,
        escape_start: usize,
    ) -> ParseResult<Option<ClassSetResult>> {
        for (c, kind) in [
            ('d', EscapeSetKind::Digit),
            ('D', EscapeSetKind::Digit),
            ('s', EscapeSetKind::Space),
            ('S', EscapeSetKind::Space),
            ('w', EscapeSetKind::Word),
            ('W', EscapeSetKind::Word),
        ] {
            if self.reader.eat(c) {
                let negate = c.is_ascii_uppercase();
                self.sink.on_escape_character_set(
                    escape_start,
                    self.reader.index(),
                    kind,
                    negate,
                );
                return Ok(Some(ClassSetResult::default()));
            }
        }

        if self.unicode_mode && self.ecma_version >= EcmaVersion::Es2018 {
            let mut negate = false;
            if self.reader.eat('p') || {
                negate = self.reader.eat('P');
                negate
            } {
                if self.reader.eat('{') {
                    if let Some(result) = self.eat_unicode_property_value_expression()? {
                        if self.reader.eat('}') {
                            if negate && result.strings {
                                return Err(self.err_at(
                                    ErrorKind::InvalidUnicodeProperty,
                                    escape_start,
                                    "property of strings cannot be negated",
                                ));
                            }
                            self.sink.on_unicode_property_character_set(
                                escape_start,
                                self.reader.index(),
                                &result.key,
                                result.value.as_deref(),
                                negate,
                                result.strings,
                            );
                            return Ok(Some(ClassSetResult {
                                may_contain_strings: result.strings,
                            }));
                        }
                    }
                }
                return Err(self.err_at(
                    ErrorKind::InvalidUnicodeProperty,
                    escape_start,
                    "invalid property name",
                ));
            }
        }
        Ok(None)
    }

    fn eat_unicode_property_value_expression(&mut self) -> ParseResult<Option<PropertyResult>> {
        let start = self.reader.index();

        // UnicodePropertyName=UnicodePropertyValue
        if self.eat_unicode_property_name() && self.reader.eat('=') {
            let key = self.last_str_value.clone();
            if self.eat_unicode_property_value() {
                let value = self.last_str_value.clone();
                if properties::is_valid_property(self.ecma_version, &key, &value) {
                    return Ok(Some(PropertyResult {
                        key,
                        value: Some(value),
                        strings: false,
                    }));
                }
                return Err(self.err_at(
                    ErrorKind::InvalidUnicodeProperty,
                    start,
                    "invalid property name",
                ));
            }
        }
        self.reader.rewind(start);

        // LoneUnicodePropertyNameOrValue
        if self.eat_unicode_property_name() {
            let name_or_value = self.last_str_value.clone();
            if properties::is_valid_property(self.ecma_version, "General_Category", &name_or_value)
            {
                return Ok(Some(PropertyResult {
                    key: "General_Category".to_owned(),
                    value: Some(name_or_value),
                    strings: false,
                }));
            }
            if properties::is_valid_lone_property(self.ecma_version, &name_or_value) {
                return Ok(Some(PropertyResult {
                    key: name_or_value,
                    value: None,
                    strings: false,
                }));
            }
            if self.unicode_sets_mode
                && properties::is_valid_lone_property_of_strings(
                    self.ecma_version,
                    &name_or_value,
                )
            {
                return Ok(Some(PropertyResult {
                    key: name_or_value,
                    value: None,
                    strings: true,
                }));
            }
            return Err(self.err_at(
                ErrorKind::InvalidUnicodeProperty,
                start,
                "invalid property name",
            ));
        }
        Ok(None)
    }

    fn eat_unicode_property_name(&mut self) -> bool {
        self.last_str_value.clear();
        while let Some(cp) = self.reader.current() {
            if !properties::is_property_name_character(cp) {
                break;
            }
            if let Some(c) = char::from_u32(cp) {
                self.last_str_value.push(c);
            }
            self.reader.advance();
        }
        !self.last_str_value.is_empty()
    }

    fn eat_unicode_property_value(&mut self) -> bool {
        self.last_str_value.clear();
        while let Some(cp) = self.reader.current() {
            if !properties::is_property_value_character(cp) {
                break;
            }
            if let Some(c) = char::from_u32(cp) {
                self.last_str_value.push(c);
            }
            self.reader.advance();
        }
        !self.last_str_value.is_empty()
    }

    // ── Character escapes ───────────────────────────────────────────────────

    fn consume_character_escape(&mut self, escape_start: usize) -> ParseResult<bool> {
        if self.eat_control_escape()
            || self.eat_c_control_letter()
            || self.eat_zero()
            || self.eat_hex_escape_sequence()?
            || self.eat_unicode_escape_value()?
            || (!self.strict && !self.unicode_mode && self.eat_legacy_octal_escape())
            || self.eat_identity_escape()
        {
            self.sink
                .on_character(escape_start, self.reader.index(), self.last_int_value);
            return Ok(true);
        }
        Ok(false)
    }

    fn eat_control_escape(&mut self) -> bool {
        for (c, value) in [('f', 0x0C), ('n', 0x0A), ('r', 0x0D), ('t', 0x09), ('v', 0x0B)] {
            if self.reader.eat(c) {
                self.last_int_value = value;
                return true;
            }
        }
        false
    }

    fn eat_c_control_letter(&mut self) -> bool {
        let start = self.reader.index();
        if self.reader.eat('c') {
            if let Some(cp) = self.reader.current() {
                if char::from_u32(cp).is_some_and(|c| c.is_ascii_alphabetic()) {
                    self.last_int_value = cp % 0x20;
                    self.reader.advance();
                    return true;
                }
            }
            self.reader.rewind(start);
        }
        false
    }

    fn eat_zero(&mut self) -> bool {
        if self.reader.current() == Some('0' as u32)
            && !self.reader.next().is_some_and(is_decimal_digit)
        {
            self.last_int_value = 0;
            self.reader.advance();
            return true;
        }
        false
    }

    fn eat_hex_escape_sequence(&mut self) -> ParseResult<bool> {
        let start = self.reader.index();
        if self.reader.eat('x') {
            if let Some(value) = self.reader.eat_fixed_hex_digits(2) {
                self.last_int_value = value;
                return Ok(true);
            }
            if self.unicode_mode || self.strict {
                return self.raise(ErrorKind::InvalidEscape, "invalid hex escape");
            }
            self.reader.rewind(start);
        }
        Ok(false)
    }

    /// `\uXXXX` / `\u{…}` via the reader, raising in strict/unicode mode
    /// when the sequence is malformed.
    fn eat_unicode_escape_value(&mut self) -> ParseResult<bool> {
        match self.eat_unicode_escape_checked(false)? {
            Some(value) => {
                self.last_int_value = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn eat_unicode_escape_checked(&mut self, force: bool) -> ParseResult<Option<u32>> {
        let extended = force || self.unicode_mode;
        if self.reader.current_is('u') {
            if let Some(value) = self.reader.eat_regexp_unicode_escape(extended) {
                return Ok(Some(value));
            }
            if self.strict || extended {
                return self.raise(ErrorKind::InvalidEscape, "invalid unicode escape");
            }
        }
        Ok(None)
    }

    fn eat_legacy_octal_escape(&mut self) -> bool {
        if let Some(n1) = self.eat_octal_digit() {
            if let Some(n2) = self.eat_octal_digit() {
                if n1 <= 3 {
                    if let Some(n3) = self.eat_octal_digit() {
                        self.last_int_value = n1 * 64 + n2 * 8 + n3;
                        return true;
                    }
                }
                self.last_int_value = n1 * 8 + n2;
                return true;
            }
            self.last_int_value = n1;
            return true;
        }
        false
    }

    fn eat_octal_digit(&mut self) -> Option<u32> {
        match self.reader.current() {
            Some(cp) if is_octal_digit(cp) => {
                self.reader.advance();
                Some(cp - 0x30)
            }
            _ => None,
        }
    }

    fn eat_identity_escape(&mut self) -> bool {
        match self.reader.current() {
            Some(cp) if self.is_valid_identity_escape(cp) => {
                self.last_int_value = cp;
                self.reader.advance();
                true
            }
            _ => false,
        }
    }

    fn is_valid_identity_escape(&self, cp: u32) -> bool {
        if self.unicode_mode {
            return is_syntax_character(cp) || cp == '/' as u32;
        }
        if self.strict {
            return !is_id_continue(cp);
        }
        if self.n_flag {
            return cp != 'c' as u32 && cp != 'k' as u32;
        }
        cp != 'c' as u32
    }

    // ── Character classes ───────────────────────────────────────────────────

    fn consume_character_class(&mut self) -> ParseResult<Option<ClassSetResult>> {
        let start = self.reader.index();
        if !self.reader.eat('[') {
            return Ok(None);
        }
        let negate = self.reader.eat('^');
        self.sink
            .on_character_class_enter(start, negate, self.unicode_sets_mode);
        let result = self.consume_class_contents()?;
        if !self.reader.eat(']') {
            if self.reader.current().is_none() {
                return self.raise(ErrorKind::UnterminatedClass, "unterminated character class");
            }
            return self.raise(
                ErrorKind::InvalidCharacterClass,
                "invalid character in character class",
            );
        }
        if negate && result.may_contain_strings {
            return Err(self.err_at(
                ErrorKind::InvalidCharacterClass,
                start,
                "negated character class may contain strings",
            ));
        }
        self.sink
            .on_character_class_leave(start, self.reader.index(), negate);
        Ok(Some(result))
    }

    fn consume_class_contents(&mut self) -> ParseResult<ClassSetResult> {
        if self.unicode_sets_mode {
            if self.reader.current_is(']') {
                return Ok(ClassSetResult::default());
            }
            return self.consume_class_set_expression();
        }

        // Default / `u` grammar: atoms and `-` ranges.
        let strict_classes = self.strict || self.unicode_mode;
        loop {
            let range_start = self.reader.index();
            if !self.consume_class_atom()? {
                break;
            }
            let min = self.last_atom_value;

            if !self.reader.eat('-') {
                continue;
            }
            self.sink
                .on_character(self.reader.index() - 1, self.reader.index(), '-' as u32);

            if !self.consume_class_atom()? {
                break;
            }
            let max = self.last_atom_value;

            let (min, max) = match (min, max) {
                (Some(min), Some(max)) => (min, max),
                _ => {
                    if strict_classes {
                        return Err(self.err_at(
                            ErrorKind::InvalidCharacterClass,
                            range_start,
                            "invalid character class",
                        ));
                    }
                    continue;
                }
            };
            if min > max {
                return Err(self.err_at(
                    ErrorKind::InvalidCharacterClass,
                    range_start,
                    "range out of order in character class",
                ));
            }
            self.sink
                .on_character_class_range(range_start, self.reader.index(), min, max);
        }
        Ok(ClassSetResult::default())
    }

    fn consume_class_atom(&mut self) -> ParseResult<bool> {
        let start = self.reader.index();
        let cp = match self.reader.current() {
            None => return Ok(false),
            Some(cp) => cp,
        };

        if cp != '\\' as u32 && cp != ']' as u32 {
            self.reader.advance();
            self.last_atom_value = Some(cp);
            self.sink.on_character(start, self.reader.index(), cp);
            return Ok(true);
        }

        if cp == '\\' as u32 {
            self.reader.advance();
            if self.consume_class_escape(start)? {
                return Ok(true);
            }
            if !self.strict && self.reader.current_is('c') {
                self.last_atom_value = Some('\\' as u32);
                self.sink
                    .on_character(start, self.reader.index(), '\\' as u32);
                return Ok(true);
            }
            if self.strict || self.unicode_mode {
                return self.raise(ErrorKind::InvalidEscape, "invalid escape");
            }
            self.reader.rewind(start);
        }
        Ok(false)
    }

    fn consume_class_escape(&mut self, escape_start: usize) -> ParseResult<bool> {
        // `\b` is backspace inside a class.
        if self.reader.eat('b') {
            self.last_atom_value = Some(0x08);
            self.sink
                .on_character(escape_start, self.reader.index(), 0x08);
            return Ok(true);
        }
        // `\-` is admitted in unicode mode.
        if self.unicode_mode && self.reader.eat('-') {
            self.last_atom_value = Some('-' as u32);
            self.sink
                .on_character(escape_start, self.reader.index(), '-' as u32);
            return Ok(true);
        }
        // Annex B: `\c` followed by a digit or `_` is a control escape.
        if !self.strict && !self.unicode_mode && self.reader.current_is('c') {
            if let Some(next) = self.reader.next() {
                if is_decimal_digit(next) || next == '_' as u32 {
                    self.reader.advance();
                    self.reader.advance();
                    self.last_int_value = next % 0x20;
                    self.last_atom_value = Some(self.last_int_value);
                    self.sink
                        .on_character(escape_start, self.reader.index(), self.last_int_value);
                    return Ok(true);
                }
            }
        }
        if self.consume_character_class_escape(escape_start)?.is_some() {
            self.last_atom_value = None;
            return Ok(true);
        }
        if self.consume_character_escape(escape_start)? {
            self.last_atom_value = Some(self.last_int_value);
            return Ok(true);
        }
        Ok(false)
    }

    // ── `v`-mode class-set grammar ──────────────────────────────────────────

    fn consume_class_set_expression(&mut self) -> ParseResult<ClassSetResult> {
        let start = self.reader.index();
        let mut may_contain_strings = false;

        if let Some(min) = self.consume_class_set_character()? {
            if self.consume_class_set_range_from_operator(start, min)? {
                return self.consume_class_union_right(false);
            }
        } else if let Some(result) = self.consume_class_set_operand()? {
            may_contain_strings = result.may_contain_strings;
        } else {
            let cp = self.reader.current();
            if cp == Some('\\' as u32) {
                self.reader.advance();
                return self.raise(ErrorKind::InvalidEscape, "invalid escape");
            }
            if cp.is_some()
                && cp == self.reader.next()
                && cp.is_some_and(is_class_set_reserved_double_punctuator)
            {
                return self.raise(
                    ErrorKind::InvalidCharacterClass,
                    "invalid set operation in character class",
                );
            }
            return self.raise(
                ErrorKind::InvalidCharacterClass,
                "invalid character in character class",
            );
        }

        if self.reader.eat2('&', '&') {
            // Intersection chain; `--` may no longer appear.
            loop {
                if self.reader.current_is('&') {
                    break;
                }
                let Some(result) = self.consume_class_set_operand()? else {
                    break;
                };
                self.sink.on_class_intersection(start, self.reader.index());
                if !result.may_contain_strings {
                    may_contain_strings = false;
                }
                if self.reader.eat2('&', '&') {
                    continue;
                }
                return Ok(ClassSetResult {
                    may_contain_strings,
                });
            }
            return self.raise(
                ErrorKind::InvalidCharacterClass,
                "invalid character in character class",
            );
        }

        if self.reader.eat2('-', '-') {
            // Subtraction chain; strings survive only from the left side.
            loop {
                let Some(_) = self.consume_class_set_operand()? else {
                    break;
                };
                self.sink.on_class_subtraction(start, self.reader.index());
                if self.reader.eat2('-', '-') {
                    continue;
                }
                return Ok(ClassSetResult {
                    may_contain_strings,
                });
            }
            return self.raise(
                ErrorKind::InvalidCharacterClass,
                "invalid character in character class",
            );
        }

        self.consume_class_union_right(may_contain_strings)
    }

    fn consume_class_union_right(&mut self, initial: bool) -> ParseResult<ClassSetResult> {
        let mut may_contain_strings = initial;
        loop {
            let start = self.reader.index();
            if let Some(min) = self.consume_class_set_character()? {
                self.consume_class_set_range_from_operator(start, min)?;
                continue;
            }
            if let Some(result) = self.consume_class_set_operand()? {
                if result.may_contain_strings {
                    may_contain_strings = true;
                }
                continue;
            }
            break;
        }
        Ok(ClassSetResult {
            may_contain_strings,
        })
    }

    /// After a class-set character, a `-` may begin a range. No hyphen
    /// character event is emitted in `v` mode.
    fn consume_class_set_range_from_operator(
        &mut self,
        start: usize,
        min: u32,
    ) -> ParseResult<bool> {
        let before_hyphen = self.reader.index();
        if self.reader.eat('-') {
            if let Some(max) = self.consume_class_set_character()? {
                if min > max {
                    return Err(self.err_at(
                        ErrorKind::InvalidCharacterClass,
                        start,
                        "range out of order in character class",
                    ));
                }
                self.sink
                    .on_character_class_range(start, self.reader.index(), min, max);
                return Ok(true);
            }
            self.reader.rewind(before_hyphen);
        }
        Ok(false)
    }

    fn consume_class_set_operand(&mut self) -> ParseResult<Option<ClassSetResult>> {
        if let Some(result) = self.consume_nested_class()? {
            return Ok(Some(result));
        }
        if let Some(result) = self.consume_class_string_disjunction()? {
            return Ok(Some(result));
        }
        if self.consume_class_set_character()?.is_some() {
            return Ok(Some(ClassSetResult::default()));
        }
        Ok(None)
    }

    fn consume_nested_class(&mut self) -> ParseResult<Option<ClassSetResult>> {
        let start = self.reader.index();
        if self.reader.eat('[') {
            let negate = self.reader.eat('^');
            self.sink.on_character_class_enter(start, negate, true);
            let result = self.consume_class_contents()?;
            if !self.reader.eat(']') {
                return self.raise(ErrorKind::UnterminatedClass, "unterminated character class");
            }
            if negate && result.may_contain_strings {
                return Err(self.err_at(
                    ErrorKind::InvalidCharacterClass,
                    start,
                    "negated character class may contain strings",
                ));
            }
            self.sink
                .on_character_class_leave(start, self.reader.index(), negate);
            return Ok(Some(result));
        }
        if self.reader.eat('\\') {
            if let Some(result) = self.consume_character_class_escape(start)? {
                return Ok(Some(result));
            }
            self.reader.rewind(start);
        }
        Ok(None)
    }

    fn consume_class_string_disjunction(&mut self) -> ParseResult<Option<ClassSetResult>> {
        let start = self.reader.index();
        if self.reader.eat3('\\', 'q', '{') {
            self.sink.on_class_string_disjunction_enter(start);
            let mut i = 0;
            let mut may_contain_strings = false;
            loop {
                if self.consume_class_string(i)?.may_contain_strings {
                    may_contain_strings = true;
                }
                i += 1;
                if !self.reader.eat('|') {
                    break;
                }
            }
            if self.reader.eat('}') {
                self.sink
                    .on_class_string_disjunction_leave(start, self.reader.index());
                return Ok(Some(ClassSetResult {
                    may_contain_strings,
                }));
            }
            return self.raise(
                ErrorKind::UnterminatedClass,
                "unterminated class string disjunction",
            );
        }
        Ok(None)
    }

    fn consume_class_string(&mut self, index: usize) -> ParseResult<ClassSetResult> {
        let start = self.reader.index();
        let mut count = 0usize;
        self.sink.on_string_alternative_enter(start, index);
        while self.reader.current().is_some() {
            if self.consume_class_set_character()?.is_none() {
                break;
            }
            count += 1;
        }
        self.sink
            .on_string_alternative_leave(start, self.reader.index(), index);
        // A one-character branch is an ordinary character; anything else
        // (empty included) makes the disjunction string-matching.
        Ok(ClassSetResult {
            may_contain_strings: count != 1,
        })
    }

    fn consume_class_set_character(&mut self) -> ParseResult<Option<u32>> {
        let start = self.reader.index();
        let cp = self.reader.current();

        let doubled =
            cp.is_some() && cp == self.reader.next() && cp.is_some_and(is_class_set_reserved_double_punctuator);
        if !doubled {
            if let Some(cp) = cp {
                if !is_class_set_syntax_character(cp) {
                    self.reader.advance();
                    self.sink.on_character(start, self.reader.index(), cp);
                    return Ok(Some(cp));
                }
            }
        }

        if self.reader.eat('\\') {
            if self.consume_character_escape(start)? {
                return Ok(Some(self.last_int_value));
            }
            if let Some(cp) = self.reader.current() {
                if is_class_set_reserved_punctuator(cp) {
                    self.reader.advance();
                    self.sink.on_character(start, self.reader.index(), cp);
                    return Ok(Some(cp));
                }
            }
            if self.reader.eat('b') {
                self.sink.on_character(start, self.reader.index(), 0x08);
                return Ok(Some(0x08));
            }
            self.reader.rewind(start);
        }
        Ok(None)
    }
}
