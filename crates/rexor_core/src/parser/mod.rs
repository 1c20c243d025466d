//! ECMAScript RegExp parsing infrastructure.
//!
//! - [`reader`] — UTF-16 code-unit cursor over the source text.
//! - [`validator`] — recursive-descent grammar walker (editions
//!   2015–2025), emitting builder events.
//! - [`events`] — the builder-event vocabulary ([`events::EventSink`]).
//! - [`assembler`] — event sink that materializes the AST arena.
//! - [`ast`] — AST node definitions and the [`ast::Ast`] arena.
//! - [`scope`] — capture-group name scoping (flat and branch-scoped).
//! - [`prescan`] — capture count / group-name pre-pass.
//! - [`cache`] — the parse-cache collaborator contract.
//!
//! [`RegExpParser`] at this level ties the pieces together: `parse_*`
//! builds a tree, `validate_*` only checks syntax (no allocation beyond
//! the walk itself).

/// AST node definitions and the node arena.
pub mod ast;
/// Event-driven AST construction.
pub mod assembler;
/// Parse-cache collaborator contract.
pub mod cache;
/// Builder-event vocabulary.
pub mod events;
/// Capture count / group-name pre-pass.
pub mod prescan;
/// UTF-16 code-unit reader.
pub mod reader;
/// Capture-group name scoping.
pub mod scope;
/// Recursive-descent validator.
pub mod validator;

use crate::error::ParseResult;
use ast::{Ast, RegExpFlags};
use assembler::AstAssembler;
use validator::RegExpValidator;

// ─────────────────────────────────────────────────────────────────────────────
// EcmaVersion / ParserOptions
// ─────────────────────────────────────────────────────────────────────────────

/// An ECMAScript yearly edition. Editions gate RegExp features: `\u{…}`
/// arrived with 2015, lookbehind and named groups with 2018, the `d` flag
/// with 2022, the `v` flag with 2024, duplicate group names across
/// branches and inline modifiers with 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EcmaVersion {
    /// ES2015 (ES6).
    Es2015,
    /// ES2016.
    Es2016,
    /// ES2017.
    Es2017,
    /// ES2018.
    Es2018,
    /// ES2019.
    Es2019,
    /// ES2020.
    Es2020,
    /// ES2021.
    Es2021,
    /// ES2022.
    Es2022,
    /// ES2023.
    Es2023,
    /// ES2024.
    Es2024,
    /// ES2025.
    Es2025,
}

impl EcmaVersion {
    /// The newest supported edition.
    pub const LATEST: EcmaVersion = EcmaVersion::Es2025;
}

/// Construction-time parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Disables the Annex B (web-legacy) syntax relaxations even when
    /// neither `u` nor `v` is set.
    pub strict: bool,
    /// The grammar edition to validate against.
    pub ecma_version: EcmaVersion,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strict: false,
            ecma_version: EcmaVersion::LATEST,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RegExpParser
// ─────────────────────────────────────────────────────────────────────────────

/// Parses and validates ECMAScript regular expressions.
///
/// All offsets taken and produced by this type are UTF-16 code-unit
/// indices into the given source string.
///
/// # Example
///
/// ```
/// use rexor_core::parser::{ParserOptions, RegExpParser};
///
/// let parser = RegExpParser::new(ParserOptions::default());
/// let ast = parser.parse_literal("/a(b|c)d/gi").unwrap();
/// assert_eq!(ast.raw(ast.root()), "/a(b|c)d/gi");
/// ```
#[derive(Debug, Default)]
pub struct RegExpParser {
    options: ParserOptions,
}

/// Number of UTF-16 code units in `source`.
fn utf16_len(source: &str) -> usize {
    source.encode_utf16().count()
}

impl RegExpParser {
    /// Creates a parser with the given options.
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    // ── Parsing (tree-building) entry points ────────────────────────────────

    /// Parses a whole literal (`/pattern/flags`) into a tree rooted at a
    /// `RegExpLiteral` node.
    pub fn parse_literal(&self, source: &str) -> ParseResult<Ast> {
        self.parse_literal_at(source, 0, utf16_len(source))
    }

    /// Parses the literal at `source[start..end)` (code-unit offsets).
    pub fn parse_literal_at(&self, source: &str, start: usize, end: usize) -> ParseResult<Ast> {
        let mut asm = AstAssembler::new(source);
        RegExpValidator::new(&self.options, &mut asm).validate_literal_at(source, start, end)?;
        asm.finalize_literal(start, end);
        asm.finish()
    }

    /// Parses a bare pattern into a tree rooted at a `Pattern` node.
    pub fn parse_pattern(
        &self,
        source: &str,
        unicode: bool,
        unicode_sets: bool,
    ) -> ParseResult<Ast> {
        self.parse_pattern_at(source, 0, utf16_len(source), unicode, unicode_sets)
    }

    /// Parses the bare pattern at `source[start..end)`.
    pub fn parse_pattern_at(
        &self,
        source: &str,
        start: usize,
        end: usize,
        unicode: bool,
        unicode_sets: bool,
    ) -> ParseResult<Ast> {
        let mut asm = AstAssembler::new(source);
        RegExpValidator::new(&self.options, &mut asm)
            .validate_pattern_at(source, start, end, unicode, unicode_sets)?;
        asm.finish()
    }

    /// Parses a flags string into its flag set.
    pub fn parse_flags(&self, source: &str) -> ParseResult<RegExpFlags> {
        self.parse_flags_at(source, 0, utf16_len(source))
    }

    /// Parses the flags at `source[start..end)`.
    pub fn parse_flags_at(&self, source: &str, start: usize, end: usize) -> ParseResult<RegExpFlags> {
        let mut sink = ();
        RegExpValidator::new(&self.options, &mut sink).validate_flags_at(source, start, end)
    }

    // ── Validation-only entry points ────────────────────────────────────────

    /// Checks a literal without building a tree.
    pub fn validate_literal(&self, source: &str) -> ParseResult<()> {
        let mut sink = ();
        RegExpValidator::new(&self.options, &mut sink).validate_literal_at(
            source,
            0,
            utf16_len(source),
        )
    }

    /// Checks a bare pattern without building a tree.
    pub fn validate_pattern(
        &self,
        source: &str,
        unicode: bool,
        unicode_sets: bool,
    ) -> ParseResult<()> {
        let mut sink = ();
        RegExpValidator::new(&self.options, &mut sink).validate_pattern_at(
            source,
            0,
            utf16_len(source),
            unicode,
            unicode_sets,
        )
    }

    /// Checks a flags string.
    pub fn validate_flags(&self, source: &str) -> ParseResult<()> {
        self.parse_flags(source).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::ast::{BackrefKey, EscapeSetKind, LookaroundKind, NodeId, NodeKind};
    use super::*;
    use crate::error::ErrorKind;

    fn parser() -> RegExpParser {
        RegExpParser::new(ParserOptions::default())
    }

    fn parser_for(version: EcmaVersion) -> RegExpParser {
        RegExpParser::new(ParserOptions {
            strict: false,
            ecma_version: version,
        })
    }

    fn strict_parser() -> RegExpParser {
        RegExpParser::new(ParserOptions {
            strict: true,
            ecma_version: EcmaVersion::LATEST,
        })
    }

    /// The single alternative under a literal's pattern.
    fn literal_alternative(ast: &Ast) -> NodeId {
        let NodeKind::RegExpLiteral { pattern, .. } = &ast.node(ast.root()).kind else {
            panic!("root is not a literal");
        };
        let alts = ast.children(*pattern);
        assert_eq!(alts.len(), 1, "expected a single alternative");
        alts[0]
    }

    // ── Basic shapes ────────────────────────────────────────────────────────

    #[test]
    fn test_literal_with_group_and_alternation() {
        let ast = parser().parse_literal("/a(b|c)d/").unwrap();
        let alt = literal_alternative(&ast);
        let elements = ast.children(alt);
        assert_eq!(elements.len(), 3);

        assert!(matches!(
            &ast.node(elements[0]).kind,
            NodeKind::Character { value } if *value == 'a' as u32
        ));
        assert!(matches!(
            &ast.node(elements[2]).kind,
            NodeKind::Character { value } if *value == 'd' as u32
        ));

        let group = elements[1];
        assert!(matches!(
            &ast.node(group).kind,
            NodeKind::CapturingGroup { name: None, .. }
        ));
        assert_eq!(ast.raw(group), "(b|c)");
        let branches = ast.children(group);
        assert_eq!(branches.len(), 2);
        assert_eq!(ast.raw(branches[0]), "b");
        assert_eq!(ast.raw(branches[1]), "c");

        assert_eq!(ast.capturing_groups().len(), 1);
    }

    #[test]
    fn test_empty_pattern_has_one_empty_alternative() {
        let ast = parser().parse_pattern("", false, false).unwrap();
        let alts = ast.children(ast.root());
        assert_eq!(alts.len(), 1);
        assert!(ast.children(alts[0]).is_empty());
    }

    #[test]
    fn test_flags_record() {
        let flags = parser().parse_flags("gimsy").unwrap();
        assert!(flags.contains(RegExpFlags::GLOBAL));
        assert!(flags.contains(RegExpFlags::IGNORE_CASE));
        assert!(flags.contains(RegExpFlags::MULTILINE));
        assert!(flags.contains(RegExpFlags::DOT_ALL));
        assert!(flags.contains(RegExpFlags::STICKY));
        assert!(!flags.contains(RegExpFlags::UNICODE));
    }

    #[test]
    fn test_duplicate_and_unknown_flags_are_rejected() {
        let err = parser().parse_flags("gg").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFlags);
        assert_eq!(err.offset, 1);

        let err = parser().parse_flags("gz").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFlags);

        let err = parser().parse_flags("uv").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFlags);
    }

    #[test]
    fn test_flag_edition_gating() {
        assert!(parser_for(EcmaVersion::Es2017).parse_flags("s").is_err());
        assert!(parser_for(EcmaVersion::Es2018).parse_flags("s").is_ok());
        assert!(parser_for(EcmaVersion::Es2021).parse_flags("d").is_err());
        assert!(parser_for(EcmaVersion::Es2022).parse_flags("d").is_ok());
        assert!(parser_for(EcmaVersion::Es2023).parse_flags("v").is_err());
        assert!(parser_for(EcmaVersion::Es2024).parse_flags("v").is_ok());
    }

    // ── Duplicate capture names (ES2025 branch scoping) ─────────────────────

    #[test]
    fn test_duplicate_names_across_branches_es2025() {
        let ast = parser().parse_literal("/(?<n>x)|(?<n>y)/").unwrap();
        let groups = ast.capturing_groups();
        assert_eq!(groups.len(), 2);
        for g in groups {
            assert!(matches!(
                &ast.node(g).kind,
                NodeKind::CapturingGroup { name: Some(n), .. } if n == "n"
            ));
        }
    }

    #[test]
    fn test_duplicate_names_rejected_before_es2025() {
        let err = parser_for(EcmaVersion::Es2024)
            .parse_literal("/(?<n>x)|(?<n>y)/")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidNamedCapture);
        assert_eq!(err.offset, 11);
    }

    #[test]
    fn test_duplicate_names_in_same_branch_rejected_everywhere() {
        let err = parser().parse_literal("/(?<n>x)(?<n>y)/").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidNamedCapture);
    }

    // ── Quantifiers ─────────────────────────────────────────────────────────

    #[test]
    fn test_reversed_braced_quantifier() {
        let err = parser().parse_literal("/a{3,2}/u").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQuantifier);
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn test_quantifier_shapes() {
        let ast = parser().parse_pattern("a+?b{2,}c{3}", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        let elements = ast.children(alt);
        assert_eq!(elements.len(), 3);
        assert!(matches!(
            &ast.node(elements[0]).kind,
            NodeKind::Quantifier { min: 1, max: None, greedy: false, .. }
        ));
        assert!(matches!(
            &ast.node(elements[1]).kind,
            NodeKind::Quantifier { min: 2, max: None, greedy: true, .. }
        ));
        assert!(matches!(
            &ast.node(elements[2]).kind,
            NodeKind::Quantifier { min: 3, max: Some(3), .. }
        ));
    }

    #[test]
    fn test_nothing_to_repeat() {
        let err = parser().parse_pattern("*a", false, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQuantifier);
        let err = parser().parse_pattern("a**", false, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQuantifier);
    }

    #[test]
    fn test_annex_b_braces_are_literal_but_strict_rejects() {
        let ast = parser().parse_pattern("a{", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        assert_eq!(ast.children(alt).len(), 2);

        let err = strict_parser().parse_pattern("a{", false, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQuantifier);
    }

    #[test]
    fn test_quantified_lookahead_is_annex_b_only() {
        assert!(parser().parse_pattern("(?=a)*", false, false).is_ok());
        assert!(strict_parser().parse_pattern("(?=a)*", false, false).is_err());
        assert!(parser().parse_pattern("(?=a)*", true, false).is_err());
        // Lookbehind is never quantifiable.
        assert!(parser().parse_pattern("(?<=a)*", false, false).is_err());
    }

    // ── `v`-mode set notation ───────────────────────────────────────────────

    #[test]
    fn test_intersection_restructures_to_expression_class() {
        let ast = parser().parse_literal("/[[a-z]&&[^aeiou]]/v").unwrap();
        let alt = literal_alternative(&ast);
        let elements = ast.children(alt);
        assert_eq!(elements.len(), 1);

        let class = elements[0];
        let &NodeKind::ExpressionCharacterClass { negate, expression } = &ast.node(class).kind
        else {
            panic!("expected an expression character class, got {}", ast.node(class).kind.name());
        };
        assert!(!negate);
        assert_eq!(ast.raw(class), "[[a-z]&&[^aeiou]]");

        let &NodeKind::ClassIntersection { left, right } = &ast.node(expression).kind else {
            panic!("expected an intersection");
        };
        assert!(matches!(
            &ast.node(left).kind,
            NodeKind::CharacterClass { negate: false, unicode_sets: true, .. }
        ));
        assert_eq!(ast.raw(left), "[a-z]");
        assert!(matches!(
            &ast.node(right).kind,
            NodeKind::CharacterClass { negate: true, .. }
        ));
        assert_eq!(ast.raw(right), "[^aeiou]");

        // Parent links survive the restructure.
        assert_eq!(ast.node(expression).parent, Some(class));
        assert_eq!(ast.node(left).parent, Some(expression));
        assert_eq!(ast.node(right).parent, Some(expression));
    }

    #[test]
    fn test_subtraction_chain() {
        let ast = parser().parse_pattern("[[a-z]--[aeiou]--[xyz]]", false, true).unwrap();
        let alt = ast.children(ast.root())[0];
        let class = ast.children(alt)[0];
        let &NodeKind::ExpressionCharacterClass { expression, .. } = &ast.node(class).kind else {
            panic!("expected an expression character class");
        };
        // Left-associative: ((a-z -- aeiou) -- xyz).
        let &NodeKind::ClassSubtraction { left, right } = &ast.node(expression).kind else {
            panic!("expected a subtraction");
        };
        assert!(matches!(
            &ast.node(left).kind,
            NodeKind::ClassSubtraction { .. }
        ));
        assert_eq!(ast.raw(right), "[xyz]");
    }

    #[test]
    fn test_mixed_set_operators_rejected() {
        let err = parser().parse_literal("/[a-z--[aeiou]&&[a-m]]/v").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacterClass);
    }

    #[test]
    fn test_bare_range_is_not_a_set_operation_operand() {
        // A `-` range may appear only in a class union; `&&`/`--` operands
        // must be a character, a nested class, or a `\q{…}`. The unwrapped
        // form therefore errors where the nested form above succeeds.
        let err = parser().parse_literal("/[a-z&&[^aeiou]]/v").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacterClass);
    }

    #[test]
    fn test_class_string_disjunction() {
        let ast = parser().parse_pattern("[\\q{abc|d|}]", false, true).unwrap();
        let alt = ast.children(ast.root())[0];
        let class = ast.children(alt)[0];
        let disjunction = ast.children(class)[0];
        assert!(matches!(
            &ast.node(disjunction).kind,
            NodeKind::ClassStringDisjunction { .. }
        ));
        let strings = ast.children(disjunction);
        assert_eq!(strings.len(), 3);
        assert_eq!(ast.children(strings[0]).len(), 3);
        assert_eq!(ast.children(strings[1]).len(), 1);
        // The empty branch is legal.
        assert_eq!(ast.children(strings[2]).len(), 0);
    }

    #[test]
    fn test_negated_class_with_strings_rejected() {
        let err = parser().parse_pattern("[^\\q{ab}]", false, true).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacterClass);
    }

    #[test]
    fn test_property_of_strings() {
        let ast = parser().parse_pattern("[\\p{RGI_Emoji}]", false, true).unwrap();
        let alt = ast.children(ast.root())[0];
        let class = ast.children(alt)[0];
        let set = ast.children(class)[0];
        assert!(matches!(
            &ast.node(set).kind,
            NodeKind::UnicodePropertyCharacterSet { key, strings: true, negate: false, .. }
                if key == "RGI_Emoji"
        ));

        let err = parser().parse_pattern("[\\P{RGI_Emoji}]", false, true).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidUnicodeProperty);
    }

    #[test]
    fn test_v_mode_requires_escaped_punctuation() {
        assert!(parser().parse_pattern("[a|b]", false, true).is_err());
        assert!(parser().parse_pattern("[a\\|b]", false, true).is_ok());
        // A doubled reserved punctuator is reserved syntax.
        let err = parser().parse_pattern("[a@@b]", false, true).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacterClass);
    }

    // ── Backreferences ──────────────────────────────────────────────────────

    #[test]
    fn test_forward_backreference_resolves() {
        let ast = parser().parse_literal("/\\1(a)/").unwrap();
        let refs = ast.backreferences();
        assert_eq!(refs.len(), 1);
        let groups = ast.capturing_groups();
        assert_eq!(groups.len(), 1);

        let NodeKind::Backreference {
            key,
            resolved,
            ambiguous,
        } = &ast.node(refs[0]).kind
        else {
            panic!("expected a backreference");
        };
        assert_eq!(*key, BackrefKey::Index(1));
        assert!(!*ambiguous);
        assert_eq!(resolved.as_slice(), &[groups[0]]);

        let NodeKind::CapturingGroup { references, .. } = &ast.node(groups[0]).kind else {
            panic!("expected a capturing group");
        };
        assert_eq!(references.as_slice(), &[refs[0]]);
    }

    #[test]
    fn test_ambiguous_named_backreference() {
        let ast = parser().parse_literal("/\\k<n>(?<n>a)|(?<n>b)/").unwrap();
        let refs = ast.backreferences();
        assert_eq!(refs.len(), 1);
        let NodeKind::Backreference {
            resolved,
            ambiguous,
            ..
        } = &ast.node(refs[0]).kind
        else {
            panic!("expected a backreference");
        };
        assert!(*ambiguous);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_out_of_range_backreference() {
        // Annex B: \2 with one group is an octal escape, not an error.
        let ast = parser().parse_pattern("\\2(a)", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        assert!(matches!(
            &ast.node(ast.children(alt)[0]).kind,
            NodeKind::Character { value: 2 }
        ));

        // Unicode mode rejects it.
        let err = parser().parse_pattern("\\2(a)", true, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidBackreference);
    }

    #[test]
    fn test_unknown_named_backreference() {
        let err = parser().parse_pattern("\\k<x>(?<y>a)", false, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidBackreference);
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_k_escape_without_names_is_annex_b_identity() {
        let ast = parser().parse_pattern("\\k<x>", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        // `\k`, `<`, `x`, `>` — four plain characters.
        assert_eq!(ast.children(alt).len(), 4);
    }

    // ── Assertions / lookaround ─────────────────────────────────────────────

    #[test]
    fn test_lookaround_variants() {
        let ast = parser()
            .parse_pattern("(?=a)(?!b)(?<=c)(?<!d)", false, false)
            .unwrap();
        let alt = ast.children(ast.root())[0];
        let elements = ast.children(alt);
        assert_eq!(elements.len(), 4);
        let expect = [
            (LookaroundKind::Lookahead, false),
            (LookaroundKind::Lookahead, true),
            (LookaroundKind::Lookbehind, false),
            (LookaroundKind::Lookbehind, true),
        ];
        for (id, (kind, negate)) in elements.iter().zip(expect) {
            assert!(matches!(
                &ast.node(*id).kind,
                NodeKind::LookaroundAssertion { kind: k, negate: n, .. }
                    if *k == kind && *n == negate
            ));
        }
    }

    #[test]
    fn test_lookbehind_is_edition_gated() {
        let err = parser_for(EcmaVersion::Es2017)
            .parse_pattern("(?<=a)b", false, false)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidGrammar);
        assert!(parser_for(EcmaVersion::Es2018)
            .parse_pattern("(?<=a)b", false, false)
            .is_ok());
    }

    // ── Inline modifiers (ES2025) ───────────────────────────────────────────

    #[test]
    fn test_inline_modifiers() {
        let ast = parser().parse_literal("/(?i-m:x)/").unwrap();
        let alt = literal_alternative(&ast);
        let group = ast.children(alt)[0];
        let &NodeKind::Group {
            modifiers: Some(modifiers),
            ..
        } = &ast.node(group).kind
        else {
            panic!("expected a group with modifiers");
        };
        let &NodeKind::Modifiers { add, remove } = &ast.node(modifiers).kind else {
            panic!("expected a modifiers node");
        };
        assert_eq!(add, ast::ModifierFlags::IGNORE_CASE);
        assert_eq!(remove, Some(ast::ModifierFlags::MULTILINE));
        assert_eq!(ast.raw(modifiers), "i-m");
    }

    #[test]
    fn test_modifier_errors() {
        assert_eq!(
            parser().parse_literal("/(?i-i:x)/").unwrap_err().kind,
            ErrorKind::InvalidFlags
        );
        assert_eq!(
            parser().parse_literal("/(?ii:x)/").unwrap_err().kind,
            ErrorKind::InvalidFlags
        );
        assert_eq!(
            parser().parse_literal("/(?-:x)/").unwrap_err().kind,
            ErrorKind::InvalidFlags
        );
        // Edition-gated.
        assert_eq!(
            parser_for(EcmaVersion::Es2024)
                .parse_literal("/(?i:x)/")
                .unwrap_err()
                .kind,
            ErrorKind::InvalidGrammar
        );
    }

    // ── Escapes ─────────────────────────────────────────────────────────────

    #[test]
    fn test_escape_character_sets() {
        let ast = parser().parse_pattern("\\d\\S\\w", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        let elements = ast.children(alt);
        assert!(matches!(
            &ast.node(elements[0]).kind,
            NodeKind::EscapeCharacterSet { kind: EscapeSetKind::Digit, negate: false }
        ));
        assert!(matches!(
            &ast.node(elements[1]).kind,
            NodeKind::EscapeCharacterSet { kind: EscapeSetKind::Space, negate: true }
        ));
        assert!(matches!(
            &ast.node(elements[2]).kind,
            NodeKind::EscapeCharacterSet { kind: EscapeSetKind::Word, negate: false }
        ));
    }

    #[test]
    fn test_octal_escapes_are_annex_b_only() {
        let ast = parser().parse_pattern("\\07", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        assert!(matches!(
            &ast.node(ast.children(alt)[0]).kind,
            NodeKind::Character { value: 7 }
        ));

        let err = parser().parse_pattern("\\07", true, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidEscape);
    }

    #[test]
    fn test_unicode_property_escape() {
        let ast = parser().parse_pattern("\\p{Script=Greek}", true, false).unwrap();
        let alt = ast.children(ast.root())[0];
        assert!(matches!(
            &ast.node(ast.children(alt)[0]).kind,
            NodeKind::UnicodePropertyCharacterSet { key, value: Some(v), negate: false, strings: false }
                if key == "Script" && v == "Greek"
        ));

        // A bare General_Category value gets the canonical key.
        let ast = parser().parse_pattern("\\p{Letter}", true, false).unwrap();
        let alt = ast.children(ast.root())[0];
        assert!(matches!(
            &ast.node(ast.children(alt)[0]).kind,
            NodeKind::UnicodePropertyCharacterSet { key, value: Some(v), .. }
                if key == "General_Category" && v == "Letter"
        ));

        let err = parser().parse_pattern("\\p{NotAThing}", true, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidUnicodeProperty);
    }

    #[test]
    fn test_code_point_escape_requires_unicode_mode() {
        let ast = parser().parse_pattern("\\u{1F600}", true, false).unwrap();
        let alt = ast.children(ast.root())[0];
        assert!(matches!(
            &ast.node(ast.children(alt)[0]).kind,
            NodeKind::Character { value: 0x1F600 }
        ));

        // Outside unicode mode, `\u{1F600}` is `u` repeated — the brace is
        // an Annex B quantifier on the `u` character.
        let ast = parser().parse_pattern("\\u{2}", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        let elements = ast.children(alt);
        assert_eq!(elements.len(), 1);
        assert!(matches!(
            &ast.node(elements[0]).kind,
            NodeKind::Quantifier { min: 2, max: Some(2), .. }
        ));
    }

    // ── Surrogate handling ──────────────────────────────────────────────────

    #[test]
    fn test_astral_literal_is_two_units_without_unicode() {
        let ast = parser().parse_pattern("😀+", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        let elements = ast.children(alt);
        assert_eq!(elements.len(), 2);
        assert!(matches!(
            &ast.node(elements[0]).kind,
            NodeKind::Character { value: 0xD83D }
        ));
        // The quantifier binds only the trail surrogate.
        let &NodeKind::Quantifier { element, .. } = &ast.node(elements[1]).kind else {
            panic!("expected a quantifier");
        };
        assert!(matches!(
            &ast.node(element).kind,
            NodeKind::Character { value: 0xDE00 }
        ));
    }

    #[test]
    fn test_astral_literal_is_one_code_point_with_unicode() {
        let ast = parser().parse_pattern("😀+", true, false).unwrap();
        let alt = ast.children(ast.root())[0];
        let elements = ast.children(alt);
        assert_eq!(elements.len(), 1);
        let &NodeKind::Quantifier { element, .. } = &ast.node(elements[0]).kind else {
            panic!("expected a quantifier");
        };
        assert!(matches!(
            &ast.node(element).kind,
            NodeKind::Character { value: 0x1F600 }
        ));
    }

    #[test]
    fn test_astral_range_is_reversed_without_unicode() {
        // Without `u`, the class reads unit-by-unit: \uD83D, then the
        // range \uDE00-\uD83D, which is reversed.
        let err = parser().parse_pattern("[😀-😁]", false, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacterClass);
        assert!(parser().parse_pattern("[😀-😁]", true, false).is_ok());
    }

    // ── Classes (default / `u` grammar) ─────────────────────────────────────

    #[test]
    fn test_class_range_collapses_endpoints() {
        let ast = parser().parse_pattern("[a-fz]", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        let class = ast.children(alt)[0];
        let elements = ast.children(class);
        assert_eq!(elements.len(), 2);
        let &NodeKind::CharacterClassRange { min, max } = &ast.node(elements[0]).kind else {
            panic!("expected a range");
        };
        assert!(matches!(&ast.node(min).kind, NodeKind::Character { value } if *value == 'a' as u32));
        assert!(matches!(&ast.node(max).kind, NodeKind::Character { value } if *value == 'f' as u32));
        assert_eq!(ast.raw(elements[0]), "a-f");
        assert!(matches!(&ast.node(elements[1]).kind, NodeKind::Character { .. }));
    }

    #[test]
    fn test_reversed_class_range() {
        let err = parser().parse_pattern("[z-a]", false, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacterClass);
    }

    #[test]
    fn test_class_escape_range_endpoint_is_annex_b_only() {
        // `[\d-x]` keeps the hyphen literal in sloppy mode.
        let ast = parser().parse_pattern("[\\d-x]", false, false).unwrap();
        let alt = ast.children(ast.root())[0];
        let class = ast.children(alt)[0];
        assert_eq!(ast.children(class).len(), 3);

        let err = parser().parse_pattern("[\\d-x]", true, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacterClass);
    }

    #[test]
    fn test_unterminated_class_and_group() {
        assert_eq!(
            parser().parse_pattern("[ab", false, false).unwrap_err().kind,
            ErrorKind::UnterminatedClass
        );
        assert_eq!(
            parser().parse_pattern("(ab", false, false).unwrap_err().kind,
            ErrorKind::UnterminatedGroup
        );
        assert_eq!(
            parser().parse_pattern("a)", false, false).unwrap_err().kind,
            ErrorKind::InvalidGrammar
        );
    }

    // ── Literals ────────────────────────────────────────────────────────────

    #[test]
    fn test_unterminated_literal() {
        assert!(parser().parse_literal("/abc").is_err());
        assert!(parser().parse_literal("").is_err());
        assert!(parser().parse_literal("//").is_err());
    }

    #[test]
    fn test_literal_offsets_are_absolute() {
        let ast = parser().parse_literal("/ab/g").unwrap();
        let root = ast.node(ast.root());
        assert_eq!((root.start, root.end), (0, 5));
        let &NodeKind::RegExpLiteral { pattern, flags } = &root.kind else {
            panic!("expected a literal root");
        };
        assert_eq!(ast.raw(pattern), "ab");
        assert_eq!(ast.raw(flags), "g");
        assert_eq!(ast.node(pattern).parent, Some(ast.root()));
        assert_eq!(ast.node(flags).parent, Some(ast.root()));
    }

    // ── Quantified invariants over a sample corpus ──────────────────────────

    const CORPUS: &[(&str, bool, bool)] = &[
        ("a(b|c)d", false, false),
        ("(?<year>\\d{4})-(?<month>\\d{2})", false, false),
        ("\\1(a)", false, false),
        ("^foo$|\\bbar\\B", false, false),
        ("[a-z0-9_-]+", false, false),
        ("(?=x)(?!y)(?<=z)(?<!w)", false, false),
        ("\\p{Script=Greek}+\\u{1F600}", true, false),
        ("[[a-z]&&[^aeiou]]", false, true),
        ("[\\q{ab|c}--\\q{c}]", false, true),
        ("(?i-s:a(?m:b))", false, false),
        ("😀|\\uD83D\\uDE00", true, false),
    ];

    fn check_invariants(ast: &Ast) {
        let source: Vec<u16> = ast.source().encode_utf16().collect();
        for id in ast.ids() {
            let node = ast.node(id);
            // Spans are sane and raw matches the slice.
            assert!(node.start <= node.end);
            assert!(node.end <= source.len());
            assert_eq!(
                ast.raw(id),
                String::from_utf16_lossy(&source[node.start..node.end])
            );
            // Children nest inside their parent and point back at it.
            for child in ast.children(id) {
                let c = ast.node(child);
                assert_eq!(c.parent, Some(id));
                assert!(node.start <= c.start && c.end <= node.end);
            }
            match &node.kind {
                NodeKind::Quantifier { min, max, element, .. } => {
                    if let Some(max) = max {
                        assert!(min <= max);
                    }
                    assert!(!matches!(
                        &ast.node(*element).kind,
                        NodeKind::Quantifier { .. }
                    ));
                }
                NodeKind::CharacterClassRange { min, max } => {
                    let (NodeKind::Character { value: lo }, NodeKind::Character { value: hi }) =
                        (&ast.node(*min).kind, &ast.node(*max).kind)
                    else {
                        panic!("range endpoints must be characters");
                    };
                    assert!(lo <= hi);
                }
                NodeKind::Backreference { resolved, ambiguous, .. } => {
                    assert!(!resolved.is_empty());
                    assert_eq!(*ambiguous, resolved.len() > 1);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_corpus_invariants() {
        for &(pattern, unicode, unicode_sets) in CORPUS {
            let ast = parser()
                .parse_pattern(pattern, unicode, unicode_sets)
                .unwrap_or_else(|e| panic!("{pattern}: {e}"));
            check_invariants(&ast);
            // Round trip: the root covers the input exactly.
            assert_eq!(ast.raw(ast.root()), pattern);
        }
    }

    #[test]
    fn test_determinism() {
        for &(pattern, unicode, unicode_sets) in CORPUS {
            let a = parser().parse_pattern(pattern, unicode, unicode_sets).unwrap();
            let b = parser().parse_pattern(pattern, unicode, unicode_sets).unwrap();
            assert_eq!(a, b, "{pattern} parsed differently twice");
        }
    }

    // ── Edition monotonicity ────────────────────────────────────────────────

    #[test]
    fn test_edition_monotonicity_samples() {
        const VERSIONS: &[EcmaVersion] = &[
            EcmaVersion::Es2015,
            EcmaVersion::Es2018,
            EcmaVersion::Es2022,
            EcmaVersion::Es2024,
            EcmaVersion::Es2025,
        ];
        // (pattern, flags, first accepting edition)
        let gated: &[(&str, &str, EcmaVersion)] = &[
            ("(?<=a)b", "", EcmaVersion::Es2018),
            ("(?<name>a)", "", EcmaVersion::Es2018),
            ("a", "s", EcmaVersion::Es2018),
            ("a", "d", EcmaVersion::Es2022),
            ("[a&&b]", "v", EcmaVersion::Es2024),
            ("(?i:a)", "", EcmaVersion::Es2025),
        ];
        for &(pattern, flags, first) in gated {
            for &version in VERSIONS {
                let result =
                    parser_for(version).validate_literal(&format!("/{pattern}/{flags}"));
                assert_eq!(
                    result.is_ok(),
                    version >= first,
                    "/{pattern}/{flags} at {version:?}"
                );
            }
        }
    }

    // ── Resource cap ────────────────────────────────────────────────────────

    #[test]
    fn test_pattern_too_large() {
        let big = "a".repeat(validator::MAX_PATTERN_UNITS + 1);
        let err = parser().parse_pattern(&big, false, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::PatternTooLarge);
    }
}
