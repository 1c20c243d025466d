//! Code-point classification shared by the reader and the validator.
//!
//! All predicates take `u32` code points because the parser addresses the
//! input as UTF-16 code units: outside `u`/`v` mode a lone surrogate is a
//! perfectly valid "character" that `char` cannot represent.

/// The versioned Unicode property tables for `\p{…}` / `\P{…}`.
pub mod properties;

// ─────────────────────────────────────────────────────────────────────────────
// Surrogates
// ─────────────────────────────────────────────────────────────────────────────

/// Returns `true` for UTF-16 lead (high) surrogate code units.
pub fn is_lead_surrogate(cp: u32) -> bool {
    (0xD800..=0xDBFF).contains(&cp)
}

/// Returns `true` for UTF-16 trail (low) surrogate code units.
pub fn is_trail_surrogate(cp: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&cp)
}

/// Combines a lead/trail surrogate pair into a single code point.
pub fn combine_surrogate_pair(lead: u32, trail: u32) -> u32 {
    (lead - 0xD800) * 0x400 + (trail - 0xDC00) + 0x10000
}

// ─────────────────────────────────────────────────────────────────────────────
// Digits
// ─────────────────────────────────────────────────────────────────────────────

/// Returns `true` for `0`–`9`.
pub fn is_decimal_digit(cp: u32) -> bool {
    (0x30..=0x39).contains(&cp)
}

/// Returns `true` for `0`–`9`, `a`–`f`, `A`–`F`.
pub fn is_hex_digit(cp: u32) -> bool {
    is_decimal_digit(cp) || (0x41..=0x46).contains(&cp) || (0x61..=0x66).contains(&cp)
}

/// Returns `true` for `0`–`7`.
pub fn is_octal_digit(cp: u32) -> bool {
    (0x30..=0x37).contains(&cp)
}

/// Numeric value of a hex digit. Callers must check [`is_hex_digit`] first.
pub fn hex_digit_value(cp: u32) -> u32 {
    match cp {
        0x30..=0x39 => cp - 0x30,
        0x41..=0x46 => cp - 0x41 + 10,
        _ => cp - 0x61 + 10,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pattern syntax characters
// ─────────────────────────────────────────────────────────────────────────────

/// Returns `true` for the *SyntaxCharacter*s of the RegExp grammar:
/// `^ $ \ . * + ? ( ) [ ] { } |`.
pub fn is_syntax_character(cp: u32) -> bool {
    char::from_u32(cp).is_some_and(|c| {
        matches!(
            c,
            '^' | '$' | '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|'
        )
    })
}

/// Returns `true` for *ClassSetSyntaxCharacter*s, the characters that must
/// be escaped to appear literally inside a `v`-mode class:
/// `( ) [ ] { } / - \ |`.
pub fn is_class_set_syntax_character(cp: u32) -> bool {
    char::from_u32(cp).is_some_and(|c| {
        matches!(
            c,
            '(' | ')' | '[' | ']' | '{' | '}' | '/' | '-' | '\\' | '|'
        )
    })
}

/// Returns `true` for *ClassSetReservedDoublePunctuator* characters. A
/// doubled occurrence of one of these inside a `v`-mode class is reserved
/// syntax: `&& !! ## $$ %% ** ++ ,, .. :: ;; << == >> ?? @@ ^^ `` ~~`.
pub fn is_class_set_reserved_double_punctuator(cp: u32) -> bool {
    char::from_u32(cp).is_some_and(|c| {
        matches!(
            c,
            '&' | '!'
                | '#'
                | '$'
                | '%'
                | '*'
                | '+'
                | ','
                | '.'
                | ':'
                | ';'
                | '<'
                | '='
                | '>'
                | '?'
                | '@'
                | '^'
                | '`'
                | '~'
        )
    })
}

/// Returns `true` for *ClassSetReservedPunctuator*s, which may appear in a
/// `v`-mode class only behind a `\`.
pub fn is_class_set_reserved_punctuator(cp: u32) -> bool {
    char::from_u32(cp).is_some_and(|c| {
        matches!(
            c,
            '&' | '-' | '!' | '#' | '%' | ',' | ':' | ';' | '<' | '=' | '>' | '@' | '`' | '~'
        )
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Identifier characters (capture-group names)
// ─────────────────────────────────────────────────────────────────────────────

/// Returns `true` for characters that may *start* a capture-group name.
pub fn is_id_start(cp: u32) -> bool {
    char::from_u32(cp).is_some_and(|c| c == '$' || c == '_' || c.is_alphabetic())
}

/// Returns `true` for characters that may *continue* a capture-group name.
pub fn is_id_continue(cp: u32) -> bool {
    char::from_u32(cp).is_some_and(|c| {
        c == '$' || c == '_' || c == '\u{200C}' || c == '\u{200D}' || c.is_alphanumeric()
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Misc
// ─────────────────────────────────────────────────────────────────────────────

/// Returns `true` for values inside the Unicode code-point range.
pub fn is_valid_code_point(cp: u32) -> bool {
    cp <= 0x10FFFF
}

/// Returns `true` for ECMAScript *LineTerminator* code points, which may
/// not appear unescaped in a RegExp literal body.
pub fn is_line_terminator(cp: u32) -> bool {
    matches!(cp, 0x0A | 0x0D | 0x2028 | 0x2029)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrogate_pair_combination() {
        // U+1F600 GRINNING FACE = D83D DE00.
        assert!(is_lead_surrogate(0xD83D));
        assert!(is_trail_surrogate(0xDE00));
        assert_eq!(combine_surrogate_pair(0xD83D, 0xDE00), 0x1F600);
    }

    #[test]
    fn test_surrogate_classification_bounds() {
        assert!(!is_lead_surrogate(0xD7FF));
        assert!(is_lead_surrogate(0xD800));
        assert!(is_lead_surrogate(0xDBFF));
        assert!(!is_lead_surrogate(0xDC00));
        assert!(is_trail_surrogate(0xDC00));
        assert!(is_trail_surrogate(0xDFFF));
        assert!(!is_trail_surrogate(0xE000));
    }

    #[test]
    fn test_hex_digit_values() {
        assert_eq!(hex_digit_value('0' as u32), 0);
        assert_eq!(hex_digit_value('9' as u32), 9);
        assert_eq!(hex_digit_value('a' as u32), 10);
        assert_eq!(hex_digit_value('F' as u32), 15);
    }

    #[test]
    fn test_syntax_characters() {
        for c in "^$\\.*+?()[]{}|".chars() {
            assert!(is_syntax_character(c as u32), "{c} must be syntax");
        }
        assert!(!is_syntax_character('a' as u32));
        assert!(!is_syntax_character('-' as u32));
        // Lone surrogates are never syntax characters.
        assert!(!is_syntax_character(0xD800));
    }

    #[test]
    fn test_class_set_punctuators() {
        assert!(is_class_set_syntax_character('-' as u32));
        assert!(is_class_set_reserved_double_punctuator('&' as u32));
        assert!(is_class_set_reserved_punctuator('&' as u32));
        assert!(!is_class_set_reserved_double_punctuator('-' as u32));
        assert!(is_class_set_reserved_punctuator('-' as u32));
    }

    #[test]
    fn test_id_start_and_continue() {
        assert!(is_id_start('a' as u32));
        assert!(is_id_start('$' as u32));
        assert!(is_id_start('_' as u32));
        assert!(!is_id_start('1' as u32));
        assert!(is_id_continue('1' as u32));
        assert!(is_id_continue(0x200C));
        assert!(is_id_continue(0x200D));
        assert!(!is_id_continue('-' as u32));
    }
}
