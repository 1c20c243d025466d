//! `rexor_core` — an ECMAScript regular-expression parser and validator.
//!
//! Parses RegExp literals (`/abc[d-f]+/gi`), bare patterns, and flags
//! strings under any ECMAScript edition from 2015 through 2025, producing
//! either a fully-linked AST (spans, parent links, resolved
//! backreferences) or a syntax error pinpointed by code-unit offset.
//!
//! # Crate layout
//!
//! - [`error`] — [`error::RegExpSyntaxError`] and the `ParseResult` alias.
//! - [`parser`] — the parser stack: reader, validator, builder events,
//!   AST assembler, and the public [`parser::RegExpParser`] API.
//! - [`unicode`] — code-point classification and the versioned Unicode
//!   property tables.
//!
//! # Example
//!
//! ```
//! use rexor_core::parser::{ParserOptions, RegExpParser};
//!
//! let parser = RegExpParser::new(ParserOptions::default());
//!
//! // Build a tree...
//! let ast = parser.parse_literal("/(?<word>\\w+)\\s\\k<word>/u").unwrap();
//! assert_eq!(ast.capturing_groups().len(), 1);
//!
//! // ...or just check syntax, with no tree allocation.
//! assert!(parser.validate_pattern("a{3,2}", true, false).is_err());
//! ```

/// Error types and the [`error::ParseResult`] alias.
pub mod error;
/// RegExp parser infrastructure (reader, validator, assembler, AST).
pub mod parser;
/// Code-point classification and Unicode property tables.
pub mod unicode;

pub use error::{ErrorKind, ParseResult, RegExpSyntaxError};
pub use parser::{EcmaVersion, ParserOptions, RegExpParser};
