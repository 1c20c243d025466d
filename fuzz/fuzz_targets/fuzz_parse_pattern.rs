#![no_main]

use libfuzzer_sys::fuzz_target;
use rexor_core::parser::ast::NodeKind;
use rexor_core::parser::{ParserOptions, RegExpParser};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let parser = RegExpParser::new(ParserOptions::default());

    for (unicode, unicode_sets) in [(false, false), (true, false), (false, true)] {
        match parser.parse_pattern(source, unicode, unicode_sets) {
            Ok(ast) => {
                // Round trip: the root span must reproduce the input.
                assert_eq!(ast.raw(ast.root()), source);
                // Every backreference resolved to at least one group.
                for id in ast.backreferences() {
                    assert!(matches!(
                        &ast.node(id).kind,
                        NodeKind::Backreference { resolved, .. } if !resolved.is_empty()
                    ));
                }
            }
            Err(err) => {
                // Errors point into the input (code units), never past it.
                assert!(err.offset <= source.encode_utf16().count());
            }
        }
    }
});
