#![no_main]

use libfuzzer_sys::fuzz_target;
use rexor_core::parser::{EcmaVersion, ParserOptions, RegExpParser};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // First byte steers the configuration so one corpus covers every
    // edition and both strictness settings.
    let (config, source) = match text.as_bytes().first() {
        Some(b) => (*b, &text[1..]),
        None => return,
    };
    let versions = [
        EcmaVersion::Es2015,
        EcmaVersion::Es2018,
        EcmaVersion::Es2022,
        EcmaVersion::Es2024,
        EcmaVersion::Es2025,
    ];
    let options = ParserOptions {
        strict: config & 1 != 0,
        ecma_version: versions[(config as usize >> 1) % versions.len()],
    };
    let parser = RegExpParser::new(options);

    // Parsing must never panic; on success the tree must be internally
    // consistent.
    if let Ok(ast) = parser.parse_literal(source) {
        let units = source.encode_utf16().count();
        for id in ast.ids() {
            let node = ast.node(id);
            assert!(node.start <= node.end && node.end <= units);
            for child in ast.children(id) {
                assert_eq!(ast.node(child).parent, Some(id));
            }
        }
        // A tree-building parse and a validation-only pass must agree.
        assert!(parser.validate_literal(source).is_ok());
    } else {
        assert!(parser.validate_literal(source).is_err());
    }
});
