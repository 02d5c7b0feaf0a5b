#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let source = glint::highlight::source::SourceBuffer::new_from_string(s, "fuzz_targets/tokenize.rs");
        let tb = glint::highlight::lexer::TokenizedBuffer::tokenize(&source);
        let rebuilt: String = tb.tokens().iter().map(|t| t.string).collect();
        assert_eq!(rebuilt, s);
    }
});
