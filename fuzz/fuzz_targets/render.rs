#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = data;
    if let Ok(source) = glint::highlight::source::SourceBuffer::new_from_reader(&mut reader, "fuzz_targets/render.rs") {
        let html = glint::highlight(source.code());
        assert!(!html.contains("<script"));
    }
});
