#![no_main]
use libfuzzer_sys::fuzz_target;
use trivert::{convert, Format};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(json) = convert(s, Format::Xml, Format::Json) {
            let _ = convert(&json, Format::Json, Format::Xml);
        }
    }
});
