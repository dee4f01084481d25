#![no_main]

use bento_demo::script;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }
    // Parsing must never panic; errors carry a 1-based line number.
    match script::parse(text) {
        Ok(steps) => assert!(steps.len() <= text.lines().count()),
        Err(err) => assert!(err.to_string().starts_with("line ")),
    }
});
