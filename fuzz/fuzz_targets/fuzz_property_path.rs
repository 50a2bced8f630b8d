#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        // Fuzz dotted path parsing - this should never panic
        let _ = replconf::PropertyPath::parse(path);
    }
});
