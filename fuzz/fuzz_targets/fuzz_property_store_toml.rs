#![no_main]

use libfuzzer_sys::fuzz_target;
use replconf::PropertyStore;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing must never panic; anything that parses must serialize again
        if let Ok(store) = PropertyStore::from_toml_str(content) {
            let _ = store.to_toml_string();
        }
    }
});
