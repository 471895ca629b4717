#![no_main]

use libfuzzer_sys::fuzz_target;
use regdomains::godaddy::normalize_price;

fuzz_target!(|data: &[u8]| {
    // Arbitrary JSON must never panic the normalizer
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = normalize_price(&value);
    }
});
