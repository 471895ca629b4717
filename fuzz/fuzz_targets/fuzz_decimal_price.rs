#![no_main]

use libfuzzer_sys::fuzz_target;
use regdomains::Micros;

fuzz_target!(|data: &str| {
    if let Ok(price) = Micros::from_decimal_str(data) {
        // Display output must parse back to the same amount
        let shown = price.to_string();
        assert_eq!(Micros::from_decimal_str(&shown), Ok(price));
    }
});
