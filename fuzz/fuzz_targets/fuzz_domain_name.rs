#![no_main]

use libfuzzer_sys::fuzz_target;
use regdomains::types::{DomainName, MAX_DOMAIN_LEN};

fuzz_target!(|data: &str| {
    if let Ok(domain) = DomainName::parse(data) {
        assert!(domain.as_str().len() <= MAX_DOMAIN_LEN);
        // Re-parsing the accepted form should succeed unchanged
        let reparsed = DomainName::parse(domain.as_str()).expect("re-parse should succeed");
        assert_eq!(reparsed, domain);
    }
});
