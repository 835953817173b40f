#![no_main]

use libfuzzer_sys::fuzz_target;
use serverstore::infrastructure::repositories::{decode_registry, encode_registry};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Whatever decodes must encode and decode to the same registry.
        if let Ok(registry) = decode_registry(content) {
            let encoded = encode_registry(&registry).unwrap();
            assert_eq!(decode_registry(&encoded).unwrap(), registry);
        }
    }
});
