#![no_main]

use libfuzzer_sys::fuzz_target;
use serverstore::{validate_server, Server};

fuzz_target!(|data: &[u8]| {
    if let Ok(ip) = std::str::from_utf8(data) {
        // Validation must never panic, whatever the address looks like
        let _ = validate_server(&Server::new("fuzz", ip, "/srv"));
    }
});
