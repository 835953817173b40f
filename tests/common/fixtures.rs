//! Test fixtures - reusable server records.

use serverstore::Server;

pub fn alpha() -> Server {
    Server::new("alpha", "127.0.0.1", "/srv/alpha")
}

pub fn beta() -> Server {
    Server::new("beta", "127.0.0.2", "/srv/beta")
}

/// Addresses that must never be admitted, with the reason.
pub const BAD_IPS: &[(&str, &str)] = &[
    ("", "IP is empty string"),
    ("0.0.0", "not enough dots"),
    ("0.0.0.cat", "not a number"),
    ("0.0.0.256", "number too large"),
    ("0.0.0.-1", "number too small"),
];
