//! Property tests for admission rules.

use proptest::prelude::*;

use serverstore::{validate_server, Server, ServerField};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every IPv4 and IPv6 address is admitted.
    #[test]
    fn property_real_addresses_accepted(
        v4 in any::<std::net::Ipv4Addr>(),
        v6 in any::<std::net::Ipv6Addr>(),
    ) {
        for ip in [v4.to_string(), v6.to_string()] {
            let server = Server::new("srv", ip, "/srv");
            prop_assert!(validate_server(&server).is_ok());
        }
    }

    /// PROPERTY: a dotted quad with any octet above 255 is rejected.
    #[test]
    fn property_out_of_range_octet_rejected(
        octets in proptest::array::uniform3(0u32..=255),
        big in 256u32..100_000,
        position in 0usize..4,
    ) {
        let mut parts: Vec<String> = octets.iter().map(u32::to_string).collect();
        parts.insert(position, big.to_string());
        let server = Server::new("srv", parts.join("."), "/srv");

        let err = validate_server(&server).unwrap_err();
        prop_assert_eq!(err.field, ServerField::IpAddress);
    }

    /// PROPERTY: validation is total; it never panics on arbitrary input.
    #[test]
    fn property_validation_never_panics(
        name in ".{0,8}",
        ip in ".{0,16}",
        dir in ".{0,8}",
    ) {
        let _ = validate_server(&Server::new(name, ip, dir));
    }
}
