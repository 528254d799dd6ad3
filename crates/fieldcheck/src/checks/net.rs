//! IP address check.

use std::net::{IpAddr, Ipv4Addr};

use crate::core::messages::or_default_msg;
use crate::core::Validator;

impl Validator {
    /// Validates that the value is an IPv4 address and returns the parsed
    /// form.
    ///
    /// Plain IPv6 addresses and CIDR notation are rejected; an IPv4-mapped
    /// IPv6 address (`::ffff:127.0.0.1`) passes since it names a 4-byte
    /// address.
    pub fn ipv4(&mut self, key: &str, value: &str, msg: Option<&str>) -> Option<Ipv4Addr> {
        if value.is_empty() {
            return None;
        }

        let parsed = match value.parse::<IpAddr>() {
            Ok(IpAddr::V4(ip)) => Some(ip),
            Ok(IpAddr::V6(ip)) => ip.to_ipv4_mapped(),
            Err(_) => None,
        };

        if parsed.is_none() {
            let m = or_default_msg(msg, &self.messages().ipv4);
            self.append(key, m);
        }
        parsed
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use rstest::rstest;

    use crate::core::Validator;

    #[rstest]
    #[case("127.0.0.1", Ipv4Addr::new(127, 0, 0, 1))]
    #[case("0.0.0.0", Ipv4Addr::UNSPECIFIED)]
    #[case("255.255.255.255", Ipv4Addr::BROADCAST)]
    #[case("::ffff:192.0.2.1", Ipv4Addr::new(192, 0, 2, 1))]
    fn valid(#[case] value: &str, #[case] want: Ipv4Addr) {
        let mut v = Validator::new();
        assert_eq!(v.ipv4("k", value, None), Some(want));
        assert!(!v.has_errors(), "{value:?} should pass");
    }

    #[rstest]
    #[case("::1")] // IPv6
    #[case("127.0.0.4/8")] // CIDR is not an address
    #[case("127.0.0")]
    #[case("256.1.1.1")]
    #[case("asdf")]
    fn invalid(#[case] value: &str) {
        let mut v = Validator::new();
        assert!(v.ipv4("k", value, None).is_none());
        assert_eq!(v.to_string(), "k: must be a valid IPv4 address.\n", "{value:?}");
    }

    #[test]
    fn empty_is_valid_and_absent() {
        let mut v = Validator::new();
        assert!(v.ipv4("k", "", None).is_none());
        assert!(!v.has_errors());
    }
}
