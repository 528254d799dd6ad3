//! Domain name check.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::messages::or_default_msg;
use crate::core::Validator;

// See RFC 1034 section 3.1 and RFC 1035 section 2.3.1:
//
// - only letters, digits, and hyphens per label;
// - at most 63 per label (the RFC limit is 63 bytes; this matches 63
//   characters, which also admits native-script IDN labels);
// - at least two labels.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\d-]{1,63}(?:\.[\p{L}\d-]{1,63})+$").unwrap()
});

pub(crate) fn is_valid_domain(value: &str) -> bool {
    DOMAIN_RE.is_match(value)
}

impl Validator {
    /// Validates that the value is a domain name.
    ///
    /// A domain must consist of at least two labels, so "com" or
    /// "localhost" — while technically valid domain names — are not
    /// accepted, whereas "example.com" or "me.localhost" are. For the
    /// overwhelming majority of applications this makes the most sense.
    ///
    /// Internationalized domain names pass both as UTF-8 and as punycode.
    pub fn domain(&mut self, key: &str, value: &str, msg: Option<&str>) {
        if value.is_empty() {
            return;
        }

        if !is_valid_domain(value) {
            let m = or_default_msg(msg, &self.messages().domain);
            self.append(key, m);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::core::Validator;

    #[rstest]
    #[case("example.com")]
    #[case("me.localhost")]
    #[case("a.b.c.d.e")]
    #[case("my-host.example.com")]
    #[case("xn--pgbg2dpr.xn--mgbbbe5a")] // punycode IDN
    #[case("дом.испытание")] // native-script IDN
    #[case("123.456")]
    fn valid(#[case] value: &str) {
        let mut v = Validator::new();
        v.domain("k", value, None);
        assert!(!v.has_errors(), "{value:?} should be a valid domain");
    }

    #[rstest]
    #[case("localhost")] // single label, by design
    #[case("com")]
    #[case("example..com")]
    #[case(".example.com")]
    #[case("example.com.")]
    #[case("exa mple.com")]
    #[case("under_score.com")]
    fn invalid(#[case] value: &str) {
        let mut v = Validator::new();
        v.domain("k", value, None);
        assert_eq!(v.to_string(), "k: must be a valid domain.\n", "{value:?} should fail");
    }

    #[test]
    fn label_length_limit() {
        let mut v = Validator::new();
        v.domain("ok", &format!("{}.com", "a".repeat(63)), None);
        v.domain("bad", &format!("{}.com", "a".repeat(64)), None);
        assert!(v.field_errors("ok").is_none());
        assert!(v.field_errors("bad").is_some());
    }

    #[test]
    fn empty_is_valid() {
        let mut v = Validator::new();
        v.domain("k", "", None);
        assert!(!v.has_errors());
    }
}
