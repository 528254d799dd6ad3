//! URL check.

use url::{ParseError, Url};

use super::domain::is_valid_domain;
use crate::core::messages::or_default_msg;
use crate::core::Validator;

impl Validator {
    /// Validates that the value is a URL and returns the parsed form.
    ///
    /// The URL may consist of a scheme, host, path, and query parameters;
    /// only the host is required, and it must pass the
    /// [`domain`](Self::domain) rule (any port is ignored for that test).
    /// When no scheme is given, "http" is assumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// let mut v = Validator::new();
    /// let u = v.url("homepage", "example.com/x", None).unwrap();
    /// assert_eq!(u.as_str(), "http://example.com/x");
    /// assert!(!v.has_errors());
    /// ```
    pub fn url(&mut self, key: &str, value: &str, msg: Option<&str>) -> Option<Url> {
        if value.is_empty() {
            return None;
        }

        let parsed = match Url::parse(value) {
            // "Trying to parse a hostname and path without a scheme" is the
            // one recoverable failure: assume http and go again.
            Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{value}")),
            other => other,
        };

        let u = match parsed {
            Ok(u) => u,
            Err(err) => {
                let m = or_default_msg(msg, &self.messages().url);
                self.append(key, format!("{m}: {err}"));
                return None;
            }
        };

        let host_ok = u
            .host_str()
            .is_some_and(|host| !host.is_empty() && is_valid_domain(host));
        if !host_ok {
            let m = or_default_msg(msg, &self.messages().url);
            self.append(key, m);
            return None;
        }

        Some(u)
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
    #[case("http://example.com", "http://example.com/")]
    #[case("example.com", "http://example.com/")] // default scheme applied
    #[case("example.com/sub/path", "http://example.com/sub/path")]
    #[case("http://example.com:8080/x", "http://example.com:8080/x")]
    #[case("https://example.com/path?q=1", "https://example.com/path?q=1")]
    fn valid(#[case] value: &str, #[case] want: &str) {
        let mut v = Validator::new();
        let u = v.url("k", value, None);
        assert!(!v.has_errors(), "{value:?} should be a valid url");
        assert_eq!(u.map(String::from), Some(want.to_string()));
    }

    #[rstest]
    #[case("http://x")] // single-label host fails the domain rule
    #[case("http://")]
    #[case("zxc")]
    #[case("example.com:8080/x")] // "example.com" reads as the scheme, host is empty
    fn invalid(#[case] value: &str) {
        let mut v = Validator::new();
        assert!(v.url("k", value, None).is_none());
        assert!(v.has_errors(), "{value:?} should fail");
        let messages = v.field_errors("k").unwrap();
        assert!(messages[0].starts_with("must be a valid url"), "got {messages:?}");
    }

    #[test]
    fn port_is_ignored_for_the_domain_rule() {
        let mut v = Validator::new();
        assert!(v.url("k", "http://example.com:80", None).is_some());
        assert!(!v.has_errors());
    }

    #[test]
    fn empty_is_valid_and_absent() {
        let mut v = Validator::new();
        assert!(v.url("k", "", None).is_none());
        assert!(!v.has_errors());
    }

    #[test]
    fn override_message() {
        let mut v = Validator::new();
        v.url("k", "http://x", Some("give us something to link to"));
        assert_eq!(v.to_string(), "k: give us something to link to.\n");
    }
}
