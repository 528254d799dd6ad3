//! Email address check.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::required::Presence;
use crate::core::messages::or_default_msg;
use crate::core::Validator;

// The HTML5 email pattern: pragmatic rather than RFC 5322 complete. Display
// names ("Barry <b@example.com>") and quoted local parts are rejected.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

/// A parsed email address, split at the last `@`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddr {
    local: String,
    domain: String,
}

impl EmailAddr {
    /// Parses an address, or `None` when the value doesn't look like one.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if !EMAIL_RE.is_match(value) {
            return None;
        }
        let (local, domain) = value.rsplit_once('@')?;
        Some(Self {
            local: local.to_string(),
            domain: domain.to_string(),
        })
    }

    /// The part before the `@`.
    #[must_use]
    pub fn local(&self) -> &str {
        &self.local
    }

    /// The part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for EmailAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            return Ok(());
        }
        write!(f, "{}@{}", self.local, self.domain)
    }
}

impl Presence for EmailAddr {
    fn is_blank(&self) -> bool {
        self.local.is_empty() && self.domain.is_empty()
    }
}

impl Presence for Vec<EmailAddr> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Validator {
    /// Validates that this looks like an email address and returns the
    /// parsed form.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// let mut v = Validator::new();
    /// let addr = v.email("email", "barry@example.com", None).unwrap();
    /// assert_eq!(addr.domain(), "example.com");
    /// assert!(!v.has_errors());
    /// ```
    pub fn email(&mut self, key: &str, value: &str, msg: Option<&str>) -> Option<EmailAddr> {
        if value.is_empty() {
            return None;
        }

        let parsed = EmailAddr::parse(value);
        if parsed.is_none() {
            let m = or_default_msg(msg, &self.messages().email);
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
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("barry@example.com", "barry", "example.com")]
    #[case("user+tag@example.co.uk", "user+tag", "example.co.uk")]
    #[case("user.name@sub.example.com", "user.name", "sub.example.com")]
    fn valid(#[case] value: &str, #[case] local: &str, #[case] domain: &str) {
        let mut v = Validator::new();
        let addr = v.email("k", value, None).unwrap();
        assert!(!v.has_errors());
        assert_eq!(addr.local(), local);
        assert_eq!(addr.domain(), domain);
        assert_eq!(addr.to_string(), value);
    }

    #[rstest]
    #[case("invalid")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@-bad.com")]
    #[case("Barry <barry@example.com>")]
    fn invalid(#[case] value: &str) {
        let mut v = Validator::new();
        assert!(v.email("k", value, None).is_none());
        assert_eq!(v.to_string(), "k: must be a valid email address.\n", "{value:?}");
    }

    #[test]
    fn empty_is_valid_and_absent() {
        let mut v = Validator::new();
        assert!(v.email("k", "", None).is_none());
        assert!(!v.has_errors());
    }

    #[test]
    fn blank_address() {
        assert!(EmailAddr::default().is_blank());
        assert_eq!(EmailAddr::default().to_string(), "");
        assert!(!EmailAddr::parse("a@b.c").unwrap().is_blank());
    }

    #[test]
    fn required_accepts_a_parsed_address() {
        let mut v = Validator::new();
        v.required("from", &EmailAddr::parse("a@b.c").unwrap(), None);
        v.required("to", &EmailAddr::default(), None);
        v.required("cc", &Vec::<EmailAddr>::new(), None);
        assert_eq!(v.to_string(), "cc: must be set.\nto: must be set.\n");
    }
}
