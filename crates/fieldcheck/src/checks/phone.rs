//! Phone number check.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::messages::or_default_msg;
use crate::core::Validator;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-() .]{5,20}$").unwrap());

impl Validator {
    /// Validates that the value looks like a phone number.
    ///
    /// There is a great amount of writing conventions for phone numbers:
    /// <https://en.wikipedia.org/wiki/National_conventions_for_writing_telephone_numbers>
    ///
    /// This merely checks the field contains 5 to 20 characters from
    /// `0123456789+-() .`, which is not very strict but covers all the
    /// conventions.
    pub fn phone(&mut self, key: &str, value: &str, msg: Option<&str>) {
        if value.is_empty() {
            return;
        }

        if !PHONE_RE.is_match(value) {
            let m = or_default_msg(msg, &self.messages().phone);
            self.append(key, m);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
