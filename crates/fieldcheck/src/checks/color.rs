//! Hex color check.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::messages::or_default_msg;
use crate::core::Validator;

// A hex triplet, long or short form. Four and five digit strings are not
// colors.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#(?:[0-9a-f]{3}|[0-9a-f]{6})$").unwrap());

impl Validator {
    /// Validates that the value looks like a color as a hex triplet
    /// (e.g. `#ffffff` or `#fff`).
    pub fn hex_color(&mut self, key: &str, value: &str, msg: Option<&str>) {
        if value.is_empty() {
            return;
        }

        if !HEX_COLOR_RE.is_match(value) {
            let m = or_default_msg(msg, &self.messages().hex_color);
            self.append(key, m);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
