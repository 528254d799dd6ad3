//! Boolean parse check.

use crate::core::messages::or_default_msg;
use crate::core::Validator;

impl Validator {
    /// Checks that this looks like a boolean value and returns the parsed
    /// value (false on failure, or for an empty input).
    ///
    /// Truthy: `1`, `y`, `yes`, `t`, `true`. Falsy: `0`, `n`, `no`, `f`,
    /// `false`. Matching is case-insensitive; anything else is an error.
    pub fn boolean(&mut self, key: &str, value: &str, msg: Option<&str>) -> bool {
        if value.is_empty() {
            return false;
        }

        match value.to_lowercase().as_str() {
            "1" | "y" | "yes" | "t" | "true" => true,
            "0" | "n" | "no" | "f" | "false" => false,
            _ => {
                let m = or_default_msg(msg, &self.messages().boolean);
                self.append(key, m);
                false
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
