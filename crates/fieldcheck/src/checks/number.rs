//! Whole number parse check.

use crate::core::messages::or_default_msg;
use crate::core::Validator;

impl Validator {
    /// Checks that this looks like a whole number and returns the parsed
    /// value (0 on failure, or for an empty input).
    ///
    /// Validating and getting a useful value happen at the same time:
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// let mut v = Validator::new();
    /// let id = v.integer("id", "42", None);
    /// assert_eq!(id, 42);
    /// assert!(!v.has_errors());
    /// ```
    pub fn integer(&mut self, key: &str, value: &str, msg: Option<&str>) -> i64 {
        if value.is_empty() {
            return 0;
        }

        match value.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                let m = or_default_msg(msg, &self.messages().integer);
                self.append(key, m);
                0
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
