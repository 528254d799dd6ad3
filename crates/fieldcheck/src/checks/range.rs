//! Integer range check.

use crate::core::messages::fill;
use crate::core::Validator;

impl Validator {
    /// Sets the minimum and maximum value of an integer.
    ///
    /// A maximum of 0 indicates there is no upper limit. Both bounds are
    /// inclusive.
    pub fn range(&mut self, key: &str, value: i64, min: i64, max: i64, msg: Option<&str>) {
        if value < min {
            let m = msg
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| fill(&self.messages().range_higher, &[min.to_string()]));
            self.append(key, m);
        }
        if max > 0 && value > max {
            let m = msg
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| fill(&self.messages().range_lower, &[max.to_string()]));
            self.append(key, m);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
