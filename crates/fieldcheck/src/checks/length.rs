//! String length check.

use crate::core::messages::fill;
use crate::core::Validator;

impl Validator {
    /// Sets the minimum and maximum length for a string in characters, not
    /// in bytes.
    ///
    /// A maximum of 0 indicates there is no upper limit. Both bounds are
    /// inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// let mut v = Validator::new();
    /// v.len("nick", "héllo", 5, 5, None);
    /// assert!(!v.has_errors()); // five characters, more than five bytes
    /// ```
    pub fn len(&mut self, key: &str, value: &str, min: usize, max: usize, msg: Option<&str>) {
        let count = value.chars().count();

        if count < min {
            let m = msg
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| fill(&self.messages().len_longer, &[min.to_string()]));
            self.append(key, m);
        } else if max > 0 && count > max {
            let m = msg
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| fill(&self.messages().len_shorter, &[max.to_string()]));
            self.append(key, m);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
