//! Date format check.

use chrono::format::{parse, Parsed, StrftimeItems};

use crate::core::messages::fill;
use crate::core::Validator;

impl Validator {
    /// Checks that the value looks like a date in the given strftime
    /// `layout` (e.g. `%Y-%m-%d`).
    ///
    /// Conformance to the layout is checked, and whatever the layout
    /// captured must form a real calendar date and/or clock time; a layout
    /// naming just a time of day is fine.
    pub fn date(&mut self, key: &str, value: &str, layout: &str, msg: Option<&str>) {
        if value.is_empty() {
            return;
        }

        // `parse` alone accepts per-field ranges ("2026-02-30" has a valid
        // day field); resolving catches the impossible combinations.
        let mut parsed = Parsed::new();
        let ok = parse(&mut parsed, value, StrftimeItems::new(layout)).is_ok()
            && (parsed.to_naive_datetime_with_offset(0).is_ok()
                || parsed.to_naive_date().is_ok()
                || parsed.to_naive_time().is_ok());

        if !ok {
            let m = msg
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| fill(&self.messages().date, &[layout.to_string()]));
            self.append(key, m);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
