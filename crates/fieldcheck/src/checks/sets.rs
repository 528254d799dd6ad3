//! Membership checks: include/exclude lists.

use crate::core::messages::fill;
use crate::core::Validator;

impl Validator {
    /// Validates that the value is in the candidate list.
    ///
    /// Matching is case-insensitive and the value is trimmed first. An empty
    /// candidate list accepts everything.
    pub fn include(&mut self, key: &str, value: &str, include: &[&str], msg: Option<&str>) {
        if include.is_empty() {
            return;
        }

        let needle = value.trim().to_lowercase();
        if include.iter().any(|candidate| candidate.to_lowercase() == needle) {
            return;
        }

        let m = msg
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| fill(&self.messages().include, &[include.join(", ")]));
        self.append(key, m);
    }

    /// Validates that the value is not in the exclude list.
    ///
    /// Matching is case-insensitive and the value is trimmed first.
    pub fn exclude(&mut self, key: &str, value: &str, exclude: &[&str], msg: Option<&str>) {
        let needle = value.trim().to_lowercase();
        let Some(hit) = exclude.iter().find(|candidate| candidate.to_lowercase() == needle)
        else {
            return;
        };

        let m = msg
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| fill(&self.messages().exclude, &[(*hit).to_string()]));
        self.append(key, m);
    }

    /// Integer analog of [`include`](Self::include); matching is exact.
    pub fn include_i64(&mut self, key: &str, value: i64, include: &[i64], msg: Option<&str>) {
        if include.is_empty() || include.contains(&value) {
            return;
        }

        let m = msg.map(ToOwned::to_owned).unwrap_or_else(|| {
            let list = include.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            fill(&self.messages().include, &[list])
        });
        self.append(key, m);
    }

    /// Integer analog of [`exclude`](Self::exclude); matching is exact.
    pub fn exclude_i64(&mut self, key: &str, value: i64, exclude: &[i64], msg: Option<&str>) {
        if !exclude.contains(&value) {
            return;
        }

        let m = msg
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| fill(&self.messages().exclude, &[value.to_string()]));
        self.append(key, m);
    }
}

// ============================================================================
// TESTS
// ============================================================================
