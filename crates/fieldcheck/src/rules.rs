//! Per-field rule lists.
//!
//! A [`Rules`] value names the checks to run against one field, assembled in
//! code with a fluent builder and applied with [`Rules::check`]. Handy when
//! the same constraints apply to many fields or come from a declarative
//! table:
//!
//! ```
//! use fieldcheck::{Rules, Validator};
//!
//! let username = Rules::new().required().len(3, 30);
//!
//! let mut v = Validator::new();
//! username.check(&mut v, "username", "jo");
//! assert_eq!(v.to_string(), "username: must be longer than 3 characters.\n");
//! ```

use crate::core::Validator;

/// One check to run against a string field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    Len { min: usize, max: usize },
    Include(Vec<String>),
    Exclude(Vec<String>),
    Domain,
    Url,
    Email,
    Ipv4,
    HexColor,
    Phone,
    Integer,
    Boolean,
    Date(String),
}

/// An ordered list of checks for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn len(mut self, min: usize, max: usize) -> Self {
        self.rules.push(Rule::Len { min, max });
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn include<I>(mut self, candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.rules
            .push(Rule::Include(candidates.into_iter().map(Into::into).collect()));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn exclude<I>(mut self, candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.rules
            .push(Rule::Exclude(candidates.into_iter().map(Into::into).collect()));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn domain(mut self) -> Self {
        self.rules.push(Rule::Domain);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn url(mut self) -> Self {
        self.rules.push(Rule::Url);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn email(mut self) -> Self {
        self.rules.push(Rule::Email);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn ipv4(mut self) -> Self {
        self.rules.push(Rule::Ipv4);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn hex_color(mut self) -> Self {
        self.rules.push(Rule::HexColor);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn phone(mut self) -> Self {
        self.rules.push(Rule::Phone);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn integer(mut self) -> Self {
        self.rules.push(Rule::Integer);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn boolean(mut self) -> Self {
        self.rules.push(Rule::Boolean);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn date(mut self, layout: impl Into<String>) -> Self {
        self.rules.push(Rule::Date(layout.into()));
        self
    }

    /// Runs every rule, in order, against `value` under `key`.
    pub fn check(&self, v: &mut Validator, key: &str, value: &str) {
        for rule in &self.rules {
            match rule {
                Rule::Required => v.required(key, value, None),
                Rule::Len { min, max } => v.len(key, value, *min, *max, None),
                Rule::Include(candidates) => {
                    let refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
                    v.include(key, value, &refs, None);
                }
                Rule::Exclude(candidates) => {
                    let refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
                    v.exclude(key, value, &refs, None);
                }
                Rule::Domain => v.domain(key, value, None),
                Rule::Url => {
                    v.url(key, value, None);
                }
                Rule::Email => {
                    v.email(key, value, None);
                }
                Rule::Ipv4 => {
                    v.ipv4(key, value, None);
                }
                Rule::HexColor => v.hex_color(key, value, None),
                Rule::Phone => v.phone(key, value, None),
                Rule::Integer => {
                    v.integer(key, value, None);
                }
                Rule::Boolean => {
                    v.boolean(key, value, None);
                }
                Rule::Date(layout) => v.date(key, value, layout, None),
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rules_apply_in_order() {
        let rules = Rules::new().required().len(3, 10).exclude(["admin"]);

        let mut v = Validator::new();
        rules.check(&mut v, "username", "");
        assert_eq!(
            v.field_errors("username"),
            Some(&["must be set".to_string(), "must be longer than 3 characters".to_string()][..]),
        );
    }

    #[test]
    fn passing_value() {
        let rules = Rules::new().required().len(3, 10).exclude(["admin"]);

        let mut v = Validator::new();
        rules.check(&mut v, "username", "barry");
        assert!(!v.has_errors());
    }

    #[test]
    fn the_same_rules_fit_many_fields() {
        let hostname = Rules::new().required().domain();

        let mut v = Validator::new();
        hostname.check(&mut v, "primary", "example.com");
        hostname.check(&mut v, "fallback", "localhost");
        assert_eq!(v.to_string(), "fallback: must be a valid domain.\n");
    }

    #[test]
    fn parsing_rules() {
        let rules = Rules::new().integer();

        let mut v = Validator::new();
        rules.check(&mut v, "count", "1.5");
        assert_eq!(v.to_string(), "count: must be a whole number.\n");
    }

    #[test]
    fn date_rule_keeps_its_layout() {
        let rules = Rules::new().date("%Y-%m-%d");
        assert_eq!(rules.rules(), &[Rule::Date("%Y-%m-%d".to_string())]);

        let mut v = Validator::new();
        rules.check(&mut v, "since", "2026-08-06");
        assert!(!v.has_errors());
    }
}
