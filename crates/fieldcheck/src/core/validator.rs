//! The error aggregate.
//!
//! A [`Validator`] maps field keys to ordered lists of error messages. It is
//! created once per validation pass (typically one per in-flight request),
//! mutated exclusively through `&mut self`, and handed back to the caller as
//! the request-validation failure. There is no locking: exclusive mutation is
//! what the ownership rules already guarantee.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::messages::Messages;

/// Most fields collect exactly one message; spill to the heap past that.
type MessageList = SmallVec<[String; 1]>;

/// Holds the validation errors, keyed by field name.
///
/// # Examples
///
/// ```
/// use fieldcheck::Validator;
///
/// let mut v = Validator::new();
/// v.required("first_name", "", None);
/// if v.has_errors() {
///     for (key, messages) in v.iter() {
///         println!("{key}: {}", messages.join(", "));
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Validator {
    #[serde(rename = "errors")]
    entries: BTreeMap<String, MessageList>,
    #[serde(skip)]
    messages: Messages,
}

impl Validator {
    /// Creates an empty aggregate with the default message catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty aggregate that words its default messages from
    /// `messages` (the i18n entry point).
    #[must_use]
    pub fn with_messages(messages: Messages) -> Self {
        Self {
            entries: BTreeMap::new(),
            messages,
        }
    }

    /// The message catalog this aggregate words its defaults from.
    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Appends a new error to the list for `key`.
    ///
    /// Messages are stored as given: no deduplication, no formatting.
    pub fn append(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(message.into());
    }

    /// Reports whether any errors were recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    /// True iff no errors were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with at least one error.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.entries.len()
    }

    /// The messages recorded for `key`, if any.
    #[must_use]
    pub fn field_errors(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(|messages| messages.as_slice())
    }

    /// Iterates over `(field key, messages)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    /// `None` if there are no errors, else the aggregate itself.
    ///
    /// Makes it a bit more elegant to hand a nested outcome to
    /// [`sub`](Self::sub):
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// let mut parent = Validator::new();
    /// let mut child = Validator::new();
    /// child.required("city", "", None);
    /// parent.sub("address", "", child.error_or_nil());
    /// assert!(parent.has_errors());
    /// ```
    #[must_use]
    pub fn error_or_nil(self) -> Option<Self> {
        if self.has_errors() { Some(self) } else { None }
    }

    /// `Ok(())` if there are no errors, else `Err(self)` — the usual way to
    /// return from a validation function.
    #[must_use = "the aggregate is lost if the result is dropped"]
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }

    /// Merges errors from another aggregate into this one.
    ///
    /// Per key, the receiver's existing messages come first, then the
    /// merged-in ones, in their original order.
    pub fn merge(&mut self, other: Validator) {
        for (key, messages) in other.entries {
            self.entries.entry(key).or_default().extend(messages);
        }
    }

    /// Incorporates a nested validation outcome.
    ///
    /// Keys from the nested aggregate are prefixed with `key.` — or
    /// `key[sub_key].` when `sub_key` is non-empty, for elements of a
    /// collection. A plain (non-aggregate) error is appended as the prefix
    /// key's own message. A `None` or an aggregate without errors does
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// let mut v = Validator::new();
    /// let addresses = ["main street", ""];
    /// for (i, street) in addresses.iter().enumerate() {
    ///     let mut a = Validator::new();
    ///     a.required("street", *street, None);
    ///     v.sub("addresses", &i.to_string(), a.error_or_nil());
    /// }
    /// assert_eq!(v.to_string(), "addresses[1].street: must be set.\n");
    /// ```
    pub fn sub<E: Into<SubError>>(&mut self, key: &str, sub_key: &str, err: Option<E>) {
        let Some(err) = err else { return };

        let prefix = if sub_key.is_empty() {
            key.to_string()
        } else {
            format!("{key}[{sub_key}]")
        };

        match err.into() {
            SubError::Nested(sub) => {
                for (k, messages) in sub.entries {
                    self.entries
                        .entry(format!("{prefix}.{k}"))
                        .or_default()
                        .extend(messages);
                }
            }
            SubError::Plain(message) => self.append(prefix, message),
        }
    }

    /// The HTTP status classification for a validation failure.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        400
    }

    /// The errors as a JSON value shaped `{"errors": {field: [messages]}}`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": &self.entries })
    }
}

impl PartialEq for Validator {
    /// Two aggregates are equal when they recorded the same errors; the
    /// message catalog does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Validator {}

impl fmt::Display for Validator {
    /// Deterministic rendering for logs and humans: one `key: msg1, msg2.`
    /// line per field in sorted key order, or `<no errors>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_errors() {
            return f.write_str("<no errors>");
        }
        for (key, messages) in &self.entries {
            writeln!(f, "{key}: {}.", messages.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for Validator {}

// ============================================================================
// SUB ERRORS
// ============================================================================

/// What [`Validator::sub`] accepts: a nested aggregate, whose entries are
/// re-keyed under the prefix, or any plain error, whose text lands on the
/// prefix key itself.
#[derive(Debug, Clone)]
pub enum SubError {
    Nested(Validator),
    Plain(String),
}

impl From<Validator> for SubError {
    fn from(v: Validator) -> Self {
        SubError::Nested(v)
    }
}

impl From<String> for SubError {
    fn from(message: String) -> Self {
        SubError::Plain(message)
    }
}

impl From<&str> for SubError {
    fn from(message: &str) -> Self {
        SubError::Plain(message.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for SubError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        SubError::Plain(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
