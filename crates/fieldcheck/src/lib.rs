//! # fieldcheck
//!
//! Field-level validation for HTTP request input.
//!
//! A [`Validator`] collects human-readable error messages keyed by field
//! name. Check methods are independent: each one inspects a single value and
//! either leaves the aggregate untouched or appends exactly one message under
//! the given key, so a handler can run every check and report all problems in
//! one response.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck::Validator;
//!
//! let mut v = Validator::new();
//! v.required("first_name", "", None);
//! v.len("nick", "jo", 3, 20, None);
//! let id = v.integer("id", "42", None);
//!
//! assert_eq!(id, 42);
//! assert!(v.has_errors());
//! assert_eq!(
//!     v.to_string(),
//!     "first_name: must be set.\nnick: must be longer than 3 characters.\n",
//! );
//! ```
//!
//! ## Conventions
//!
//! Every check treats the value's empty/zero form as valid; only
//! [`Validator::required`] fires on it. Checks that parse their input
//! (`integer`, `boolean`, `url`, `email`, `ipv4`) return the parsed value so
//! validation and extraction happen in one call. Each check accepts an
//! optional override message as its last parameter; when `None`, the wording
//! comes from the [`Messages`] catalog the aggregate was built with.
//!
//! Messages are written to read well when joined with commas after a field
//! name ("must be set", "must be a valid email address") — keep custom
//! wording in the same register.
//!
//! ## Nested validation
//!
//! ```
//! use fieldcheck::Validator;
//!
//! fn check_address(city: &str) -> Result<(), Validator> {
//!     let mut v = Validator::new();
//!     v.required("city", city, None);
//!     v.into_result()
//! }
//!
//! let mut v = Validator::new();
//! v.sub("addresses", "1", check_address("").err());
//! assert_eq!(v.to_string(), "addresses[1].city: must be set.\n");
//! ```

pub mod checks;
pub mod core;
pub mod prelude;
pub mod rules;
#[cfg(feature = "upload")]
pub mod upload;

pub use crate::checks::email::EmailAddr;
pub use crate::checks::required::Presence;
pub use crate::core::{Messages, SubError, Validator};
pub use crate::rules::{Rule, Rules};
#[cfg(feature = "upload")]
pub use crate::upload::{ImageDimension, MemoryUpload, Upload, UploadError};
