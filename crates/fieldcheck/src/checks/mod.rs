//! Built-in checks, one per module, implemented as methods on
//! [`Validator`](crate::Validator).
//!
//! # Categories
//!
//! - **Presence**: `required`
//! - **String**: `len`, `include`, `exclude`, `hex_color`, `phone`
//! - **Numeric**: `range`, `include_i64`, `exclude_i64`, `integer`
//! - **Format**: `domain`, `url`, `email`, `ipv4`, `boolean`, `date`
//!
//! Every check appends at most one message for its key and treats the empty
//! value as valid (see the crate docs); the file/image checks live in
//! [`upload`](crate::upload).

pub mod boolean;
pub mod color;
pub mod date;
pub mod domain;
pub mod email;
pub mod length;
pub mod net;
pub mod number;
pub mod phone;
pub mod range;
pub mod required;
pub mod sets;
pub mod url;

pub use email::EmailAddr;
pub use required::Presence;
