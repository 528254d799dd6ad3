//! Prelude module for convenient imports.
//!
//! A single `use fieldcheck::prelude::*;` brings in the aggregate, the value
//! types the checks return, and the rule builder.

pub use crate::checks::email::EmailAddr;
pub use crate::checks::required::Presence;
pub use crate::core::{Messages, SubError, Validator};
pub use crate::rules::{Rule, Rules};

#[cfg(feature = "upload")]
pub use crate::upload::{ImageDimension, MemoryUpload, Upload, UploadError};
