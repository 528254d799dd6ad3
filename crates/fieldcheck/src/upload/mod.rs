//! File/image metadata checks over an uploaded-file abstraction.
//!
//! The checks only need three things from an upload: its byte size, its
//! declared content type (if any), and a seekable byte stream — that is the
//! [`Upload`] trait. [`MemoryUpload`] is the provided implementation for
//! bodies buffered in memory, which is how multipart uploads usually arrive
//! in a handler.
//!
//! A malformed or unreadable file is "bad input", not a bug: every IO or
//! decode failure in here is reported as a validation message on the field,
//! with the underlying cause logged at debug level.

pub mod image;
pub mod mime;
pub mod size;
mod sniff;

use std::io::{self, Cursor, Read, Seek};

use bytes::Bytes;
use thiserror::Error;

use crate::checks::required::Presence;
use crate::core::messages::or_default_msg;
use crate::core::Validator;

pub use image::ImageDimension;

/// A readable, seekable byte stream.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// What the file checks require from an uploaded file.
///
/// The checks only ever read; each check opens its own stream, so `open` may
/// be called several times per validation pass.
pub trait Upload {
    /// Size of the upload in bytes.
    fn size(&self) -> u64;

    /// The content type declared by the client, if any. Declared types are
    /// advisory; when absent or unparseable the checks sniff the leading
    /// bytes instead.
    fn content_type(&self) -> Option<&str>;

    /// Opens a fresh stream over the upload, positioned at the start.
    fn open(&self) -> io::Result<Box<dyn ReadSeek + '_>>;
}

/// Why an upload's bytes could not be inspected.
///
/// Internal to the checks: every variant is downgraded to a validation
/// message on the field it occurred for.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to open the upload stream")]
    Open(#[source] io::Error),
    #[error("failed to read the upload")]
    Read(#[source] io::Error),
    #[error("failed to decode the image header")]
    ImageHeader(#[source] ::image::ImageError),
}

/// An upload buffered in memory.
///
/// # Examples
///
/// ```
/// use fieldcheck::{MemoryUpload, Validator};
///
/// let avatar = MemoryUpload::new("avatar.png", &b"\x89PNG\r\n\x1a\n..."[..])
///     .with_content_type("image/png");
///
/// let mut v = Validator::new();
/// v.file_mime_type("avatar", &avatar, "image/png, image/jpeg", None);
/// assert!(!v.has_errors());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryUpload {
    file_name: String,
    content_type: Option<String>,
    data: Bytes,
}

impl MemoryUpload {
    /// Creates an upload from a file name and its bytes.
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    /// Sets the declared content type, as it came from the request.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// The name the file was uploaded under.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Upload for MemoryUpload {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn open(&self) -> io::Result<Box<dyn ReadSeek + '_>> {
        Ok(Box::new(Cursor::new(self.data.clone())))
    }
}

impl Presence for MemoryUpload {
    fn is_blank(&self) -> bool {
        !has_readable_bytes(self)
    }
}

/// True when the upload has at least one readable byte.
pub(crate) fn has_readable_bytes(file: &dyn Upload) -> bool {
    if file.size() == 0 {
        return false;
    }
    let Ok(mut stream) = file.open() else {
        return false;
    };
    let mut probe = [0_u8; 10];
    matches!(stream.read(&mut probe), Ok(n) if n > 0)
}

/// Reads up to `limit` leading bytes of the upload.
pub(crate) fn read_head(file: &dyn Upload, limit: usize) -> Result<Vec<u8>, UploadError> {
    let stream = file.open().map_err(UploadError::Open)?;
    let mut head = Vec::with_capacity(limit.min(512));
    stream
        .take(limit as u64)
        .read_to_end(&mut head)
        .map_err(UploadError::Read)?;
    Ok(head)
}

impl Validator {
    /// The file-shaped arm of [`required`](Self::required): the upload must
    /// have at least one readable byte.
    ///
    /// An upload that cannot be opened counts as missing; the caller asked
    /// for "a file", and an unreadable one is not that.
    pub fn required_file(&mut self, key: &str, file: &dyn Upload, msg: Option<&str>) {
        if !has_readable_bytes(file) {
            let m = or_default_msg(msg, &self.messages().required);
            self.append(key, m);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_upload_roundtrip() {
        let up = MemoryUpload::new("a.txt", &b"hello"[..]).with_content_type("text/plain");
        assert_eq!(up.size(), 5);
        assert_eq!(up.file_name(), "a.txt");
        assert_eq!(up.content_type(), Some("text/plain"));

        let mut read = String::new();
        up.open().unwrap().read_to_string(&mut read).unwrap();
        assert_eq!(read, "hello");
    }

    #[test]
    fn required_file() {
        let mut v = Validator::new();
        v.required_file("empty", &MemoryUpload::new("e", Bytes::new()), None);
        v.required_file("ok", &MemoryUpload::new("f", &b"x"[..]), None);
        assert_eq!(v.to_string(), "empty: must be set.\n");
    }

    #[test]
    fn required_accepts_uploads() {
        let mut v = Validator::new();
        v.required("doc", &MemoryUpload::new("d", Bytes::new()), None);
        assert!(v.has_errors());
    }

    #[test]
    fn read_head_is_bounded() {
        let up = MemoryUpload::new("big", vec![7_u8; 4096]);
        let head = read_head(&up, 512).unwrap();
        assert_eq!(head.len(), 512);

        let up = MemoryUpload::new("small", &b"ab"[..]);
        assert_eq!(read_head(&up, 512).unwrap(), b"ab");
    }
}
