//! Mime type checks for uploads.

use super::sniff::{sniff, SNIFF_LEN};
use super::{read_head, Upload};
use crate::core::messages::fill;
use crate::core::Validator;

// The raster formats `is_image` recognizes, by the names callers use in a
// format list.
const IMAGE_FORMATS: &[(&str, &str)] = &[
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
];

fn format_mime(name: &str) -> Option<&'static str> {
    IMAGE_FORMATS
        .iter()
        .find(|(format, _)| name.eq_ignore_ascii_case(format))
        .map(|(_, mime_type)| *mime_type)
}

/// The upload's content type: the declared one when it parses, else whatever
/// the leading bytes sniff as.
pub(crate) fn effective_content_type(file: &dyn Upload) -> Option<String> {
    if let Some(declared) = file.content_type() {
        match declared.parse::<mime::Mime>() {
            Ok(parsed) => return Some(parsed.essence_str().to_ascii_lowercase()),
            Err(_) => {
                tracing::debug!(declared, "unparseable declared content type, sniffing instead");
            }
        }
    }

    match read_head(file, SNIFF_LEN) {
        Ok(head) => sniff(&head).map(str::to_owned),
        Err(err) => {
            tracing::debug!(error = %err, "could not read the upload head for sniffing");
            None
        }
    }
}

impl Validator {
    /// Validates the upload's mime type against a comma-separated allow-list
    /// (e.g. `"image/jpeg, text/csv, application/pdf"`); any match passes.
    ///
    /// The declared content type is used when the client sent a parseable
    /// one; otherwise the leading bytes are sniffed against a magic-number
    /// table.
    ///
    /// # Panics
    ///
    /// Panics when `allowed` is empty: an allow-list that accepts nothing is
    /// a bug in the caller, not bad input.
    pub fn file_mime_type(
        &mut self,
        key: &str,
        file: &dyn Upload,
        allowed: &str,
        msg: Option<&str>,
    ) {
        assert!(
            !allowed.trim().is_empty(),
            "fieldcheck: the mime type allow-list cannot be empty",
        );

        if let Some(actual) = effective_content_type(file) {
            if allowed
                .split(',')
                .any(|candidate| candidate.trim().eq_ignore_ascii_case(&actual))
            {
                return;
            }
        }

        let m = msg
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| fill(&self.messages().file_mime_type, &[allowed.to_string()]));
        self.append(key, m);
    }

    /// Validates that the upload is a JPEG, PNG, or GIF image, optionally
    /// restricted to a comma-separated subset of those format names
    /// (e.g. `"jpeg, png"`); an empty `formats` accepts all three.
    ///
    /// Returns whether the upload passed, so callers can skip dependent
    /// checks.
    pub fn is_image(&mut self, key: &str, file: &dyn Upload, formats: &str, msg: Option<&str>) -> bool {
        if let Some(actual) = effective_content_type(file) {
            let accepted = if formats.trim().is_empty() {
                IMAGE_FORMATS.iter().any(|(_, mime_type)| *mime_type == actual)
            } else {
                formats
                    .split(',')
                    .filter_map(|name| format_mime(name.trim()))
                    .any(|mime_type| mime_type == actual)
            };
            if accepted {
                return true;
            }
        }

        let m = msg.map(ToOwned::to_owned).unwrap_or_else(|| {
            if formats.trim().is_empty() {
                self.messages().not_an_image.to_string()
            } else {
                fill(&self.messages().image_format, &[formats.to_string()])
            }
        });
        self.append(key, m);
        false
    }
}

// ============================================================================
// TESTS
// ============================================================================
