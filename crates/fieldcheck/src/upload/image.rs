//! Image dimension check.

use std::io::BufReader;

use image::ImageReader;

use super::{Upload, UploadError};
use crate::core::messages::fill;
use crate::core::Validator;

/// Width and height of an image in pixels, as a bound for
/// [`Validator::image_dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimension {
    pub width: u32,
    pub height: u32,
}

impl ImageDimension {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

// Decodes just the header; pixel data is never touched.
fn dimensions(file: &dyn Upload) -> Result<(u32, u32), UploadError> {
    let stream = file.open().map_err(UploadError::Open)?;
    let reader = ImageReader::new(BufReader::new(stream))
        .with_guessed_format()
        .map_err(UploadError::Read)?;
    reader.into_dimensions().map_err(UploadError::ImageHeader)
}

impl Validator {
    /// Validates the image's width and height in pixels against a minimum
    /// and/or maximum dimension. A bound of `None` is unbounded on that
    /// side.
    ///
    /// A non-image upload fails with the not-an-image message rather than a
    /// dimension comparison; an image whose header cannot be decoded fails
    /// with its own message.
    ///
    /// # Panics
    ///
    /// Panics when both bounds are `None`: a dimension check with nothing to
    /// check is a bug in the caller, not bad input.
    pub fn image_dimensions(
        &mut self,
        key: &str,
        file: &dyn Upload,
        min: Option<ImageDimension>,
        max: Option<ImageDimension>,
        msg: Option<&str>,
    ) {
        assert!(
            min.is_some() || max.is_some(),
            "fieldcheck: a minimum or maximum image dimension must be given",
        );

        if !self.is_image(key, file, "", None) {
            return;
        }

        let (width, height) = match dimensions(file) {
            Ok(d) => d,
            Err(err) => {
                tracing::debug!(error = %err, field = key, "image header decode failed");
                let m = self.messages().image_unreadable.to_string();
                self.append(key, m);
                return;
            }
        };

        let too_small = min.is_some_and(|d| width < d.width || height < d.height);
        let too_big = max.is_some_and(|d| width > d.width || height > d.height);
        if !too_small && !too_big {
            return;
        }

        if let Some(m) = msg {
            self.append(key, m);
            return;
        }

        let m = match (min, max) {
            (Some(lo), Some(hi)) if too_small && too_big => fill(
                &self.messages().image_dimension,
                &[
                    lo.width.to_string(),
                    lo.height.to_string(),
                    hi.width.to_string(),
                    hi.height.to_string(),
                ],
            ),
            (Some(lo), _) if too_small => fill(
                &self.messages().image_min_dimension,
                &[lo.width.to_string(), lo.height.to_string()],
            ),
            (_, Some(hi)) => fill(
                &self.messages().image_max_dimension,
                &[hi.width.to_string(), hi.height.to_string()],
            ),
            // too_small/too_big imply the matching bound exists.
            _ => unreachable!(),
        };
        self.append(key, m);
    }
}

// ============================================================================
// TESTS
// ============================================================================
