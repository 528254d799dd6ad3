//! File size check.

use super::Upload;
use crate::core::messages::fill;
use crate::core::Validator;

// Bounds are reported in whole-ish kilobytes, rounded up.
fn kilobytes(bytes: i64) -> String {
    format!("{:.1}", (bytes as f64 / 1024.0).ceil())
}

impl Validator {
    /// Validates the upload's size in bytes against a minimum and/or
    /// maximum. A negative bound is disabled; disabling both makes the
    /// check a no-op.
    ///
    /// # Panics
    ///
    /// Panics when both bounds are zero: a size window of exactly nothing is
    /// a bug in the caller, not bad input.
    pub fn file_size(
        &mut self,
        key: &str,
        file: &dyn Upload,
        min_bytes: i64,
        max_bytes: i64,
        msg: Option<&str>,
    ) {
        assert!(
            !(min_bytes == 0 && max_bytes == 0),
            "fieldcheck: a minimum or maximum file size in bytes must be given",
        );
        if min_bytes < 0 && max_bytes < 0 {
            return;
        }

        let size = file.size() as i64;
        let too_small = min_bytes >= 0 && size < min_bytes;
        let too_big = max_bytes >= 0 && size > max_bytes;
        if !too_small && !too_big {
            return;
        }

        if let Some(m) = msg {
            self.append(key, m);
            return;
        }

        let m = if too_small && too_big {
            fill(
                &self.messages().file_size,
                &[kilobytes(min_bytes), kilobytes(max_bytes)],
            )
        } else if too_small {
            fill(&self.messages().file_min_size, &[kilobytes(min_bytes)])
        } else {
            fill(&self.messages().file_max_size, &[kilobytes(max_bytes)])
        };
        self.append(key, m);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::MemoryUpload;
    use super::*;

    fn upload_of(len: usize) -> MemoryUpload {
        MemoryUpload::new("f", vec![0_u8; len])
    }

    #[test]
    fn within_bounds() {
        let mut v = Validator::new();
        v.file_size("f", &upload_of(2048), 1024, 4096, None);
        v.file_size("f", &upload_of(1024), 1024, 4096, None); // inclusive
        v.file_size("f", &upload_of(4096), 1024, 4096, None);
        assert!(!v.has_errors());
    }

    #[test]
    fn too_small() {
        let mut v = Validator::new();
        v.file_size("f", &upload_of(100), 2048, -1, None);
        assert_eq!(v.to_string(), "f: file size cannot be less than '2.0'KB.\n");
    }

    #[test]
    fn too_big() {
        let mut v = Validator::new();
        v.file_size("f", &upload_of(5000), -1, 2048, None);
        assert_eq!(v.to_string(), "f: file size cannot be larger than '2.0'KB.\n");
    }

    #[test]
    fn kilobytes_round_up() {
        // 100 bytes is "1KB" for bound-reporting purposes.
        let mut v = Validator::new();
        v.file_size("f", &upload_of(0), 100, -1, None);
        assert_eq!(v.to_string(), "f: file size cannot be less than '1.0'KB.\n");
    }

    #[test]
    fn disabled_bounds_are_a_noop() {
        let mut v = Validator::new();
        v.file_size("f", &upload_of(123), -1, -1, None);
        assert!(!v.has_errors());
    }

    #[test]
    #[should_panic(expected = "file size in bytes must be given")]
    fn zero_bounds_are_a_contract_error() {
        Validator::new().file_size("f", &upload_of(1), 0, 0, None);
    }

    #[test]
    fn override_message() {
        let mut v = Validator::new();
        v.file_size("f", &upload_of(1), 1024, -1, Some("too small to be a real photo"));
        assert_eq!(v.to_string(), "f: too small to be a real photo.\n");
    }
}
