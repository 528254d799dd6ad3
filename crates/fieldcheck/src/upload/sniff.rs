//! Content sniffing for uploads without a usable declared type.

/// Leading bytes to read for a sniff. 512 covers every signature below with
/// plenty to spare.
pub(crate) const SNIFF_LEN: usize = 512;

// Magic-number table: signature prefix → mime type. Raster image formats
// first; a couple of common document/archive types so the mime check stays
// useful for non-image uploads.
const MAGIC_TABLE: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (&[0xFF, 0xD8, 0xFF], "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"%PDF-", "application/pdf"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1f\x8b", "application/gzip"),
];

/// The mime type matching the leading bytes, if any signature does.
pub(crate) fn sniff(head: &[u8]) -> Option<&'static str> {
    MAGIC_TABLE
        .iter()
        .find(|(signature, _)| head.starts_with(signature))
        .map(|(_, mime_type)| *mime_type)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_image_formats() {
        assert_eq!(sniff(b"\x89PNG\r\n\x1a\n rest"), Some("image/png"));
        assert_eq!(sniff(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), Some("image/jpeg"));
        assert_eq!(sniff(b"GIF89a...."), Some("image/gif"));
        assert_eq!(sniff(b"GIF87a...."), Some("image/gif"));
    }

    #[test]
    fn recognizes_common_documents() {
        assert_eq!(sniff(b"%PDF-1.7"), Some("application/pdf"));
        assert_eq!(sniff(b"PK\x03\x04zipzip"), Some("application/zip"));
    }

    #[test]
    fn unknown_bytes() {
        assert_eq!(sniff(b"hello world"), None);
        assert_eq!(sniff(b""), None);
        // A truncated signature is not a match.
        assert_eq!(sniff(b"\x89PN"), None);
    }
}
