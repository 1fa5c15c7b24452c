//! Permissive charset decoding.
//!
//! Probed endpoints serve legacy, non-UTF-8 encodings, and the raw bytes
//! still need to be scanned for diagnostic text. Decoding is a priority
//! list: the server-declared encoding, UTF-8, the common Latin-script code
//! page, then the Arabic code pages. The first attempt that decodes without
//! errors wins; if none does, the bytes are decoded with replacement
//! characters. A decode therefore always "succeeds".

use encoding_rs::{Encoding, ISO_8859_6, UTF_8, WINDOWS_1252, WINDOWS_1256};

/// Decode `bytes` into readable text, trying encodings in priority order.
///
/// Returns the text and the name of the encoding that produced it.
#[must_use]
pub fn best_decode(bytes: &[u8], declared: Option<&str>) -> (String, &'static str) {
    let mut attempts: Vec<&'static Encoding> = Vec::with_capacity(5);
    if let Some(label) = declared {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            attempts.push(encoding);
        }
    }
    for encoding in [UTF_8, WINDOWS_1252, WINDOWS_1256, ISO_8859_6] {
        if !attempts.contains(&encoding) {
            attempts.push(encoding);
        }
    }

    for encoding in &attempts {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            return (text.into_owned(), encoding.name());
        }
    }

    // Nothing decoded cleanly; fall back to the first attempt with
    // replacement characters.
    let encoding = attempts[0];
    let (text, _, _) = encoding.decode(bytes);
    (text.into_owned(), encoding.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let (text, encoding) = best_decode("hello".as_bytes(), None);
        assert_eq!(text, "hello");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_declared_encoding_wins() {
        let original = "الاسم: محمد";
        let (bytes, _, had_errors) = WINDOWS_1256.encode(original);
        assert!(!had_errors);

        let (text, encoding) = best_decode(&bytes, Some("windows-1256"));
        assert_eq!(text, original);
        assert_eq!(encoding, "windows-1256");
    }

    #[test]
    fn test_unknown_declared_label_falls_through() {
        let (text, encoding) = best_decode("plain ascii".as_bytes(), Some("x-not-a-charset"));
        assert_eq!(text, "plain ascii");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_never_fails() {
        // Bytes that are invalid in every attempted encoding still decode
        // (0x81 is undefined in windows-1252 and unassigned in the Arabic
        // code pages' C1 range handling differs per page).
        let bytes = [0xFF, 0xFE, 0x81, 0x00];
        let (text, _) = best_decode(&bytes, None);
        assert!(!text.is_empty());
    }

    #[test]
    fn test_utf8_arabic_preferred_over_declared_latin() {
        let original = "محمد احمد";
        let (text, encoding) = best_decode(original.as_bytes(), Some("utf-8"));
        assert_eq!(text, original);
        assert_eq!(encoding, "UTF-8");
    }
}
