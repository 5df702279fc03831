//! Character encoding detection and transcoding.
//!
//! Thesis corpora predate UTF-8 in places; documents commonly declare
//! windows-1250 or ISO-8859-2 in the XML declaration. This module detects the
//! charset from that declaration and converts to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match the encoding pseudo-attribute of an XML declaration,
/// `<?xml version="1.0" encoding="..."?>`.
#[allow(clippy::expect_used)]
static XML_DECL_ENCODING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<\?xml[^?>]*\bencoding\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

/// Detect character encoding from document bytes.
///
/// Looks for an `encoding` pseudo-attribute in the XML declaration and falls
/// back to UTF-8 when none is present or the label is unknown. Only examines
/// the first 1024 bytes; a declaration, if any, sits at the very top.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let head = &bytes[..bytes.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(label) = extract_declared_encoding(&head_str) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

/// Extract the declared encoding label from an XML declaration.
fn extract_declared_encoding(head: &str) -> Option<String> {
    XML_DECL_ENCODING_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode document bytes to a UTF-8 string.
///
/// Detects the encoding and converts to UTF-8, using lossy conversion to
/// handle invalid characters gracefully (replacing them with �).
///
/// # Examples
///
/// ```
/// use rs_doczones::encoding::transcode_to_utf8;
///
/// let xml = b"<?xml version=\"1.0\"?>\n<p xml:id=\"1.1\">Uvod</p>";
/// let utf8 = transcode_to_utf8(xml);
/// assert!(utf8.contains("Uvod"));
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);

    if encoding == UTF_8 {
        // Fast path for UTF-8: just do lossy conversion
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_utf8_from_declaration() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?><TEI></TEI>"#;
        assert_eq!(detect_encoding(xml), UTF_8);
    }

    #[test]
    fn detect_windows1250_from_declaration() {
        let xml = br#"<?xml version="1.0" encoding="windows-1250"?><TEI></TEI>"#;
        assert_eq!(detect_encoding(xml).name(), "windows-1250");
    }

    #[test]
    fn detect_iso88592_from_declaration() {
        let xml = br#"<?xml version="1.0" encoding="ISO-8859-2"?><TEI></TEI>"#;
        assert_eq!(detect_encoding(xml).name(), "ISO-8859-2");
    }

    #[test]
    fn default_to_utf8_without_declaration() {
        let xml = b"<TEI><p xml:id=\"1.1\">Uvod</p></TEI>";
        assert_eq!(detect_encoding(xml), UTF_8);
    }

    #[test]
    fn default_to_utf8_for_unknown_label() {
        let xml = br#"<?xml version="1.0" encoding="no-such-charset"?>"#;
        assert_eq!(detect_encoding(xml), UTF_8);
    }

    #[test]
    fn declaration_detection_is_case_insensitive() {
        let xml = br#"<?XML VERSION="1.0" ENCODING="utf-8"?>"#;
        assert_eq!(detect_encoding(xml), UTF_8);
    }

    #[test]
    fn transcode_utf8_passthrough() {
        let xml = "<?xml version=\"1.0\"?><p xml:id=\"1.1\">Čašča</p>".as_bytes();
        let result = transcode_to_utf8(xml);
        assert!(result.contains("Čašča"));
    }

    #[test]
    fn transcode_windows1250_to_utf8() {
        // windows-1250: š = 0x9A, č = 0xE8
        let mut xml = br#"<?xml version="1.0" encoding="windows-1250"?><p xml:id="1.1">"#.to_vec();
        xml.extend_from_slice(&[0x9A, 0xE8]);
        xml.extend_from_slice(b"</p>");
        let result = transcode_to_utf8(&xml);
        assert!(result.contains("šč"));
    }

    #[test]
    fn handle_invalid_bytes_gracefully() {
        let xml = b"<p xml:id=\"1.1\">Test \xFF\xFE Invalid</p>";
        let result = transcode_to_utf8(xml);
        assert!(result.contains("Test"));
        assert!(result.contains("Invalid"));
    }
}
