use std::borrow::Cow;
use std::collections::HashMap;

use bytes::Bytes;

/// Response captured from the trigger endpoint.
///
/// The body stays raw bytes so a declared `application/x-gzip` payload
/// round-trips unmangled; use [`text`](Self::text) for display.
#[derive(Debug, Clone)]
pub struct TriggerResponse {
    /// HTTP status code. Not validated; any status is a result.
    pub status: u16,

    /// Response headers, lowercased names.
    pub headers: HashMap<String, String>,

    /// Declared `Content-Type`, if any.
    pub content_type: Option<String>,

    /// Body length in bytes. Reflects the decompressed size when the body
    /// was sniffed and inflated.
    pub content_length: u64,

    /// Filename captured from a `filename=` parameter in the response
    /// headers, if present.
    pub content_filename: Option<String>,

    /// Whether the body was transparently decompressed.
    pub decompressed: bool,

    /// Response body, decompressed if applicable.
    pub body: Bytes,
}

impl TriggerResponse {
    /// The body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Extract the value of a `filename=` parameter from a header value.
///
/// Takes everything after the first `filename=` marker, with surrounding
/// quotes stripped.
#[must_use]
pub fn parse_filename(header: &str) -> Option<String> {
    let lower = header.to_ascii_lowercase();
    let pos = lower.find("filename=")?;
    let raw = header[pos + "filename=".len()..].trim();
    Some(raw.trim_matches('"').to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_lossy() {
        let response = TriggerResponse {
            status: 200,
            headers: HashMap::new(),
            content_type: None,
            content_length: 4,
            content_filename: None,
            decompressed: false,
            body: Bytes::from_static(&[b'o', b'k', 0xff, b'!']),
        };
        assert_eq!(response.text(), "ok\u{fffd}!");
    }

    #[test]
    fn parse_filename_plain() {
        assert_eq!(
            parse_filename("attachment; filename=report.json").as_deref(),
            Some("report.json")
        );
    }

    #[test]
    fn parse_filename_quoted() {
        assert_eq!(
            parse_filename(r#"attachment; filename="event log.txt""#).as_deref(),
            Some("event log.txt")
        );
    }

    #[test]
    fn parse_filename_absent() {
        assert_eq!(parse_filename("inline"), None);
    }
}
