//! Raw path normalization.
//!
//! Transports hand over the path still percent-encoded. Decoding happens on
//! bytes first and the result is then read as UTF-8, so multi-byte
//! characters split across escapes (`%C3%A9`) come out whole.
//!
//! Decoding is total:
//! - malformed escapes (`%ZZ`, a trailing `%`) are kept literally
//! - invalid UTF-8 is replaced with U+FFFD
//! - `+` is left alone; it is not a space in paths

use std::borrow::Cow;

/// Percent-decode a raw path into normalized text.
///
/// # Example
///
/// ```
/// use pathwalk::path::decode_path;
///
/// assert_eq!(decode_path("/docs/caf%C3%A9/%2B%2Bview%2B%2Bedit"), "/docs/café/++view++edit");
/// ```
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(decode_path_bytes(raw.as_bytes()))
}

/// Percent-decode raw path bytes, as received off the wire.
pub fn decode_path_bytes(raw: &[u8]) -> String {
    let decoded = urlencoding::decode_binary(raw);
    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_borrowed() {
        let decoded = decode_path("/a/b/c");
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "/a/b/c");
    }

    #[test]
    fn test_utf8_escapes() {
        assert_eq!(decode_path("/caf%C3%A9"), "/café");
    }

    #[test]
    fn test_plus_is_not_space() {
        assert_eq!(decode_path("/++view++c%20d"), "/++view++c d");
    }

    #[test]
    fn test_malformed_escape_kept() {
        assert_eq!(decode_path("/a%ZZb/%"), "/a%ZZb/%");
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        assert_eq!(decode_path("/a%FFb"), "/a\u{FFFD}b");
    }

    #[test]
    fn test_raw_bytes() {
        assert_eq!(decode_path_bytes(b"/x/%40%40index"), "/x/@@index");
        assert_eq!(decode_path_bytes(&[b'/', 0xC3, 0xA9]), "/é");
    }
}
