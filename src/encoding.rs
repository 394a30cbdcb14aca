//! Byte-level ingress: encoding detection, transcoding, and BOM stripping.
//!
//! The ingestion core operates on decoded UTF-8 text; this module is the
//! upstream step that turns uploaded bytes into that text. It never fails:
//! undecodable byte sequences are replaced rather than rejected.

use chardetng::EncodingDetector;
use std::borrow::Cow;

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    simdutf8::basic::from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (byte sequence EF BB BF).
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.len() >= 3 && data[0] == 0xEF && data[1] == 0xBB && data[2] == 0xBF
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// What happened while decoding the input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingInfo {
    /// Whether the bytes had to be transcoded (were not already UTF-8).
    pub was_transcoded: bool,
    /// Whether a BOM was present and stripped.
    pub had_bom: bool,
}

/// Decode raw bytes to UTF-8 text with BOM handling.
///
/// Valid UTF-8 is borrowed zero-copy (minus a leading BOM). UTF-16 LE/BE is
/// recognized by its BOM. Anything else goes through chardetng detection
/// and `encoding_rs` transcoding, covering Windows-125x, ISO-8859 variants,
/// GBK, and the other legacy encodings it supports; invalid sequences are
/// replaced, so decoding always succeeds.
pub fn decode(data: &[u8]) -> (Cow<'_, str>, EncodingInfo) {
    // UTF-16 BOMs first; chardetng does not handle these well
    if data.len() >= 2 {
        if data[0] == 0xFF && data[1] == 0xFE {
            let (text, _, _) = encoding_rs::UTF_16LE.decode(data);
            return (
                Cow::Owned(text.into_owned()),
                EncodingInfo {
                    was_transcoded: true,
                    had_bom: true,
                },
            );
        }
        if data[0] == 0xFE && data[1] == 0xFF {
            let (text, _, _) = encoding_rs::UTF_16BE.decode(data);
            return (
                Cow::Owned(text.into_owned()),
                EncodingInfo {
                    was_transcoded: true,
                    had_bom: true,
                },
            );
        }
    }

    let had_bom = has_utf8_bom(data);
    let body = skip_bom(data);

    if let Ok(text) = simdutf8::basic::from_utf8(body) {
        return (
            Cow::Borrowed(text),
            EncodingInfo {
                was_transcoded: false,
                had_bom,
            },
        );
    }

    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);

    // Detected as UTF-8 despite failing validation: salvage with replacement
    if encoding == encoding_rs::UTF_8 {
        return (
            Cow::Owned(String::from_utf8_lossy(body).into_owned()),
            EncodingInfo {
                was_transcoded: true,
                had_bom,
            },
        );
    }

    let (text, _, _) = encoding.decode(body);
    (
        Cow::Owned(text.into_owned()),
        EncodingInfo {
            was_transcoded: true,
            had_bom,
        },
    )
}
