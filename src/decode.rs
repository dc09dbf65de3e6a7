//! Byte-to-text conversion for subprocess output and repository files.

use encoding_rs::{EUC_KR, Encoding, UTF_8};

/// Encodings tried strictly, in order. EUC-KR covers CP949-encoded
/// repositories that predate a UTF-8 migration.
const DECODE_ORDER: &[&Encoding] = &[UTF_8, EUC_KR];

/// Decode raw bytes into text without ever failing.
///
/// Tries each encoding in [`DECODE_ORDER`] strictly and returns the first
/// successful decode. If none succeeds, falls back to a lossy UTF-8 decode
/// that substitutes U+FFFD for invalid sequences, so the pipeline never
/// aborts on unexpected repository content.
pub fn decode_bytes(bytes: &[u8]) -> String {
    for encoding in DECODE_ORDER {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            return text.into_owned();
        }
    }

    UTF_8.decode(bytes).0.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        assert_eq!(decode_bytes("diff --git a/x b/x\n".as_bytes()), "diff --git a/x b/x\n");
        assert_eq!(decode_bytes("한글 메시지".as_bytes()), "한글 메시지");
    }

    #[test]
    fn empty_input_decodes_to_empty_string() {
        assert_eq!(decode_bytes(&[]), "");
    }

    #[test]
    fn euc_kr_is_tried_when_utf8_fails() {
        // "한글" in EUC-KR; the byte pairs are invalid UTF-8.
        let bytes = [0xC7, 0xD1, 0xB1, 0xDB];
        assert_eq!(decode_bytes(&bytes), "한글");
    }

    #[test]
    fn bytes_invalid_in_every_encoding_use_replacement() {
        // 0xFF is not a valid lead byte in UTF-8 or EUC-KR.
        let decoded = decode_bytes(&[0xFF, 0xFF, 0xFF]);
        assert!(!decoded.is_empty());
        assert!(decoded.chars().all(|c| c == '\u{FFFD}'));
    }

    #[test]
    fn mixed_valid_and_invalid_bytes_never_panic() {
        let mut bytes = b"hello ".to_vec();
        bytes.extend([0x80, 0xFF]);
        let decoded = decode_bytes(&bytes);
        assert!(decoded.starts_with("hello "));
    }
}
