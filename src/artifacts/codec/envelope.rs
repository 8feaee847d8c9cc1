//! The `<kind> <length>\0` header in front of every object body

use crate::artifacts::codec::error::{CodecError, CodecResult};
use crate::artifacts::codec::text;
use crate::artifacts::objects::object_type::ObjectKind;
use bytes::{BufMut, Bytes, BytesMut};

/// A frame split into its header fields and body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'f> {
    /// Kind name exactly as written; not checked against the known kinds
    pub kind_name: &'f str,
    pub length: usize,
    pub body: &'f [u8],
}

/// Prepend `<kind> <length>\0` to `body`
pub fn encode_envelope(kind: ObjectKind, body: &[u8]) -> Bytes {
    let header = format!("{} {}\0", kind.as_str(), body.len());

    let mut frame = BytesMut::with_capacity(header.len() + body.len());
    frame.put_slice(header.as_bytes());
    frame.put_slice(body);
    frame.freeze()
}

/// Split a frame into kind name, declared length and body
///
/// The body must be exactly as long as the header declares.
pub fn decode_envelope(frame: &[u8]) -> CodecResult<Envelope<'_>> {
    let (kind_name, rest) = text::split_once(frame, b' ')
        .ok_or_else(|| CodecError::frame("missing space after object kind"))?;
    let (length, body) = text::split_once(rest, 0)
        .ok_or_else(|| CodecError::frame("missing NUL after object length"))?;

    let kind_name = text::utf8(kind_name).ok_or_else(|| {
        CodecError::UnsupportedKind(String::from_utf8_lossy(kind_name).into_owned())
    })?;
    if length.len() > 1 && length[0] == b'0' {
        return Err(CodecError::frame(format!(
            "object length {:?} has leading zeros",
            String::from_utf8_lossy(length)
        )));
    }
    let length = text::parse_decimal(length).ok_or_else(|| {
        CodecError::frame(format!(
            "object length {:?} is not a non-negative decimal integer",
            String::from_utf8_lossy(length)
        ))
    })?;

    if body.len() != length {
        return Err(CodecError::LengthMismatch {
            declared: length,
            actual: body.len(),
        });
    }

    Ok(Envelope {
        kind_name,
        length,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn header_is_kind_space_decimal_length_nul() {
        let frame = encode_envelope(ObjectKind::Commit, b"0123456789ab");
        assert_eq!(frame, Bytes::from_static(b"commit 12\x000123456789ab"));
    }

    #[test]
    fn empty_body() {
        let frame = encode_envelope(ObjectKind::Tree, b"");
        assert_eq!(frame, Bytes::from_static(b"tree 0\0"));

        let envelope = decode_envelope(&frame).unwrap();
        assert_eq!(envelope.kind_name, "tree");
        assert_eq!(envelope.length, 0);
        assert!(envelope.body.is_empty());
    }

    #[test]
    fn body_may_contain_spaces_and_nul_bytes() {
        let body = b"a b\0c d\0";
        let frame = encode_envelope(ObjectKind::Blob, body);

        let envelope = decode_envelope(&frame).unwrap();
        assert_eq!(envelope.kind_name, "blob");
        assert_eq!(envelope.body, body);
    }

    #[test]
    fn unknown_kind_names_are_left_to_the_caller() {
        let envelope = decode_envelope(b"widget 2\0hi").unwrap();
        assert_eq!(envelope.kind_name, "widget");
    }

    #[rstest]
    #[case::no_space(b"blob".as_slice())]
    #[case::no_nul(b"blob 5hello".as_slice())]
    #[case::empty_length(b"blob \0".as_slice())]
    #[case::signed_length(b"blob +5\0hello".as_slice())]
    #[case::negative_length(b"blob -5\0hello".as_slice())]
    #[case::hex_length(b"blob 0x5\0hello".as_slice())]
    #[case::padded_length(b"blob 5 \0hello".as_slice())]
    #[case::nul_before_space(b"blob\x005 hello".as_slice())]
    #[case::zero_padded_length(b"blob 05\0hello".as_slice())]
    fn rejects_malformed_headers(#[case] frame: &[u8]) {
        assert!(matches!(
            decode_envelope(frame),
            Err(CodecError::FrameFormat(_))
        ));
    }

    #[test]
    fn non_utf8_kind_names_are_unsupported_kinds() {
        assert_eq!(
            decode_envelope(b"bl\xffb 2\0hi"),
            Err(CodecError::UnsupportedKind("bl\u{fffd}b".to_string()))
        );
    }

    #[rstest]
    #[case::too_short(b"blob 6\0hello".as_slice(), 6, 5)]
    #[case::too_long(b"blob 4\0hello".as_slice(), 4, 5)]
    #[case::trailing_bytes(b"blob 5\0hello\n".as_slice(), 5, 6)]
    fn rejects_length_mismatch(
        #[case] frame: &[u8],
        #[case] declared: usize,
        #[case] actual: usize,
    ) {
        assert_eq!(
            decode_envelope(frame),
            Err(CodecError::LengthMismatch { declared, actual })
        );
    }
}
