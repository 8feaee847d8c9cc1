//! Whole-object framing: dispatch on kind, then envelope
//!
//! `frame` and `deframe` are pure functions of their input. They hold no
//! state, do no I/O, and may be called from any number of threads at once.

use crate::artifacts::codec::envelope::{self, decode_envelope};
use crate::artifacts::codec::error::CodecResult;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_type::ObjectKind;
use bytes::Bytes;

/// Body of a deframed object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Bytes after the header, not parsed
    Raw(Bytes),
    /// Fully decoded object
    Decoded(ObjectBox),
}

/// Result of [`deframe`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deframed {
    pub kind: ObjectKind,
    pub body: Body,
}

impl Deframed {
    /// The decoded object, if the body was decoded
    pub fn object(&self) -> Option<&ObjectBox> {
        match &self.body {
            Body::Decoded(object) => Some(object),
            Body::Raw(_) => None,
        }
    }

    pub fn into_object(self) -> Option<ObjectBox> {
        match self.body {
            Body::Decoded(object) => Some(object),
            Body::Raw(_) => None,
        }
    }
}

/// Encode an object into its canonical frame
pub fn frame(object: &ObjectBox) -> Bytes {
    object.frame()
}

/// Frame a body under a caller-supplied kind name
///
/// Fails when `kind_name` is not one of the four kinds. The body is framed
/// as given; use [`deframe`] on the result to check its structure.
pub fn frame_raw(kind_name: &str, body: &[u8]) -> CodecResult<Bytes> {
    let kind = ObjectKind::try_from(kind_name)?;
    Ok(envelope::encode_envelope(kind, body))
}

/// Split a frame and, when `decode_body` is set, decode its body
///
/// With `decode_body == false` only the header is checked: the kind must be
/// known and the length must match. That is all a caller needs before
/// hashing a frame it received.
pub fn deframe(bytes: &[u8], decode_body: bool) -> CodecResult<Deframed> {
    let envelope = decode_envelope(bytes)?;
    let kind = ObjectKind::try_from(envelope.kind_name)?;

    let body = if decode_body {
        Body::Decoded(ObjectBox::deserialize(kind, envelope.body)?)
    } else {
        Body::Raw(Bytes::copy_from_slice(envelope.body))
    };

    Ok(Deframed { kind, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::codec::error::CodecError;
    use crate::artifacts::objects::blob::Blob;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_path_skips_body_parsing() {
        // Not a valid tree body, but the fast path never looks.
        let frame = b"tree 3\0xyz";

        let deframed = deframe(frame, false).unwrap();
        assert_eq!(deframed.kind, ObjectKind::Tree);
        assert_eq!(deframed.body, Body::Raw(Bytes::from_static(b"xyz")));
        assert!(deframed.object().is_none());

        assert!(matches!(
            deframe(frame, true),
            Err(CodecError::TreeEntryFormat { .. })
        ));
    }

    #[test]
    fn unknown_kinds_fail_on_both_paths() {
        for decode_body in [false, true] {
            assert_eq!(
                deframe(b"widget 0\0", decode_body),
                Err(CodecError::UnsupportedKind("widget".to_string()))
            );
        }
    }

    #[test]
    fn frame_raw_checks_the_kind_name() {
        assert_eq!(
            frame_raw("blob", b"hi").unwrap(),
            Bytes::from_static(b"blob 2\0hi")
        );
        assert_eq!(
            frame_raw("Blob", b"hi"),
            Err(CodecError::UnsupportedKind("Blob".to_string()))
        );
    }

    #[test]
    fn decoded_body_matches_the_framed_object() {
        let object = ObjectBox::from(Blob::new("Hello World\n"));

        let deframed = deframe(&frame(&object), true).unwrap();
        assert_eq!(deframed.kind, ObjectKind::Blob);
        assert_eq!(deframed.into_object(), Some(object));
    }

    #[test]
    fn codec_types_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Deframed>();
        assert_send_sync::<ObjectBox>();
        assert_send_sync::<CodecError>();
    }
}
