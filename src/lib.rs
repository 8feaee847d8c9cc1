//! Canonical byte encoding of git objects
//!
//! An object is framed as `<kind> <length>\0<body>`; the SHA-1 of the frame
//! is its identifier. [`frame`] encodes any of the four object kinds and
//! [`deframe`] turns a frame back into a typed object.
//!
//! ```
//! use bit_codec::{ObjectBox, deframe, frame};
//! use bit_codec::artifacts::objects::blob::Blob;
//! use bit_codec::artifacts::objects::object_id::ObjectId;
//!
//! let blob = ObjectBox::from(Blob::new("Hello World\n"));
//! let bytes = frame(&blob);
//!
//! assert_eq!(&bytes[..], b"blob 12\0Hello World\n");
//! assert_eq!(
//!     ObjectId::digest(&bytes).as_ref(),
//!     "557db03de997c86a4a028e1ebd3a1ceb225be238"
//! );
//! assert_eq!(deframe(&bytes, true).unwrap().object(), Some(&blob));
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::codec::{
    Body, CodecError, CodecResult, Deframed, Envelope, decode_envelope, deframe, encode_envelope,
    frame, frame_raw,
};
pub use artifacts::objects::object::ObjectBox;
pub use artifacts::objects::object_id::ObjectId;
pub use artifacts::objects::object_type::ObjectKind;
