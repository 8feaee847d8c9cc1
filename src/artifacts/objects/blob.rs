//! Git blob object
//!
//! Blobs store file content in Git. They contain only the raw file data,
//! without any metadata like filename or permissions (those are stored in trees).
//!
//! ## Format
//!
//! Framed: `blob <size>\0<content>`
//! Body: the content bytes, untouched. Any byte sequence is a valid blob,
//! including ones with embedded NUL bytes or invalid UTF-8.

use crate::artifacts::codec::error::CodecResult;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_type::ObjectKind;
use bytes::Bytes;
use derive_new::new;

/// Git blob object representing file content
///
/// Blobs are the fundamental unit of file storage in Git.
/// Each unique file content is stored as a blob, identified by its SHA-1 hash.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// File content as raw bytes
    #[new(into)]
    content: Bytes,
}

impl Blob {
    /// Get the file content
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        self.content.clone()
    }
}

impl Unpackable for Blob {
    fn deserialize(body: &[u8]) -> CodecResult<Self> {
        Ok(Self::new(Bytes::copy_from_slice(body)))
    }
}

impl Object for Blob {
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Blob
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
