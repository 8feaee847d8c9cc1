//! Git object types and operations
//!
//! Git stores all content as objects identified by SHA-1 hashes. There are four main types:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (names, modes, and object IDs)
//! - **Commit**: Snapshot with metadata (author, message, parent commits, tree)
//! - **Tag**: Annotated reference to another object
//!
//! Each type serializes to a body; the codec wraps bodies in the frame
//! `<type> <size>\0<content>` whose hash is the object's ID.

pub mod blob;
pub mod commit;
pub mod entry_mode;
mod headers;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod person;
pub mod tag;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
