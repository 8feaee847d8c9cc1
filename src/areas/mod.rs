//! Command-line side of the codec
//!
//! - `loose`: zlib wrapping used by loose object files
//! - `toolkit`: output writer and workspace shared by the commands
//! - `workspace`: reading and writing frame files

pub mod loose;
pub mod toolkit;
pub mod workspace;
