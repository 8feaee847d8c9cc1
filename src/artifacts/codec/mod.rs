//! Canonical object framing
//!
//! - `text`: binary-safe scanning and checked number parsing
//! - `envelope`: the `<kind> <length>\0` header
//! - `frame`: `frame` / `deframe` over all four object kinds
//! - `error`: the error taxonomy shared by every decoder

pub mod envelope;
pub mod error;
pub mod frame;
pub mod text;

pub use envelope::{Envelope, decode_envelope, encode_envelope};
pub use error::{CodecError, CodecResult};
pub use frame::{Body, Deframed, deframe, frame, frame_raw};
