//! Git object data structures and their byte encoding
//!
//! - `objects`: Git object types (blob, tree, commit, tag) and their parts
//! - `codec`: Framing, deframing and the errors both can raise

pub mod codec;
pub mod objects;
