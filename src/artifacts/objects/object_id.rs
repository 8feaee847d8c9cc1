//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 160-bit digests of an object's frame. They have two
//! equivalent forms and convert between them losslessly:
//!
//! - Hex: 40 lowercase hexadecimal characters, used in commit and tag headers
//! - Raw: 20 bytes, used inside tree entries

use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use sha1::{Digest, Sha1};

/// Git object identifier (SHA-1 hash)
///
/// Always holds 40 lowercase hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

/// Reasons an object ID string is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectIdError {
    #[error("Invalid object ID length: {0}")]
    Length(usize),
    #[error("Invalid object ID characters: {0}")]
    Characters(String),
    #[error("Object ID is not lowercase: {0}")]
    NotLowercase(String),
}

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Uppercase hex digits are accepted and normalised to lowercase, so the
    /// hex form written back out is always canonical.
    pub fn try_parse(id: impl AsRef<str>) -> Result<Self, ObjectIdError> {
        let id = id.as_ref();
        if id.len() != OBJECT_ID_LENGTH {
            return Err(ObjectIdError::Length(id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ObjectIdError::Characters(id.to_string()));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Parse an object ID as it appears inside an object body
    ///
    /// Only lowercase hex is accepted there, so the ID is written back
    /// byte for byte.
    pub fn try_parse_canonical(id: &str) -> Result<Self, ObjectIdError> {
        let oid = Self::try_parse(id)?;
        if oid.0 != id {
            return Err(ObjectIdError::NotLowercase(id.to_string()));
        }
        Ok(oid)
    }

    /// Build an object ID from its 20-byte raw form
    pub fn from_raw(raw: &[u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        let hex40 = raw.iter().fold(
            String::with_capacity(OBJECT_ID_LENGTH),
            |mut hex40, byte| {
                hex40.push_str(&format!("{byte:02x}"));
                hex40
            },
        );
        Self(hex40)
    }

    /// Convert to the 20-byte raw form
    pub fn to_raw(&self) -> [u8; RAW_OBJECT_ID_LENGTH] {
        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
        for (byte, pair) in raw.iter_mut().zip(self.0.as_bytes().chunks_exact(2)) {
            *byte = (nibble(pair[0]) << 4) | nibble(pair[1]);
        }
        raw
    }

    /// Hash a complete frame into its identifier
    ///
    /// This is the hashing collaborator: the codec never calls it, callers
    /// do once they hold frame bytes.
    pub fn digest(frame: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(frame);

        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
        raw.copy_from_slice(&hasher.finalize());
        Self::from_raw(&raw)
    }
}

// Only ever called on validated hex digits.
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => 0,
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
