//! Error types for framing and parsing objects

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Everything that can go wrong while framing or deframing an object
///
/// Every error is terminal for the call that raised it: a frame is either
/// decoded completely or rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Envelope separators missing or the length is not a decimal integer
    #[error("Invalid object frame: {0}")]
    FrameFormat(String),

    /// Declared body length differs from the bytes that follow the header
    #[error("Object length mismatch: header declares {declared} bytes, body has {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// Kind name is not one of blob, tree, commit, tag
    #[error("Unsupported object kind: {0:?}")]
    UnsupportedKind(String),

    /// Malformed tree entry
    #[error("Invalid tree entry at offset {offset}: {reason}")]
    TreeEntryFormat { offset: usize, reason: String },

    /// Malformed `name <email> seconds offset` line
    #[error("Invalid person line {line:?}: {reason}")]
    PersonDateFormat { line: String, reason: String },

    /// Missing or malformed commit header
    #[error("Invalid commit object: {field}: {reason}")]
    CommitHeader { field: String, reason: String },

    /// Missing or malformed tag header
    #[error("Invalid tag object: {field}: {reason}")]
    TagHeader { field: String, reason: String },
}

impl CodecError {
    pub(crate) fn frame(reason: impl Into<String>) -> Self {
        CodecError::FrameFormat(reason.into())
    }

    pub(crate) fn tree_entry(offset: usize, reason: impl Into<String>) -> Self {
        CodecError::TreeEntryFormat {
            offset,
            reason: reason.into(),
        }
    }

    pub(crate) fn person(line: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::PersonDateFormat {
            line: line.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn commit(field: impl Into<String>, reason: impl ToString) -> Self {
        CodecError::CommitHeader {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn tag(field: impl Into<String>, reason: impl ToString) -> Self {
        CodecError::TagHeader {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}
