//! Tree entry modes
//!
//! Modes are opaque integers to the codec: any value is written as octal
//! and read back unchanged. The known constants and the `is_tree`
//! predicate exist for callers and for the canonical tree sort.

use crate::artifacts::codec::text;
use crate::artifacts::objects::object_type::ObjectKind;

const TYPE_MASK: u32 = 0o170000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryMode(u32);

impl EntryMode {
    pub const FILE: EntryMode = EntryMode(0o100644);
    pub const EXECUTABLE: EntryMode = EntryMode(0o100755);
    pub const SYMLINK: EntryMode = EntryMode(0o120000);
    pub const TREE: EntryMode = EntryMode(0o40000);
    pub const GITLINK: EntryMode = EntryMode(0o160000);

    pub const fn new(mode: u32) -> Self {
        EntryMode(mode)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Directory-like modes sort as if their name ended with `/`
    pub const fn is_tree(&self) -> bool {
        self.0 & TYPE_MASK == Self::TREE.0
    }

    /// Kind of object an entry with this mode points at
    pub fn object_kind(&self) -> ObjectKind {
        match self.0 & TYPE_MASK {
            0o040000 => ObjectKind::Tree,
            0o160000 => ObjectKind::Commit,
            _ => ObjectKind::Blob,
        }
    }

    /// Parse the octal ASCII form used in tree entries (`100644`, `40000`)
    pub fn from_octal_str(mode: &str) -> Option<Self> {
        text::parse_octal(mode.as_bytes()).map(EntryMode)
    }

    /// Octal form without a leading zero, as written into tree objects
    pub fn as_octal(&self) -> String {
        format!("{:o}", self.0)
    }
}

impl From<u32> for EntryMode {
    fn from(mode: u32) -> Self {
        EntryMode(mode)
    }
}

impl From<EntryMode> for u32 {
    fn from(mode: EntryMode) -> Self {
        mode.0
    }
}

/// Zero-padded to six digits, the way `ls-tree` prints modes
impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06o}", self.0)
    }
}
