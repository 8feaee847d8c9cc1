//! Git tree object
//!
//! Trees represent directory snapshots in Git. They contain entries for files (blobs),
//! subdirectories (other trees) and submodules, along with their names and modes.
//!
//! ## Format
//!
//! Framed: `tree <size>\0<entries>`
//! Each entry: `<octal-mode> <name>\0<20-byte-sha1>`
//!
//! ## Canonical order
//!
//! Entries are written sorted by the bytes of their name, where a tree entry
//! compares as if its name ended in `/`. A directory `a` therefore lands after
//! `a.txt` but before `ab`. The order is recomputed on every serialization,
//! so how a tree was built never changes its bytes.

use crate::artifacts::codec::error::{CodecError, CodecResult};
use crate::artifacts::codec::text;
use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectKind;
use bytes::Bytes;
use derive_new::new;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Mode and target of a single tree entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }
}

/// Git tree object representing a directory snapshot
///
/// Maps entry names to entries. Names are unique, must not be empty and
/// must not contain NUL or `/` bytes; that is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, TreeEntry>,
}

impl Tree {
    /// Add an entry, replacing any previous entry with the same name
    pub fn with_entry(mut self, name: impl Into<String>, entry: TreeEntry) -> Self {
        self.entries.insert(name.into(), entry);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they are serialized
    pub fn sorted_entries(&self) -> Vec<(&String, &TreeEntry)> {
        let mut entries = self.entries.iter().collect::<Vec<_>>();
        entries.sort_by(|(a_name, a), (b_name, b)| {
            canonical_cmp(a_name, a.mode, b_name, b.mode)
        });
        entries
    }
}

/// Compare two entries by name bytes, with tree names extended by `/`
pub fn canonical_cmp(
    a_name: &str,
    a_mode: EntryMode,
    b_name: &str,
    b_mode: EntryMode,
) -> Ordering {
    sort_key(a_name, a_mode).cmp(sort_key(b_name, b_mode))
}

fn sort_key(name: &str, mode: EntryMode) -> impl Iterator<Item = u8> + '_ {
    name.bytes().chain(mode.is_tree().then_some(b'/'))
}

impl FromIterator<(String, TreeEntry)> for Tree {
    fn from_iter<I: IntoIterator<Item = (String, TreeEntry)>>(iter: I) -> Self {
        Tree {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        let mut content = Vec::new();

        for (name, entry) in self.sorted_entries() {
            content.extend_from_slice(entry.mode.as_octal().as_bytes());
            content.push(b' ');
            content.extend_from_slice(name.as_bytes());
            content.push(0);
            content.extend_from_slice(&entry.oid.to_raw());
        }

        Bytes::from(content)
    }
}

impl Unpackable for Tree {
    fn deserialize(body: &[u8]) -> CodecResult<Self> {
        let mut entries = BTreeMap::new();
        let mut rest = body;

        while !rest.is_empty() {
            let offset = body.len() - rest.len();

            // "<mode> "
            let (mode, after_mode) = text::split_once(rest, b' ')
                .ok_or_else(|| CodecError::tree_entry(offset, "missing space after mode"))?;
            // Zero-padded modes such as `040000` are not canonical
            let mode = text::parse_octal(mode)
                .map(EntryMode::new)
                .filter(|parsed| parsed.as_octal().as_bytes() == mode)
                .ok_or_else(|| {
                    let mode = String::from_utf8_lossy(mode);
                    CodecError::tree_entry(offset, format!("mode {mode:?} is not canonical octal"))
                })?;

            // "<name>\0"
            let (name, after_name) = text::split_once(after_mode, 0)
                .ok_or_else(|| CodecError::tree_entry(offset, "missing NUL after name"))?;
            let name = text::utf8(name)
                .ok_or_else(|| CodecError::tree_entry(offset, "name is not valid UTF-8"))?;

            // 20 raw id bytes
            if after_name.len() < RAW_OBJECT_ID_LENGTH {
                return Err(CodecError::tree_entry(
                    offset,
                    format!(
                        "expected {RAW_OBJECT_ID_LENGTH} object id bytes, found {}",
                        after_name.len()
                    ),
                ));
            }
            let (raw, remaining) = after_name.split_at(RAW_OBJECT_ID_LENGTH);
            let raw: &[u8; RAW_OBJECT_ID_LENGTH] = raw
                .try_into()
                .map_err(|_| CodecError::tree_entry(offset, "truncated object id"))?;

            let entry = TreeEntry::new(mode, ObjectId::from_raw(raw));
            if entries.insert(name.to_owned(), entry).is_some() {
                return Err(CodecError::tree_entry(
                    offset,
                    format!("duplicate entry {name:?}"),
                ));
            }

            rest = remaining;
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Tree
    }

    /// One `ls-tree` style line per entry, in canonical order
    fn display(&self) -> String {
        self.sorted_entries()
            .into_iter()
            .map(|(name, entry)| {
                format!(
                    "{} {} {}\t{}",
                    entry.mode,
                    entry.mode.object_kind(),
                    entry.oid,
                    name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
