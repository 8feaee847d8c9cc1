//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - Parent commit ID(s) (for history)
//! - Author and committer information
//! - Any further headers, kept verbatim (`encoding`, `gpgsig`, ...)
//! - Commit message
//!
//! ## Format
//!
//! Body:
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//! <key> <value>
//!
//! <commit message>
//! ```

use crate::artifacts::codec::error::{CodecError, CodecResult};
use crate::artifacts::codec::text;
use crate::artifacts::objects::headers::{split_headers, write_header};
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectKind;
use crate::artifacts::objects::person::PersonDate;
use bytes::Bytes;

/// Git commit object
///
/// Represents a snapshot of the repository with metadata.
/// Contains references to:
/// - The tree representing the state of files
/// - Parent commit(s) for history
/// - Author and committer information
/// - Commit message
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for initial commit, multiple for merge commits)
    parents: Vec<ObjectId>,
    /// Tree object ID representing the directory snapshot
    tree_oid: ObjectId,
    /// Author who wrote the changes
    author: PersonDate,
    /// Committer who recorded the commit
    committer: PersonDate,
    /// Headers the codec does not interpret, in order
    extra_headers: Vec<(String, String)>,
    /// Commit message
    message: String,
}

impl Commit {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `parents` - Parent commit IDs (empty for initial commit)
    /// * `tree_oid` - Tree object representing the snapshot
    /// * `author` - Author (also used as committer)
    /// * `message` - Commit message
    pub fn new(
        parents: Vec<ObjectId>,
        tree_oid: ObjectId,
        author: PersonDate,
        message: impl Into<String>,
    ) -> Self {
        Commit {
            parents,
            tree_oid,
            committer: author.clone(),
            author,
            extra_headers: Vec::new(),
            message: message.into(),
        }
    }

    /// Record a committer different from the author
    pub fn with_committer(mut self, committer: PersonDate) -> Self {
        self.committer = committer;
        self
    }

    /// Append a header written after the committer line
    pub fn with_extra_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((key.into(), value.into()));
        self
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the tree object ID
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn author(&self) -> &PersonDate {
        &self.author
    }

    pub fn committer(&self) -> &PersonDate {
        &self.committer
    }

    pub fn extra_headers(&self) -> &[(String, String)] {
        &self.extra_headers
    }

    fn to_text(&self) -> String {
        let mut content = String::new();

        write_header(&mut content, "tree", self.tree_oid.as_ref());
        for parent in &self.parents {
            write_header(&mut content, "parent", parent.as_ref());
        }
        write_header(&mut content, "author", &self.author.encode());
        write_header(&mut content, "committer", &self.committer.encode());
        for (key, value) in &self.extra_headers {
            write_header(&mut content, key, value);
        }
        content.push('\n');
        content.push_str(&self.message);

        content
    }
}

fn parse_oid(field: &str, value: &str) -> CodecResult<ObjectId> {
    ObjectId::try_parse_canonical(value).map_err(|e| CodecError::commit(field, e))
}

fn parse_person(field: &str, value: &str) -> CodecResult<PersonDate> {
    if value.contains('\n') {
        return Err(CodecError::commit(field, "unexpected continuation line"));
    }
    PersonDate::decode(value).map_err(|e| CodecError::commit(field, e))
}

fn set_once<T>(slot: &mut Option<T>, field: &str, value: T) -> CodecResult<()> {
    if slot.replace(value).is_some() {
        return Err(CodecError::commit(field, "header appears more than once"));
    }
    Ok(())
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        Bytes::from(self.to_text())
    }
}

impl Unpackable for Commit {
    fn deserialize(body: &[u8]) -> CodecResult<Self> {
        let body = text::utf8(body).ok_or_else(|| CodecError::commit("body", "not valid UTF-8"))?;
        let (headers, message) = split_headers(body).map_err(|e| CodecError::commit("headers", e))?;

        let mut tree_oid = None;
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;
        let mut extra_headers = Vec::new();

        for (key, value) in headers {
            match key.as_str() {
                "tree" => set_once(&mut tree_oid, "tree", parse_oid("tree", &value)?)?,
                "parent" => parents.push(parse_oid("parent", &value)?),
                "author" => set_once(&mut author, "author", parse_person("author", &value)?)?,
                "committer" => set_once(
                    &mut committer,
                    "committer",
                    parse_person("committer", &value)?,
                )?,
                _ => extra_headers.push((key, value)),
            }
        }

        let tree_oid = tree_oid.ok_or_else(|| CodecError::commit("tree", "missing"))?;
        let author = author.ok_or_else(|| CodecError::commit("author", "missing"))?;
        let committer = committer.unwrap_or_else(|| author.clone());

        Ok(Commit {
            parents,
            tree_oid,
            author,
            committer,
            extra_headers,
            message: message.to_string(),
        })
    }
}

impl Object for Commit {
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Commit
    }

    fn display(&self) -> String {
        self.to_text()
    }
}
