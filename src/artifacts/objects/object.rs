use crate::artifacts::codec::envelope;
use crate::artifacts::codec::error::CodecResult;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectKind;
use crate::artifacts::objects::tag::Tag;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;

/// Encode an object's body (everything after the frame header)
pub trait Packable {
    fn serialize(&self) -> Bytes;
}

/// Decode an object's body (everything after the frame header)
pub trait Unpackable {
    fn deserialize(body: &[u8]) -> CodecResult<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_kind(&self) -> ObjectKind;

    fn display(&self) -> String;

    /// Body wrapped in its `<kind> <size>\0` header
    fn frame(&self) -> Bytes {
        envelope::encode_envelope(self.object_kind(), &self.serialize())
    }

    fn object_id(&self) -> ObjectId {
        ObjectId::digest(&self.frame())
    }
}

/// Any of the four object kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
    Tag(Box<Tag>),
}

impl ObjectBox {
    /// Decode a body with the decoder matching `kind`
    pub fn deserialize(kind: ObjectKind, body: &[u8]) -> CodecResult<Self> {
        Ok(match kind {
            ObjectKind::Blob => ObjectBox::Blob(Box::new(Blob::deserialize(body)?)),
            ObjectKind::Tree => ObjectBox::Tree(Box::new(Tree::deserialize(body)?)),
            ObjectKind::Commit => ObjectBox::Commit(Box::new(Commit::deserialize(body)?)),
            ObjectKind::Tag => ObjectBox::Tag(Box::new(Tag::deserialize(body)?)),
        })
    }

    fn inner(&self) -> &dyn Object {
        match self {
            ObjectBox::Blob(blob) => blob.as_ref(),
            ObjectBox::Tree(tree) => tree.as_ref(),
            ObjectBox::Commit(commit) => commit.as_ref(),
            ObjectBox::Tag(tag) => tag.as_ref(),
        }
    }
}

impl Packable for ObjectBox {
    fn serialize(&self) -> Bytes {
        self.inner().serialize()
    }
}

impl Object for ObjectBox {
    fn object_kind(&self) -> ObjectKind {
        self.inner().object_kind()
    }

    fn display(&self) -> String {
        self.inner().display()
    }
}

impl From<Blob> for ObjectBox {
    fn from(blob: Blob) -> Self {
        ObjectBox::Blob(Box::new(blob))
    }
}

impl From<Tree> for ObjectBox {
    fn from(tree: Tree) -> Self {
        ObjectBox::Tree(Box::new(tree))
    }
}

impl From<Commit> for ObjectBox {
    fn from(commit: Commit) -> Self {
        ObjectBox::Commit(Box::new(commit))
    }
}

impl From<Tag> for ObjectBox {
    fn from(tag: Tag) -> Self {
        ObjectBox::Tag(Box::new(tag))
    }
}
