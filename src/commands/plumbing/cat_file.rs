use crate::areas::toolkit::Toolkit;
use crate::artifacts::codec::{decode_envelope, deframe};
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_type::ObjectKind;
use anyhow::Context;

/// What `cat-file` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// The object kind
    Kind,
    /// The body length in bytes
    Size,
    /// The decoded object
    Pretty,
}

impl Toolkit {
    pub fn cat_file(&self, file_path: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let frame = self.workspace().read_frame(file_path.as_ref())?;

        match mode {
            CatFileMode::Kind => {
                let deframed = deframe(&frame, false)?;
                writeln!(self.writer(), "{}", deframed.kind)?;
            }
            CatFileMode::Size => {
                let envelope = decode_envelope(&frame)?;
                ObjectKind::try_from(envelope.kind_name)?;
                writeln!(self.writer(), "{}", envelope.length)?;
            }
            CatFileMode::Pretty => {
                let object = deframe(&frame, true)?
                    .into_object()
                    .context("object body was not decoded")?;
                tracing::debug!(kind = %object.object_kind(), "decoded object");

                match &object {
                    ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
                    ObjectBox::Tree(tree) if tree.is_empty() => {}
                    ObjectBox::Tree(tree) => writeln!(self.writer(), "{}", tree.display())?,
                    ObjectBox::Commit(_) | ObjectBox::Tag(_) => {
                        write!(self.writer(), "{}", object.display())?
                    }
                }
            }
        }

        Ok(())
    }
}
