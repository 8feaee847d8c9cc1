use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// State shared by the command-line commands: where files live and where
/// output goes
pub struct Toolkit {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Toolkit {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Toolkit {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Print a frame's ID and, if asked, save the frame
    pub(crate) fn emit_frame(
        &self,
        frame: &[u8],
        output: Option<&Path>,
        zlib: bool,
    ) -> anyhow::Result<ObjectId> {
        let object_id = ObjectId::digest(frame);
        tracing::debug!(oid = %object_id, bytes = frame.len(), "hashed frame");

        writeln!(self.writer(), "{object_id}")?;

        if let Some(output) = output {
            self.workspace.write_frame(output, frame, zlib)?;
        }

        Ok(object_id)
    }
}
