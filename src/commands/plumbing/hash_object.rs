use crate::areas::toolkit::Toolkit;
use crate::artifacts::codec::{deframe, frame_raw};
use anyhow::Context;
use std::path::Path;

impl Toolkit {
    /// Frame a file's contents as `kind`, print the object ID and optionally
    /// save the frame
    ///
    /// Non-blob bodies are decoded before hashing so that a malformed tree,
    /// commit or tag is reported instead of hashed.
    pub fn hash_object(
        &self,
        file_path: &str,
        kind: &str,
        output: Option<&Path>,
        zlib: bool,
    ) -> anyhow::Result<()> {
        let body = self.workspace().read_file(file_path.as_ref())?;
        let frame = frame_raw(kind, &body)?;

        deframe(&frame, true).context(format!("{file_path} is not a valid {kind} object"))?;
        tracing::debug!(kind, bytes = body.len(), "framed object body");

        self.emit_frame(&frame, output, zlib)?;

        Ok(())
    }
}
