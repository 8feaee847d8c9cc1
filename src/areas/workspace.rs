use crate::areas::loose;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Files the command-line tool reads from and writes to
///
/// Relative paths resolve against the workspace root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.resolve(file_path);
        let content = std::fs::read(&file_path)
            .context(format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    /// Read a frame, inflating it first if it is a zlib-compressed loose object
    pub fn read_frame(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let content = self.read_file(file_path)?;

        if loose::is_compressed(&content) {
            tracing::debug!(path = %file_path.display(), "inflating loose object");
            return loose::decompress(&content);
        }

        Ok(content)
    }

    /// Write a frame, compressed as a loose object when `zlib` is set
    pub fn write_frame(&self, file_path: &Path, frame: &[u8], zlib: bool) -> anyhow::Result<()> {
        let file_path = self.resolve(file_path);
        let content = if zlib {
            loose::compress(frame)?
        } else {
            Bytes::copy_from_slice(frame)
        };

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Unable to create directory {}",
                parent.display()
            ))?;
        }

        std::fs::write(&file_path, &content)
            .context(format!("Unable to write file {}", file_path.display()))?;
        tracing::debug!(path = %file_path.display(), bytes = content.len(), zlib, "wrote frame");

        Ok(())
    }
}
