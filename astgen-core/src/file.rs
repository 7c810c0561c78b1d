use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the destination path of the file
    fn path(&self) -> &Path;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any previous content
    fn write(&self) -> Result<WriteResult> {
        let path = self.path();
        let content = self.render();
        write_file(path, &content)?;
        Ok(WriteResult {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}

/// Overwrite `path` with `content`.
///
/// The parent directory must already exist; a missing directory is reported
/// as an error rather than created.
fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Result of a write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Path that was written
    pub path: PathBuf,
    /// Number of bytes written
    pub bytes: usize,
}
