//! # Filesystem Collaborator
//!
//! The tree walker never touches the disk directly; it talks to a
//! [`FileSystem`] implementation. One directory-create per container node,
//! one file-write per emitted type unit, no reads. Tests substitute a
//! scripted in-memory double to observe ordering and inject failures.

use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// External filesystem surface used by the generator.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Create `path` (and any missing ancestors) as a directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created; the walker
    /// aborts the run on the first failure.
    async fn create_directory(&self, path: &Path) -> anyhow::Result<()>;

    /// Write `text` to `path`, replacing existing content when `overwrite`
    /// is set. A non-overwriting write onto an existing file is a silent
    /// skip, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    async fn write_file(&self, path: &Path, text: &str, overwrite: bool) -> anyhow::Result<()>;
}

/// Production [`FileSystem`] backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFileSystem;

#[async_trait]
impl FileSystem for DiskFileSystem {
    async fn create_directory(&self, path: &Path) -> anyhow::Result<()> {
        debug!(path = %path.display(), "creating directory");
        tokio::fs::create_dir_all(path).await?;
        Ok(())
    }

    async fn write_file(&self, path: &Path, text: &str, overwrite: bool) -> anyhow::Result<()> {
        if !overwrite && tokio::fs::try_exists(path).await? {
            debug!(path = %path.display(), "skipping existing file");
            return Ok(());
        }
        debug!(path = %path.display(), bytes = text.len(), "writing file");
        tokio::fs::write(path, text).await?;
        Ok(())
    }
}
