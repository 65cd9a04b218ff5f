#![allow(dead_code, clippy::unwrap_used)]

use async_trait::async_trait;
use doctrinegen::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A recorded filesystem operation, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateDirectory(PathBuf),
    WriteFile(PathBuf, String),
}

/// Scripted in-memory [`FileSystem`] double.
///
/// Records every operation in issue order and can be configured to reject
/// the creation of a directory with a given final component, which lets
/// tests observe the walker's abort-on-first-failure behavior.
#[derive(Default)]
pub struct MemoryFileSystem {
    operations: Mutex<Vec<Operation>>,
    fail_on_dir: Option<String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filesystem that rejects creating a directory named `dir`.
    pub fn failing_on(dir: &str) -> Self {
        MemoryFileSystem {
            operations: Mutex::new(Vec::new()),
            fail_on_dir: Some(dir.to_string()),
        }
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.operations.lock().unwrap().clone()
    }

    /// Content of the first written file whose name is `file_name`.
    pub fn file(&self, file_name: &str) -> Option<String> {
        self.operations
            .lock()
            .unwrap()
            .iter()
            .find_map(|op| match op {
                Operation::WriteFile(path, content)
                    if path.file_name().map(|n| n == file_name).unwrap_or(false) =>
                {
                    Some(content.clone())
                }
                _ => None,
            })
    }

    /// Final components of every directory-create issued, in order.
    pub fn created_dirs(&self) -> Vec<String> {
        self.operations
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                Operation::CreateDirectory(path) => {
                    path.file_name().map(|n| n.to_string_lossy().into_owned())
                }
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn create_directory(&self, path: &Path) -> anyhow::Result<()> {
        self.operations
            .lock()
            .unwrap()
            .push(Operation::CreateDirectory(path.to_path_buf()));
        if let Some(fail) = &self.fail_on_dir {
            if path.file_name().map(|n| n == fail.as_str()).unwrap_or(false) {
                anyhow::bail!("permission denied: {}", path.display());
            }
        }
        Ok(())
    }

    async fn write_file(&self, path: &Path, text: &str, _overwrite: bool) -> anyhow::Result<()> {
        self.operations
            .lock()
            .unwrap()
            .push(Operation::WriteFile(path.to_path_buf(), text.to_string()));
        Ok(())
    }
}
