//! Commit message file access.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{CompileError, CompileResult};

/// The file git passes to the `commit-msg` hook.
///
/// Read once, written at most once. Writes go to a temporary file in the
/// same directory that is then renamed over the original, so a failed write
/// never leaves a truncated message behind.
#[derive(Debug, Clone)]
pub struct CommitMessageStore {
    path: PathBuf,
}

impl CommitMessageStore {
    /// Opens an existing commit message file.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::StoreNotFound`] if `path` is not a file.
    pub fn open(path: impl AsRef<Path>) -> CompileResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CompileError::StoreNotFound(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole message.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Store`] if the file cannot be read.
    pub fn read(&self) -> CompileResult<String> {
        fs::read_to_string(&self.path).map_err(|source| self.io_error(source))
    }

    /// Atomically replaces the message with `content`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Store`] if the temporary file cannot be
    /// written or renamed into place.
    pub fn write(&self, content: &str) -> CompileResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        if let Ok(metadata) = fs::metadata(&self.path) {
            file.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|source| self.io_error(source))?;
        }
        file.write_all(content.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|source| self.io_error(source))?;
        file.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        debug!(path = ?self.path, bytes = content.len(), "commit message written");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> CompileError {
        CompileError::Store {
            path: self.path.clone(),
            source,
        }
    }
}
