//! The directory behind the `/files/` route.

use std::io;
use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("file name {name:?} does not stay inside the storage directory")]
    InvalidName { name: String },

    #[error("io error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl StorageError {
    /// Whether the failure means "there is no such file" rather than a server fault.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::InvalidName { .. } => true,
            Self::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }
}

/// Reads and writes whole files below a root directory.
///
/// Names come straight from the request path and are only accepted when every
/// component is a plain file or directory name, so `..`, `.` and absolute names
/// never reach the filesystem. The default storage has an empty root, so names
/// resolve relative to the working directory.
#[derive(Debug, Clone, Default)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a file name from a request to a path below the root.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(name);
        let contained = !name.is_empty() && relative.components().all(|c| matches!(c, Component::Normal(_)));
        if !contained {
            return Err(StorageError::InvalidName { name: name.to_string() });
        }

        Ok(self.root.join(relative))
    }

    pub async fn read(&self, name: &str) -> Result<Bytes, StorageError> {
        let path = self.resolve(name)?;
        debug!(path = %path.display(), "reading file");
        match tokio::fs::read(&path).await {
            Ok(contents) => Ok(Bytes::from(contents)),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    /// Creates or truncates `name` and writes `contents` to it.
    pub async fn write(&self, name: &str, contents: &[u8]) -> Result<(), StorageError> {
        let path = self.resolve(name)?;
        debug!(path = %path.display(), bytes = contents.len(), "writing file");
        tokio::fs::write(&path, contents).await.map_err(|source| StorageError::Io { path, source })
    }
}
