use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::StoreError;

/// Byte-level persistence by path.
pub trait Storage {
    /// Write `bytes` to `path`, creating missing parent directories.
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError>;

    /// Read the full contents of `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError>;

    /// Is there a regular file at `path`?
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and its parents if needed. Idempotent.
    fn ensure_directory(&self, path: &Path) -> Result<(), StoreError>;
}

/// [`Storage`] on the local filesystem, with paths relative to a root.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Storage for FsStorage {
    /// The file is written atomically (temp file in the same directory + rename).
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        let full = self.resolve(path);
        let parent = match full.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let write_err = |source: std::io::Error| StoreError::Write {
            path: full.clone(),
            source,
        };
        let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(write_err)?;
        tmp.write_all(bytes).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&full).map_err(|e| write_err(e.error))?;

        debug!(path = %full.display(), bytes = bytes.len(), "wrote file");
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        let full = self.resolve(path);
        if full.is_dir() {
            return Err(StoreError::NotAFile { path: full });
        }
        match fs::read(&full) {
            Ok(data) => {
                debug!(path = %full.display(), bytes = data.len(), "read file");
                Ok(data)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound { path: full }),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn ensure_directory(&self, path: &Path) -> Result<(), StoreError> {
        let full = self.resolve(path);
        if full.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&full)?;
        debug!(path = %full.display(), "created directory");
        Ok(())
    }
}
