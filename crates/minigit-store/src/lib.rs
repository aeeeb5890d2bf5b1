//! Object storage: persist blobs and commit records under `objects/<hash>`.
//!
//! [`Storage`] is the byte-level contract (read, write, exists, ensure
//! directory) and [`FsStorage`] implements it on the local filesystem.
//! [`ObjectStore`] sits on top and lays objects out by their digest: raw bytes
//! for blobs, the serialized text record for commits.
//!
//! Writers are not coordinated. Callers must ensure at most one writer per
//! object path at a time.

mod config;
mod objects;
mod storage;

pub use config::StoreConfig;
pub use objects::ObjectStore;
pub use storage::{FsStorage, Storage};

use std::path::PathBuf;

/// Errors from storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("object not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("not a regular file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("object is not a commit: {}", .path.display())]
    NotACommit { path: PathBuf },

    #[error("unable to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Object(#[from] minigit_object::ObjectError),

    #[error("invalid object name: {0}")]
    Hash(#[from] minigit_hash::HashError),
}
