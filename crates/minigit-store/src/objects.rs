use std::path::PathBuf;

use minigit_hash::{Digest, Hasher};
use minigit_object::Commit;
use tracing::{debug, warn};

use crate::{FsStorage, Storage, StoreConfig, StoreError};

/// Content-addressed object directory: each object lives at `<objects>/<hash>`.
pub struct ObjectStore<S = FsStorage> {
    storage: S,
    objects_dir: PathBuf,
    verify_on_read: bool,
}

impl ObjectStore<FsStorage> {
    /// Open the object store described by `config` on the local filesystem.
    pub fn open(config: &StoreConfig) -> Self {
        Self::with_storage(FsStorage::new(&config.repo_dir), config)
    }
}

impl<S: Storage> ObjectStore<S> {
    /// Use any [`Storage`]; only the layout settings of `config` apply.
    pub fn with_storage(storage: S, config: &StoreConfig) -> Self {
        Self {
            storage,
            objects_dir: config.objects_subdir.clone(),
            verify_on_read: config.verify_on_read,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Disable or enable the integrity check on [`read_commit`](Self::read_commit).
    pub fn set_verify_on_read(&mut self, verify: bool) {
        self.verify_on_read = verify;
    }

    /// Create the objects directory.
    pub fn init(&self) -> Result<(), StoreError> {
        self.storage.ensure_directory(&self.objects_dir)
    }

    /// Storage path for an object.
    pub fn object_path(&self, digest: &Digest) -> PathBuf {
        self.objects_dir.join(digest.to_hex())
    }

    /// Is there an object with this digest?
    pub fn contains(&self, digest: &Digest) -> bool {
        self.storage.exists(&self.object_path(digest))
    }

    /// Store raw file content. Returns its digest.
    ///
    /// No-op if the object already exists.
    pub fn write_blob(&self, content: &[u8]) -> Result<Digest, StoreError> {
        let digest = Hasher::digest(content);
        self.write_object(&digest, content)?;
        Ok(digest)
    }

    /// Read raw file content.
    pub fn read_blob(&self, digest: &Digest) -> Result<Vec<u8>, StoreError> {
        self.storage.read(&self.object_path(digest))
    }

    /// Store a commit's serialized record under its hash.
    ///
    /// The hash must be a well-formed digest; it becomes the file name.
    pub fn write_commit(&self, commit: &Commit) -> Result<Digest, StoreError> {
        let digest = Digest::from_hex(commit.hash())?;
        self.write_object(&digest, commit.serialize().as_bytes())?;
        Ok(digest)
    }

    /// Load a commit record.
    ///
    /// Objects without a `hash:` line (blobs) are refused. The stored hash is
    /// trusted unless the store was configured with `verify_on_read`, in which
    /// case a mismatch is an error.
    pub fn read_commit(&self, digest: &Digest) -> Result<Commit, StoreError> {
        let path = self.object_path(digest);
        let data = self.storage.read(&path)?;
        let commit = Commit::parse(&data)?;
        if commit.hash().is_empty() {
            return Err(StoreError::NotACommit { path });
        }
        if commit.hash() != digest.to_hex() {
            debug!(requested = %digest, stored = commit.hash(), "commit stored under a different name");
        }
        if !self.verify_on_read {
            return Ok(commit);
        }
        commit.verified().map_err(|e| {
            warn!(object = %digest, error = %e, "commit failed integrity check");
            StoreError::Object(e)
        })
    }

    fn write_object(&self, digest: &Digest, content: &[u8]) -> Result<(), StoreError> {
        let path = self.object_path(digest);
        if self.storage.exists(&path) {
            debug!(object = %digest, "object already present, skipping write");
            return Ok(());
        }
        self.storage.write(&path, content)?;
        debug!(object = %digest, path = %path.display(), "stored object");
        Ok(())
    }
}
