use std::path::{Path, PathBuf};

/// Environment variable naming the repository directory.
pub const ENV_DIR: &str = "MINIGIT_DIR";
/// Environment variable enabling hash verification when commits are read.
pub const ENV_VERIFY_ON_READ: &str = "MINIGIT_VERIFY_ON_READ";

/// Where objects live and how they are read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Repository directory; storage paths are relative to it.
    pub repo_dir: PathBuf,
    /// Objects directory, relative to `repo_dir`.
    pub objects_subdir: PathBuf,
    /// Reject commits whose stored hash does not match their content.
    pub verify_on_read: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            repo_dir: PathBuf::from(".minigit"),
            objects_subdir: PathBuf::from("objects"),
            verify_on_read: false,
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by `MINIGIT_DIR` and `MINIGIT_VERIFY_ON_READ`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the known keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_DIR).filter(|d| !d.is_empty()) {
            config.repo_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(ENV_VERIFY_ON_READ) {
            config.verify_on_read = parse_bool(&value);
        }
        config
    }

    pub fn with_repo_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.repo_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_objects_subdir(mut self, subdir: impl AsRef<Path>) -> Self {
        self.objects_subdir = subdir.as_ref().to_path_buf();
        self
    }

    pub fn with_verify_on_read(mut self, verify: bool) -> Self {
        self.verify_on_read = verify;
        self
    }

    /// Full path of the objects directory.
    pub fn objects_dir(&self) -> PathBuf {
        self.repo_dir.join(&self.objects_subdir)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
