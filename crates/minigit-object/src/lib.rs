//! Commit object model: canonical hashing, serialization and parsing.
//!
//! A [`Commit`] is an immutable snapshot record. Its identity is the FNV-1a
//! digest of a canonical text buffer built from its own fields; it is stored
//! as a line-oriented `key:value` text record.

mod commit;
pub mod date;

pub use commit::{Commit, HashOrigin, COMMIT_TYPE};

/// Errors produced by object operations.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("unexpected type: expected commit, got '{0}'")]
    UnexpectedType(String),

    #[error("invalid file entry: '{0}' has no space between filename and blob hash")]
    InvalidFileEntry(String),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("hash mismatch: stored {stored}, computed {computed}")]
    HashMismatch { stored: String, computed: String },

    #[error("commit record is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
