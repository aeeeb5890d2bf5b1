use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;

use crate::{date, ObjectError};

/// Value of the `type:` line in a commit record.
pub const COMMIT_TYPE: &str = "commit";

/// Where a commit's `hash` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashOrigin {
    /// Computed from the commit's own fields; consistent by construction.
    Derived,
    /// Taken verbatim from a stored record and not checked against the content.
    Loaded,
}

/// An immutable commit: a snapshot of tracked files plus metadata.
///
/// File blobs are kept in filename order, so hashing and serialization share a
/// single canonical ordering. Equality compares the fields and the stored hash;
/// the [`HashOrigin`] is not part of the value.
#[derive(Debug, Clone)]
pub struct Commit {
    hash: String,
    parent_hashes: Vec<String>,
    message: String,
    timestamp: String,
    file_blobs: BTreeMap<String, String>,
    origin: HashOrigin,
}

impl Commit {
    /// Create a commit stamped with the current local time.
    ///
    /// Parent order is preserved and is part of the commit's identity.
    pub fn new<P, F, K, V>(
        message: impl Into<String>,
        parent_hashes: P,
        file_blobs: F,
    ) -> Result<Self, ObjectError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        F: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_timestamp(message, date::now_timestamp(), parent_hashes, file_blobs)
    }

    /// Create a commit with an explicit timestamp.
    ///
    /// Every text field must fit on one line and filenames must not contain a
    /// space, otherwise the record could not be parsed back. Later duplicate
    /// filenames replace earlier ones.
    pub fn with_timestamp<P, F, K, V>(
        message: impl Into<String>,
        timestamp: impl Into<String>,
        parent_hashes: P,
        file_blobs: F,
    ) -> Result<Self, ObjectError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        F: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let message = message.into();
        let timestamp = timestamp.into();
        check_single_line("message", &message)?;
        check_single_line("timestamp", &timestamp)?;

        let parent_hashes: Vec<String> = parent_hashes.into_iter().map(Into::into).collect();
        for parent in &parent_hashes {
            check_single_line("parent hash", parent)?;
        }

        let mut blobs = BTreeMap::new();
        for (name, blob) in file_blobs {
            let name = name.into();
            let blob = blob.into();
            check_filename(&name)?;
            check_single_line("blob hash", &blob)?;
            blobs.insert(name, blob);
        }

        let mut commit = Self {
            hash: String::new(),
            parent_hashes,
            message,
            timestamp,
            file_blobs: blobs,
            origin: HashOrigin::Derived,
        };
        commit.hash = commit.calculate_hash();
        Ok(commit)
    }

    /// The canonical text whose digest is this commit's identity.
    ///
    /// ```text
    /// commit
    /// message:<message>
    /// timestamp:<timestamp>
    /// parent:<hash>            one per parent, in stored order
    /// tree:
    ///   <filename> <blob-hash> one per file, by filename
    /// ```
    pub fn hash_buffer(&self) -> String {
        let mut out = String::new();
        out.push_str(COMMIT_TYPE);
        out.push('\n');
        push_line(&mut out, "message:", &self.message);
        push_line(&mut out, "timestamp:", &self.timestamp);
        for parent in &self.parent_hashes {
            push_line(&mut out, "parent:", parent);
        }
        out.push_str("tree:\n");
        for (name, blob) in self.tree_entries() {
            out.push_str("  ");
            out.push_str(name);
            out.push(' ');
            out.push_str(blob);
            out.push('\n');
        }
        out
    }

    /// Recompute the digest of [`hash_buffer`](Self::hash_buffer).
    ///
    /// This ignores the stored hash; compare with [`hash`](Self::hash) or use
    /// [`verify_integrity`](Self::verify_integrity).
    pub fn calculate_hash(&self) -> String {
        minigit_hash::hash(self.hash_buffer().as_bytes())
    }

    /// Serialize to the stored text record. The stored hash is written as is.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, "type:", COMMIT_TYPE);
        push_line(&mut out, "hash:", &self.hash);
        push_line(&mut out, "message:", &self.message);
        push_line(&mut out, "timestamp:", &self.timestamp);
        for parent in &self.parent_hashes {
            push_line(&mut out, "parent:", parent);
        }
        for (name, blob) in self.tree_entries() {
            out.push_str("file:");
            out.push_str(name);
            out.push(' ');
            out.push_str(blob);
            out.push('\n');
        }
        out
    }

    /// Parse a stored record from raw bytes.
    pub fn parse(data: &[u8]) -> Result<Self, ObjectError> {
        Self::deserialize(std::str::from_utf8(data)?)
    }

    /// Parse a stored text record.
    ///
    /// The `hash:` value is trusted verbatim and the result is marked
    /// [`HashOrigin::Loaded`]. Unknown lines and blank lines are skipped. For
    /// repeated `message:`/`timestamp:`/`hash:` lines the last one wins.
    pub fn deserialize(text: &str) -> Result<Self, ObjectError> {
        let mut hash = String::new();
        let mut message = String::new();
        let mut timestamp = String::new();
        let mut parent_hashes = Vec::new();
        let mut file_blobs = BTreeMap::new();

        for line in text.split('\n') {
            if let Some(kind) = line.strip_prefix("type:") {
                if kind != COMMIT_TYPE {
                    return Err(ObjectError::UnexpectedType(kind.to_string()));
                }
            } else if let Some(value) = line.strip_prefix("hash:") {
                hash = value.to_string();
            } else if let Some(value) = line.strip_prefix("message:") {
                message = value.to_string();
            } else if let Some(value) = line.strip_prefix("timestamp:") {
                timestamp = value.to_string();
            } else if let Some(value) = line.strip_prefix("parent:") {
                parent_hashes.push(value.to_string());
            } else if let Some(entry) = line.strip_prefix("file:") {
                let (name, blob) = entry
                    .split_once(' ')
                    .ok_or_else(|| ObjectError::InvalidFileEntry(entry.to_string()))?;
                file_blobs.insert(name.to_string(), blob.to_string());
            }
        }

        Ok(Self {
            hash,
            parent_hashes,
            message,
            timestamp,
            file_blobs,
            origin: HashOrigin::Loaded,
        })
    }

    /// Does the stored hash match the hash recomputed from the content?
    ///
    /// Always true for freshly constructed commits.
    pub fn verify_integrity(&self) -> bool {
        self.hash == self.calculate_hash()
    }

    /// Check the stored hash and promote the commit to [`HashOrigin::Derived`].
    pub fn verified(mut self) -> Result<Self, ObjectError> {
        let computed = self.calculate_hash();
        if computed != self.hash {
            return Err(ObjectError::HashMismatch {
                stored: self.hash,
                computed,
            });
        }
        self.origin = HashOrigin::Derived;
        Ok(self)
    }

    /// File entries in canonical (filename) order.
    pub fn tree_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.file_blobs
            .iter()
            .map(|(name, blob)| (name.as_str(), blob.as_str()))
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn parent_hashes(&self) -> &[String] {
        &self.parent_hashes
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn file_blobs(&self) -> &BTreeMap<String, String> {
        &self.file_blobs
    }

    pub fn origin(&self) -> HashOrigin {
        self.origin
    }

    /// The timestamp as a date, if it is in the standard form.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        date::parse_timestamp(&self.timestamp)
    }

    /// Get the first parent (or None for root commits).
    pub fn first_parent(&self) -> Option<&str> {
        self.parent_hashes.first().map(String::as_str)
    }

    /// Is this a merge commit? (more than one parent)
    pub fn is_merge(&self) -> bool {
        self.parent_hashes.len() > 1
    }

    /// Is this a root commit? (no parents)
    pub fn is_root(&self) -> bool {
        self.parent_hashes.is_empty()
    }
}

impl PartialEq for Commit {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.parent_hashes == other.parent_hashes
            && self.message == other.message
            && self.timestamp == other.timestamp
            && self.file_blobs == other.file_blobs
    }
}

impl Eq for Commit {}

/// Log-style summary of the commit.
impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "commit {}", self.hash)?;
        if self.is_merge() {
            writeln!(f, "Merge: {}", self.parent_hashes.join(" "))?;
        }
        writeln!(f, "Date: {}", self.timestamp)?;
        writeln!(f)?;
        writeln!(f, "    {}", self.message)
    }
}

fn push_line(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push_str(value);
    out.push('\n');
}

fn check_single_line(field: &'static str, value: &str) -> Result<(), ObjectError> {
    if value.contains(|c: char| c == '\n' || c == '\r') {
        return Err(ObjectError::InvalidField {
            field,
            reason: "contains a line break".into(),
        });
    }
    Ok(())
}

fn check_filename(name: &str) -> Result<(), ObjectError> {
    check_single_line("filename", name)?;
    if name.contains(' ') {
        return Err(ObjectError::InvalidField {
            field: "filename",
            reason: format!("'{name}' contains a space"),
        });
    }
    Ok(())
}
