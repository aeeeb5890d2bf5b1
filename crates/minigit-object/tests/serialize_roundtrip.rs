use minigit_object::{Commit, HashOrigin, ObjectError};

const TS: &str = "2025-06-01T12:00:00";

fn commit(message: &str, parents: &[&str], files: &[(&str, &str)]) -> Commit {
    Commit::with_timestamp(
        message,
        TS,
        parents.iter().copied(),
        files.iter().copied(),
    )
    .unwrap()
}

fn assert_roundtrip(original: &Commit) {
    let parsed = Commit::deserialize(&original.serialize()).unwrap();
    assert_eq!(parsed.message(), original.message());
    assert_eq!(parsed.timestamp(), original.timestamp());
    assert_eq!(parsed.parent_hashes(), original.parent_hashes());
    assert_eq!(parsed.file_blobs(), original.file_blobs());
    assert_eq!(parsed.hash(), original.hash());
    assert_eq!(parsed.origin(), HashOrigin::Loaded);
    assert!(parsed.verify_integrity());
}

#[test]
fn root_commit_roundtrip() {
    assert_roundtrip(&commit("first", &[], &[("a.txt", "11111111")]));
}

#[test]
fn empty_commit_roundtrip() {
    assert_roundtrip(&commit("", &[], &[]));
}

#[test]
fn merge_commit_roundtrip_keeps_parent_order() {
    let original = commit("merge", &["bbbbbbbb", "aaaaaaaa", "cccccccc"], &[]);
    let parsed = Commit::deserialize(&original.serialize()).unwrap();
    assert_eq!(parsed.parent_hashes(), ["bbbbbbbb", "aaaaaaaa", "cccccccc"]);
    assert_roundtrip(&original);
}

#[test]
fn many_files_roundtrip() {
    let files: Vec<(String, String)> = (0..50)
        .map(|i| (format!("dir{}/file{i}.txt", i % 7), format!("{i:08x}")))
        .collect();
    let original = Commit::with_timestamp("many", TS, Vec::<String>::new(), files).unwrap();
    assert_roundtrip(&original);
}

#[test]
fn roundtrip_of_fresh_timestamp() {
    let original = Commit::new("now", ["00000001"], [("x", "00000002")]).unwrap();
    assert_roundtrip(&original);
}

#[test]
fn serialized_files_are_sorted() {
    let c = commit("sorted", &[], &[("z", "1"), ("B", "2"), ("a", "3"), ("A", "4")]);
    let serialized = c.serialize();
    let files: Vec<&str> = serialized
        .lines()
        .filter_map(|l| l.strip_prefix("file:"))
        .collect();
    // Byte order: uppercase before lowercase.
    assert_eq!(files, ["A 4", "B 2", "a 3", "z 1"]);
}

#[test]
fn serialization_never_recomputes_hash() {
    let stored = "type:commit\nhash:not-a-real-hash\nmessage:m\ntimestamp:t\n";
    let loaded = Commit::deserialize(stored).unwrap();
    assert!(loaded.serialize().contains("hash:not-a-real-hash\n"));
    assert_eq!(loaded.serialize(), stored);
}

// ── Format errors ───────────────────────────────────────────────────

#[test]
fn malformed_file_line() {
    let err = Commit::deserialize("type:commit\nfile:onlyname\n").unwrap_err();
    assert!(matches!(err, ObjectError::InvalidFileEntry(ref entry) if entry == "onlyname"));
}

#[test]
fn type_mismatch_names_the_type() {
    let err = Commit::deserialize("type:tree\n").unwrap_err();
    assert!(matches!(err, ObjectError::UnexpectedType(ref t) if t == "tree"));
    assert!(err.to_string().contains("tree"));
}

#[test]
fn format_error_after_valid_lines_aborts() {
    let text = "type:commit\nhash:h\nmessage:m\nfile:broken\nfile:ok 1\n";
    assert!(Commit::deserialize(text).is_err());
}

// ── Tolerance ───────────────────────────────────────────────────────

#[test]
fn unknown_lines_are_ignored() {
    let c = Commit::deserialize("type:commit\nhash:h1\nfoo:bar\n").unwrap();
    assert_eq!(c.hash(), "h1");
    assert_eq!(c.message(), "");
    assert_eq!(c.timestamp(), "");
    assert!(c.parent_hashes().is_empty());
    assert!(c.file_blobs().is_empty());
}

#[test]
fn blank_lines_are_ignored() {
    let c = Commit::deserialize("\n\ntype:commit\n\nhash:h2\n\nparent:p\n\n").unwrap();
    assert_eq!(c.hash(), "h2");
    assert_eq!(c.parent_hashes(), ["p"]);
}

#[test]
fn later_duplicate_file_overwrites() {
    let c = Commit::deserialize("file:a 1\nfile:a 2\n").unwrap();
    assert_eq!(c.file_blobs().len(), 1);
    assert_eq!(c.file_blobs()["a"], "2");
}
