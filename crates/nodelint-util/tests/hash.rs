use nodelint_util::hash::{sha1_bytes, sha256_bytes, sha256_file};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_sha256_bytes_empty() {
    assert_eq!(
        sha256_bytes(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_sha256_file_matches_bytes() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"hello").unwrap();
    tmp.flush().unwrap();
    assert_eq!(sha256_file(tmp.path()).unwrap(), sha256_bytes(b"hello"));
}

#[test]
fn test_sha256_file_not_found() {
    assert!(sha256_file(Path::new("/nonexistent/path/file.txt")).is_err());
}

#[test]
fn test_sha1_bytes_hello() {
    assert_eq!(
        sha1_bytes(b"hello"),
        "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
    );
}
