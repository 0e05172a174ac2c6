use nodelint_util::fs::{copy_dir_all, ensure_dir, find_dirs_containing};
use tempfile::TempDir;

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b");
    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());
    ensure_dir(&nested).unwrap();
}

#[test]
fn test_find_dirs_containing_skips_excluded_and_hidden() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    std::fs::write(root.join("package.json"), "{}").unwrap();
    std::fs::create_dir_all(root.join("packages/web")).unwrap();
    std::fs::write(root.join("packages/web/package.json"), "{}").unwrap();
    std::fs::create_dir_all(root.join("node_modules/left-pad")).unwrap();
    std::fs::write(root.join("node_modules/left-pad/package.json"), "{}").unwrap();
    std::fs::create_dir_all(root.join(".git/hooks")).unwrap();
    std::fs::write(root.join(".git/hooks/package.json"), "{}").unwrap();

    let found = find_dirs_containing(root, "package.json", &["node_modules"]).unwrap();
    assert_eq!(
        found,
        vec![root.to_path_buf(), root.join("packages/web")]
    );
}

#[test]
fn test_find_dirs_containing_none() {
    let tmp = TempDir::new().unwrap();
    let found = find_dirs_containing(tmp.path(), "package.json", &[]).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_copy_dir_all() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    std::fs::create_dir_all(src.join("bin")).unwrap();
    std::fs::write(src.join("bin/node"), "#!/bin/sh").unwrap();
    std::fs::write(src.join("README.md"), "node").unwrap();

    let dest = tmp.path().join("dest");
    copy_dir_all(&src, &dest).unwrap();
    assert_eq!(
        std::fs::read_to_string(dest.join("bin/node")).unwrap(),
        "#!/bin/sh"
    );
    assert!(dest.join("README.md").is_file());
}
