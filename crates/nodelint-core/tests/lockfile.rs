use nodelint_core::lockfile::{detect, PackageManager};
use tempfile::TempDir;

#[test]
fn test_detects_each_manager() {
    for (file, manager) in [
        ("package-lock.json", PackageManager::Npm),
        ("pnpm-lock.yaml", PackageManager::Pnpm),
        ("yarn.lock", PackageManager::Yarn),
    ] {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(file), "").unwrap();
        let lock = detect(tmp.path()).unwrap();
        assert_eq!(lock.manager, manager);
        assert_eq!(lock.path, tmp.path().join(file));
        assert_eq!(manager.lockfile(), file);
    }
}

#[test]
fn test_npm_lockfile_wins() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("yarn.lock"), "").unwrap();
    std::fs::write(tmp.path().join("package-lock.json"), "{}").unwrap();
    assert_eq!(detect(tmp.path()).unwrap().manager, PackageManager::Npm);
}

#[test]
fn test_directory_named_like_lockfile_is_ignored() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("yarn.lock")).unwrap();
    assert!(detect(tmp.path()).is_err());
}

#[test]
fn test_missing_lockfile_lists_supported() {
    let tmp = TempDir::new().unwrap();
    let msg = detect(tmp.path()).unwrap_err().to_string();
    assert!(msg.contains("lock file not found"), "got: {msg}");
    assert!(
        msg.ends_with("supported are: package-lock.json, pnpm-lock.yaml, yarn.lock."),
        "got: {msg}"
    );
}

#[test]
fn test_manager_commands() {
    assert_eq!(PackageManager::Pnpm.command(), "pnpm");
    assert_eq!(PackageManager::Yarn.to_string(), "yarn");
    assert!(PackageManager::Npm.is_bundled());
    assert!(!PackageManager::Yarn.is_bundled());
}
