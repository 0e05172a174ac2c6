use std::path::{Path, PathBuf};

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Collect every directory under `root` (including `root`) that directly
/// contains a file named `filename`.
///
/// Hidden directories and any directory listed in `skip` are not descended
/// into. The result is sorted.
pub fn find_dirs_containing(
    root: &Path,
    filename: &str,
    skip: &[&str],
) -> std::io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                if name.starts_with('.') || skip.contains(&name.as_ref()) {
                    continue;
                }
                pending.push(entry.path());
            } else if name == filename {
                found.push(dir.clone());
            }
        }
    }

    found.sort();
    Ok(found)
}

/// Recursively copy the contents of `src` into `dest`, creating `dest`.
pub fn copy_dir_all(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dest)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else if file_type.is_symlink() {
            copy_symlink(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
    let link = std::fs::read_link(src)?;
    if dest.symlink_metadata().is_ok() {
        std::fs::remove_file(dest)?;
    }
    std::os::unix::fs::symlink(link, dest)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::fs::copy(src, dest).map(|_| ())
}
