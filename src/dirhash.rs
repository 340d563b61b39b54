//! Deterministic digest of a directory tree.

use crate::error::DriverError;
use crate::hash::{self, Digest};
use std::fs::File;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Hash every regular file reachable under `root`.
///
/// Relative paths use forward-slash separators so digests agree across
/// platforms. Directory entries contribute nothing; only file content and
/// relative location matter, so renaming `root` itself does not change the
/// digest. Symbolic links nested inside the tree are skipped, not followed —
/// only the checkout root gets link resolution, and that is the caller's job.
///
/// Determinism comes from the content hasher's sort step, not from the
/// filesystem's native listing order.
pub fn hash_dir(root: &Path) -> Result<Digest, DriverError> {
    let files = dir_files(root)?;
    hash::hash_files(&files, |rel| File::open(root.join(rel)))
}

/// Collect forward-slash relative paths of all regular files under `root`.
fn dir_files(root: &Path) -> Result<Vec<String>, DriverError> {
    if !root.is_dir() {
        return Err(DriverError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("not a directory: {}", root.display()),
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(root).map_err(|_| {
            DriverError::Format(format!(
                "walked path {} escapes root {}",
                entry.path().display(),
                root.display()
            ))
        })?;
        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push(rel);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_hash_dir_deterministic() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("file1.txt"), "content1").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("file2.txt"), "content2").unwrap();

        let digest1 = hash_dir(root).unwrap();
        let digest2 = hash_dir(root).unwrap();

        assert_eq!(digest1, digest2);
    }

    #[test]
    fn test_hash_dir_content_change_changes_digest() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("a.txt"), "x").unwrap();
        let digest1 = hash_dir(root).unwrap();

        fs::write(root.join("a.txt"), "y").unwrap();
        let digest2 = hash_dir(root).unwrap();

        assert_ne!(digest1, digest2);
    }

    #[test]
    fn test_hash_dir_ignores_root_name() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        for root in [&first, &second] {
            fs::create_dir(root).unwrap();
            fs::create_dir(root.join("sub")).unwrap();
            fs::write(root.join("a.txt"), "same").unwrap();
            fs::write(root.join("sub").join("b.txt"), "bytes").unwrap();
        }

        assert_eq!(hash_dir(&first).unwrap(), hash_dir(&second).unwrap());
    }

    #[test]
    fn test_hash_dir_empty_directories_do_not_count() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("a.txt"), "x").unwrap();
        let digest1 = hash_dir(root).unwrap();

        fs::create_dir(root.join("empty")).unwrap();
        let digest2 = hash_dir(root).unwrap();

        assert_eq!(digest1, digest2);
    }

    #[test]
    fn test_hash_dir_missing_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = hash_dir(&temp_dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, DriverError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_hash_dir_skips_nested_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("a.txt"), "x").unwrap();
        let digest_plain = hash_dir(root).unwrap();

        std::os::unix::fs::symlink(root.join("a.txt"), root.join("alias.txt")).unwrap();
        let digest_with_link = hash_dir(root).unwrap();

        assert_eq!(digest_plain, digest_with_link);
    }

    #[test]
    fn test_hash_dir_newline_filename_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("ok.txt"), "x").unwrap();
        fs::write(root.join("bad\nname.txt"), "y").unwrap();

        let err = hash_dir(root).unwrap_err();
        assert!(matches!(err, DriverError::Format(_)));
    }
}
