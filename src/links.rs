//! Symbolic-link seam for the fake driver.
//!
//! Clone and checkout resolution are the only places this crate touches
//! symlinks; routing them through a port trait lets unit tests fake link
//! behavior without a real filesystem.

use std::io;
use std::path::{Path, PathBuf};

/// Minimal symlink capability used by the fake driver.
pub trait LinkFs: Send + Sync {
    /// Create a symbolic link at `link` pointing to `target`.
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// Read the target of `path` if it is a symbolic link.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;
}

/// OS-backed implementation.
#[derive(Debug, Default)]
pub struct OsLinks;

impl LinkFs for OsLinks {
    #[cfg(unix)]
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }

    // Clone targets are always directories.
    #[cfg(windows)]
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::windows::fs::symlink_dir(target, link)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::read_link(path)
    }
}
