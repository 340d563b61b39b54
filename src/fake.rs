//! Filesystem-backed fake driver.
//!
//! Simulates the minimal observable contract of a version-control backend
//! using the local filesystem as the "remote": clone aliases a source
//! directory through a symbolic link, and the head revision is either read
//! out of the checkout path or computed as a digest of the checkout's file
//! contents. Pulling never changes anything; it only re-reads.

use crate::config::FakeConfig;
use crate::dirhash;
use crate::driver::Driver;
use crate::error::DriverError;
use crate::links::{LinkFs, OsLinks};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Marker segment for static-mode revisions, e.g. `.../project-vcs-r42`.
const REV_MARKER: &str = "vcs-";

/// Scheme prefix accepted by clone.
const FILE_SCHEME: &str = "file://";

/// A test-double [`Driver`] backed by the local filesystem.
pub struct FakeDriver {
    config: FakeConfig,
    links: Arc<dyn LinkFs>,
}

impl FakeDriver {
    /// Build from an optional raw JSON payload (see [`FakeConfig`]).
    pub fn new(config: Option<&[u8]>) -> Result<Self, DriverError> {
        Ok(Self::with_links(
            FakeConfig::from_bytes(config)?,
            Arc::new(OsLinks),
        ))
    }

    /// Build with a specific link implementation.
    pub fn with_links(config: FakeConfig, links: Arc<dyn LinkFs>) -> Self {
        Self { config, links }
    }

    /// Extract the revision encoded in the checkout path.
    fn path_rev(&self, dir: &Path) -> Result<String, DriverError> {
        let dir = dir.to_string_lossy();
        let idx = dir.rfind(REV_MARKER).ok_or_else(|| {
            DriverError::Format(format!("could not find {REV_MARKER:?} in path: {dir}"))
        })?;
        Ok(dir[idx + REV_MARKER.len()..].to_string())
    }

    /// Compute the revision from checkout contents.
    ///
    /// A checkout that is itself a symlink is resolved one level before
    /// hashing; links nested inside the tree are not followed. A plain
    /// directory is hashed as-is.
    fn content_rev(&self, dir: &Path) -> Result<String, DriverError> {
        let root: PathBuf = match self.links.read_link(dir) {
            Ok(target) => target,
            Err(_) => dir.to_path_buf(),
        };
        dirhash::hash_dir(&root)
    }
}

impl Driver for FakeDriver {
    fn head_rev(&self, dir: &Path) -> Result<String, DriverError> {
        if self.config.detect_changes {
            debug!(dir = %dir.display(), "resolving revision from content");
            self.content_rev(dir)
        } else {
            debug!(dir = %dir.display(), "resolving revision from path marker");
            self.path_rev(dir)
        }
    }

    fn pull(&self, dir: &Path) -> Result<String, DriverError> {
        // Pulling a fake repository never changes its state.
        self.head_rev(dir)
    }

    fn clone(&self, dir: &Path, url: &str) -> Result<String, DriverError> {
        let src = url.strip_prefix(FILE_SCHEME).ok_or_else(|| {
            DriverError::Format(format!("expected {FILE_SCHEME:?} prefix in url: {url}"))
        })?;
        debug!(dir = %dir.display(), src, "cloning by symlink");
        self.links.symlink(Path::new(src), dir)?;
        // Not transactional: the link stays behind if the pull below fails.
        self.pull(dir)
    }

    fn special_files(&self) -> &[String] {
        &self.config.ignored_files
    }

    fn auto_generated_files(&self, _dir: &Path) -> Vec<String> {
        Vec::new()
    }
}
