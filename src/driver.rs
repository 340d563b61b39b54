//! The version-control backend capability set.

use crate::error::DriverError;
use std::path::Path;

/// Minimal observable contract of a version-control backend.
///
/// Implementations resolve checkout revisions and simulate pull and clone;
/// they do not track history and have no notion of branches, merges, or
/// diffs. Implementations are immutable after construction, so a shared
/// instance may serve concurrent calls on distinct directories.
pub trait Driver: Send + Sync {
    /// Current revision of the checkout at `dir`.
    fn head_rev(&self, dir: &Path) -> Result<String, DriverError>;

    /// Bring the checkout at `dir` up to date and return its revision.
    fn pull(&self, dir: &Path) -> Result<String, DriverError>;

    /// Materialize a checkout of `url` at `dir` and return its revision.
    fn clone(&self, dir: &Path, url: &str) -> Result<String, DriverError>;

    /// Files the wider system should treat specially for this backend.
    fn special_files(&self) -> &[String];

    /// Files the backend generates under `dir` that are not source-controlled.
    fn auto_generated_files(&self, dir: &Path) -> Vec<String>;
}

impl std::fmt::Debug for dyn Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Driver")
    }
}
