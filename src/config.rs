//! Fake-driver configuration.
//!
//! Deserialized once from the raw payload the registry hands to the driver
//! constructor; immutable afterwards. Field names mirror the on-wire keys
//! (`detect-changes`, `ignored-files`). Unknown keys are rejected so that a
//! typo in a test fixture fails loudly instead of silently falling back to
//! defaults.

use crate::error::DriverError;
use serde::Deserialize;

/// Configuration for the fake driver.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FakeConfig {
    /// When true, revisions are computed from file contents; when false they
    /// are read out of the checkout path's `vcs-` marker.
    #[serde(default, rename = "detect-changes")]
    pub detect_changes: bool,

    /// Files the wider system should treat specially for this backend.
    /// Advisory metadata only; never consulted by the driver's own hashing.
    #[serde(default, rename = "ignored-files")]
    pub ignored_files: Vec<String>,
}

impl FakeConfig {
    /// Parse an optional raw JSON payload. An absent payload means all
    /// defaults.
    pub fn from_bytes(bytes: Option<&[u8]>) -> Result<Self, DriverError> {
        match bytes {
            Some(raw) => Ok(serde_json::from_slice(raw)?),
            None => Ok(Self::default()),
        }
    }
}
