//! Vcsim: a pluggable version-control driver abstraction with a
//! deterministic, filesystem-backed fake implementation.
//!
//! The fake driver exists to drive reproducible tests without a real
//! version-control tool present: clone aliases a local source directory via a
//! symbolic link, and the head revision is either read out of the checkout
//! path (`.../project-vcs-r42` encodes revision `r42`) or computed as an
//! order-independent digest of the checkout's file contents.

pub mod config;
pub mod dirhash;
pub mod driver;
pub mod error;
pub mod fake;
pub mod hash;
pub mod links;
pub mod registry;

pub use driver::Driver;
pub use error::DriverError;
pub use fake::FakeDriver;
pub use registry::Registry;
