//! Driver registry: explicit name-to-constructor table.
//!
//! Drivers are registered by an explicit initialization step
//! ([`Registry::builtin`] or [`Registry::register`]) rather than by
//! load-time side effects, so callers control exactly which backends exist.

use crate::driver::Driver;
use crate::error::DriverError;
use crate::fake::FakeDriver;
use std::collections::HashMap;

/// Constructor for a driver, handed the raw configuration payload.
pub type Constructor = fn(Option<&[u8]>) -> Result<Box<dyn Driver>, DriverError>;

/// Keyed table of driver constructors.
#[derive(Default)]
pub struct Registry {
    drivers: HashMap<String, Constructor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the builtin drivers registered.
    ///
    /// Currently that is the fake driver, under the name `"fake"`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("fake", |bytes| Ok(Box::new(FakeDriver::new(bytes)?)));
        registry
    }

    /// Register a constructor under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &str, constructor: Constructor) {
        self.drivers.insert(name.to_string(), constructor);
    }

    /// Construct a driver by name with the given configuration payload.
    pub fn open(&self, name: &str, config: Option<&[u8]>) -> Result<Box<dyn Driver>, DriverError> {
        let constructor = self
            .drivers
            .get(name)
            .ok_or_else(|| DriverError::Config(format!("unknown driver: {name}")))?;
        constructor(config)
    }

    /// Names of all registered drivers, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.drivers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
