//! Driver Registry Module
//!
//! Maps driver names to shared driver instances.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::driver::{Driver, ExpiryPolicy, MemoryDriver, MEMORY_DRIVER};
use crate::error::{CacheError, Result};

// == Driver Registry ==
/// Registry of named cache drivers.
///
/// Built once at startup, populated through [`DriverRegistry::register`],
/// then shared by reference with every [`crate::Cache`] constructor.
/// Registration takes `&mut self`, so lookups can never race with it.
pub struct DriverRegistry {
    drivers: HashMap<String, Arc<dyn Driver>>,
}

impl DriverRegistry {
    // == Constructors ==
    /// Creates a registry with the in-memory driver registered as `"memory"`.
    pub fn new() -> Self {
        Self::with_memory_policy(ExpiryPolicy::default())
    }

    /// Like [`DriverRegistry::new`], with a custom expiry policy for the
    /// built-in memory driver.
    pub fn with_memory_policy(policy: ExpiryPolicy) -> Self {
        let memory = MemoryDriver::with_policy(policy);
        debug!("Built-in memory driver uses {} expiry", memory.policy());

        let mut drivers: HashMap<String, Arc<dyn Driver>> = HashMap::new();
        drivers.insert(MEMORY_DRIVER.to_string(), Arc::new(memory));
        Self { drivers }
    }

    /// Creates a registry with no drivers at all.
    pub fn empty() -> Self {
        Self {
            drivers: HashMap::new(),
        }
    }

    // == Register ==
    /// Registers `driver` under `name`.
    ///
    /// Fails if the name is blank or already taken; an existing driver is
    /// never replaced.
    pub fn register(&mut self, name: impl Into<String>, driver: Arc<dyn Driver>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CacheError::InvalidDriverName);
        }
        if self.drivers.contains_key(&name) {
            return Err(CacheError::DriverAlreadyRegistered(name));
        }

        info!("Registered cache driver: {}", name);
        self.drivers.insert(name, driver);
        Ok(())
    }

    // == Resolve ==
    /// Looks up the driver registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Driver>> {
        match self.drivers.get(name) {
            Some(driver) => Ok(Arc::clone(driver)),
            None => {
                warn!("Cache driver not registered: {}", name);
                Err(CacheError::DriverNotRegistered(name.to_string()))
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    /// Returns the registered driver names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.drivers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("drivers", &self.names())
            .finish()
    }
}
