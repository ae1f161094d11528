//! Configuration Module
//!
//! Cache facade configuration, loadable from environment variables or
//! deserialized as part of a host application's own config.

use std::env;
use std::fmt;

use serde::Deserialize;

use crate::driver::{ExpiryPolicy, MEMORY_DRIVER};
use crate::error::Result;

/// Cache configuration parameters.
///
/// The memory driver only looks at `expiry`; `max_size` and the connection
/// fields are carried for drivers that need them.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Name of the registered driver to use
    pub driver: String,
    /// Maximum size hint for size-bounded drivers
    pub max_size: usize,
    /// Backend address for remote drivers
    pub address: Option<String>,
    /// Backend username for remote drivers
    pub username: Option<String>,
    /// Backend password for remote drivers
    pub password: Option<String>,
    /// Whether the host should use the cache at all
    pub enabled: bool,
    /// Read-time expiry handling for the memory driver
    pub expiry: ExpiryPolicy,
    /// Expiry sweep interval in seconds, 0 disables the sweeper
    pub sweep_interval: u64,
}

impl CacheConfig {
    /// Creates a configuration selecting the named driver.
    pub fn new(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            ..Self::default()
        }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DRIVER` - Driver name (default: memory)
    /// - `CACHE_MAX_SIZE` - Size hint (default: 0)
    /// - `CACHE_ADDRESS`, `CACHE_USERNAME`, `CACHE_PASSWORD` - Backend connection
    /// - `CACHE_ENABLED` - true/false (default: true)
    /// - `CACHE_EXPIRY` - enforce/advisory (default: enforce)
    /// - `CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    ///
    /// Unparsable numbers and booleans fall back to their defaults; an
    /// unknown expiry policy is an error.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let expiry = match env::var("CACHE_EXPIRY") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.expiry,
        };

        Ok(Self {
            driver: env::var("CACHE_DRIVER")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.driver),
            max_size: env::var("CACHE_MAX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_size),
            address: env::var("CACHE_ADDRESS").ok(),
            username: env::var("CACHE_USERNAME").ok(),
            password: env::var("CACHE_PASSWORD").ok(),
            enabled: env::var("CACHE_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enabled),
            expiry,
            sweep_interval: env::var("CACHE_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_interval),
        })
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_expiry(mut self, expiry: ExpiryPolicy) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn with_sweep_interval(mut self, secs: u64) -> Self {
        self.sweep_interval = secs;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            driver: MEMORY_DRIVER.to_string(),
            max_size: 0,
            address: None,
            username: None,
            password: None,
            enabled: true,
            expiry: ExpiryPolicy::Enforce,
            sweep_interval: 60,
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("driver", &self.driver)
            .field("max_size", &self.max_size)
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("enabled", &self.enabled)
            .field("expiry", &self.expiry)
            .field("sweep_interval", &self.sweep_interval)
            .finish()
    }
}
