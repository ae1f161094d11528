//! Cache Facade Module
//!
//! Caller-facing cache bound to one configuration and one resolved driver.

use std::sync::Arc;

use tracing::info;

use crate::cache::Value;
use crate::config::CacheConfig;
use crate::driver::{CacheStats, Driver, DriverRegistry};
use crate::error::Result;

// == Cache ==
/// Cache facade forwarding every operation to its driver.
///
/// Cloning is cheap and clones share the same driver.
#[derive(Debug, Clone)]
pub struct Cache {
    config: Arc<CacheConfig>,
    driver: Arc<dyn Driver>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache using the driver named in `config`.
    ///
    /// Fails if no driver is registered under that name.
    pub fn new(registry: &DriverRegistry, config: CacheConfig) -> Result<Self> {
        let driver = registry.resolve(&config.driver)?;
        info!("Cache initialized with driver: {}", config.driver);

        Ok(Self::with_driver(config, driver))
    }

    /// Creates a cache around an already resolved driver.
    pub fn with_driver(config: CacheConfig, driver: Arc<dyn Driver>) -> Self {
        Self {
            config: Arc::new(config),
            driver,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns a shared handle to the underlying driver.
    pub fn driver(&self) -> Arc<dyn Driver> {
        Arc::clone(&self.driver)
    }

    // == Get ==
    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.driver.get(key)
    }

    /// Returns the value stored under `key` as `T`.
    ///
    /// A value of another kind reads as `None` and is left in place.
    pub fn get_typed<T>(&self, key: &str) -> Option<T>
    where
        T: TryFrom<Value>,
    {
        self.get(key).and_then(|value| T::try_from(value).ok())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_typed(key)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get_typed(key)
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get_typed(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_typed(key)
    }

    // == Put ==
    /// Stores `value` under `key` for `ttl_secs` seconds (`<= 0` = forever).
    pub fn put(&self, key: &str, value: impl Into<Value>, ttl_secs: i64) {
        self.driver.put(key, value.into(), ttl_secs);
    }

    pub fn put_forever(&self, key: &str, value: impl Into<Value>) {
        self.put(key, value, 0);
    }

    // == Remove ==
    pub fn remove(&self, key: &str) {
        self.driver.remove(key);
    }

    // == Pull ==
    /// Reads `key` and then removes it.
    ///
    /// The key is removed whether or not it was found.
    pub fn pull(&self, key: &str) -> Option<Value> {
        let value = self.driver.get(key);
        self.driver.remove(key);
        value
    }

    /// Typed [`Cache::pull`]; the entry is removed even on a kind mismatch.
    pub fn pull_typed<T>(&self, key: &str) -> Option<T>
    where
        T: TryFrom<Value>,
    {
        self.pull(key).and_then(|value| T::try_from(value).ok())
    }

    pub fn pull_string(&self, key: &str) -> Option<String> {
        self.pull_typed(key)
    }

    pub fn pull_int(&self, key: &str) -> Option<i64> {
        self.pull_typed(key)
    }

    // == Remember ==
    /// Returns the cached value for `key`, or computes, stores and returns it.
    ///
    /// `compute` runs on the calling thread with no cache lock held and may
    /// use the cache itself. Concurrent callers missing on the same key each
    /// run their own `compute`; the last `put` wins.
    pub fn remember<V, F>(&self, key: &str, ttl_secs: i64, compute: F) -> Value
    where
        V: Into<Value>,
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }

        let value = compute().into();
        self.driver.put(key, value.clone(), ttl_secs);
        value
    }

    pub fn remember_forever<V, F>(&self, key: &str, compute: F) -> Value
    where
        V: Into<Value>,
        F: FnOnce() -> V,
    {
        self.remember(key, 0, compute)
    }

    /// Fallible [`Cache::remember`]: on error nothing is stored.
    pub fn try_remember<V, E, F>(
        &self,
        key: &str,
        ttl_secs: i64,
        compute: F,
    ) -> std::result::Result<Value, E>
    where
        V: Into<Value>,
        F: FnOnce() -> std::result::Result<V, E>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let value = compute()?.into();
        self.driver.put(key, value.clone(), ttl_secs);
        Ok(value)
    }

    // == Clear ==
    pub fn clear(&self) {
        self.driver.clear();
    }

    /// Drops expired entries from the driver, returning how many went.
    pub fn purge_expired(&self) -> usize {
        self.driver.purge_expired()
    }

    pub fn stats(&self) -> Option<CacheStats> {
        self.driver.stats()
    }
}
