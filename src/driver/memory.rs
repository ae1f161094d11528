//! In-Memory Driver Module
//!
//! Unbounded HashMap store with per-entry expiry, guarded by a single
//! reader/writer lock.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use parking_lot::RwLock;
use serde::Deserialize;
use tracing::debug;

use crate::cache::Value;
use crate::driver::{current_timestamp, CacheEntry, CacheStats, Driver, StatsRecorder};
use crate::error::CacheError;

// == Expiry Policy ==
/// How the memory driver treats entries whose TTL has elapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryPolicy {
    /// Expired entries read as misses and are removed on access
    #[default]
    Enforce,
    /// Expiry is recorded but ignored on read; only purges drop entries
    Advisory,
}

impl fmt::Display for ExpiryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryPolicy::Enforce => write!(f, "enforce"),
            ExpiryPolicy::Advisory => write!(f, "advisory"),
        }
    }
}

impl FromStr for ExpiryPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enforce" | "lazy" => Ok(ExpiryPolicy::Enforce),
            "advisory" | "ignore" => Ok(ExpiryPolicy::Advisory),
            _ => Err(CacheError::Config(format!(
                "unknown expiry policy: {}. Valid policies: enforce, advisory",
                s
            ))),
        }
    }
}

// == Memory Driver ==
/// In-process cache driver.
///
/// Reads take the shared lock and writes the exclusive one; every hold is a
/// single map operation, except `purge_expired` which scans the map.
#[derive(Debug, Default)]
pub struct MemoryDriver {
    /// Key-value storage
    store: RwLock<HashMap<String, CacheEntry>>,
    /// Read-time expiry handling
    policy: ExpiryPolicy,
    /// Hit/miss/expiry counters
    stats: StatsRecorder,
}

impl MemoryDriver {
    // == Constructor ==
    /// Creates an empty driver that enforces expiry on read.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty driver with the given expiry policy.
    pub fn with_policy(policy: ExpiryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// Removes `key` only if it is still expired at `now`.
    ///
    /// The entry may have been replaced between releasing the read lock and
    /// taking the write lock, so expiry is checked again here.
    fn evict_if_expired(&self, key: &str, now: i64) {
        let mut store = self.store.write();
        if store.get(key).is_some_and(|entry| entry.is_expired_at(now)) {
            store.remove(key);
            self.stats.record_expired(1);
            debug!("Evicted expired key: {}", key);
        }
    }
}

impl Driver for MemoryDriver {
    // == Get ==
    fn get(&self, key: &str) -> Option<Value> {
        let now = current_timestamp();

        {
            let store = self.store.read();
            match store.get(key) {
                None => {
                    self.stats.record_miss();
                    return None;
                }
                Some(entry)
                    if self.policy == ExpiryPolicy::Advisory || !entry.is_expired_at(now) =>
                {
                    self.stats.record_hit();
                    return Some(entry.value.clone());
                }
                Some(_) => {}
            }
        }

        self.evict_if_expired(key, now);
        self.stats.record_miss();
        None
    }

    // == Put ==
    fn put(&self, key: &str, value: Value, ttl_secs: i64) {
        let entry = CacheEntry::new(value, ttl_secs);
        self.store.write().insert(key.to_string(), entry);
        debug!("Stored key: {} (ttl={}s)", key, ttl_secs.max(0));
    }

    // == Remove ==
    fn remove(&self, key: &str) {
        if self.store.write().remove(key).is_some() {
            debug!("Removed key: {}", key);
        }
    }

    // == Clear ==
    fn clear(&self) {
        let mut store = self.store.write();
        let count = store.len();
        *store = HashMap::new();
        debug!("Cleared {} entries", count);
    }

    // == Purge Expired ==
    fn purge_expired(&self) -> usize {
        let now = current_timestamp();
        let mut store = self.store.write();
        let before = store.len();
        store.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - store.len();

        self.stats.record_expired(removed);
        removed
    }

    fn stats(&self) -> Option<CacheStats> {
        Some(self.stats.snapshot(self.len()))
    }
}
