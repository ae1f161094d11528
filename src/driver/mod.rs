//! Driver Module
//!
//! The storage backend contract, the name-based driver registry and the
//! built-in in-memory driver.

mod entry;
mod memory;
mod registry;
mod stats;

use std::fmt::Debug;

use crate::cache::Value;

// Re-export public types
pub use entry::{current_timestamp, CacheEntry};
pub use memory::{ExpiryPolicy, MemoryDriver};
pub use registry::DriverRegistry;
pub use stats::{CacheStats, StatsRecorder};

// == Public Constants ==
/// Name the built-in in-memory driver is registered under
pub const MEMORY_DRIVER: &str = "memory";

// == Driver Trait ==
/// Storage backend behind a [`crate::Cache`].
///
/// Implementations are shared as `Arc<dyn Driver>` and called from many
/// threads at once, so every method takes `&self`. None of the operations
/// can fail: a miss is `None`, removing an absent key is a no-op.
pub trait Driver: Send + Sync + Debug {
    /// Returns the value stored under `key` if a live entry exists.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any prior entry.
    ///
    /// `ttl_secs <= 0` stores the entry forever.
    fn put(&self, key: &str, value: Value, ttl_secs: i64);

    /// Removes the entry for `key`, if any.
    fn remove(&self, key: &str);

    /// Removes every entry.
    fn clear(&self);

    /// Drops all expired entries and returns how many were removed.
    ///
    /// Drivers whose backend expires entries on its own keep the default.
    fn purge_expired(&self) -> usize {
        0
    }

    /// Returns a counters snapshot, if the driver keeps any.
    fn stats(&self) -> Option<CacheStats> {
        None
    }
}
