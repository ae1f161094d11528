//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use chrono::Utc;

use crate::cache::Value;

// == Cache Entry ==
/// Represents a single cache entry with value and expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The stored value
    pub value: Value,
    /// Expiration timestamp (Unix seconds), None = no expiration
    pub expires_at: Option<i64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// A `ttl_secs` of zero or less stores the entry forever.
    pub fn new(value: Value, ttl_secs: i64) -> Self {
        let expires_at = (ttl_secs > 0).then(|| current_timestamp().saturating_add(ttl_secs));

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks expiry against `now` (Unix seconds).
    ///
    /// An entry is expired once `now` is greater than or equal to its
    /// expiration time.
    pub fn is_expired_at(&self, now: i64) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}
