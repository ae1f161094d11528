//! Mini Cache - A pluggable key-value cache facade
//!
//! A [`Cache`] resolves a named [`Driver`] from a [`DriverRegistry`] and
//! forwards typed get/put/pull/remember operations to it. The built-in
//! [`MemoryDriver`] keeps entries in a lock-guarded map with optional
//! per-entry expiry.

pub mod cache;
pub mod config;
pub mod driver;
pub mod error;
pub mod shell;
pub mod tasks;

pub use cache::{Cache, Value};
pub use config::CacheConfig;
pub use driver::{Driver, DriverRegistry, ExpiryPolicy, MemoryDriver};
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
