//! Background Tasks Module
//!
//! Contains background tasks that run alongside a cache host.
//!
//! # Tasks
//! - Expiry sweep: purges expired entries from a driver at a fixed interval

mod sweep;

pub use sweep::spawn_sweep_task;
