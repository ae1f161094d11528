//! Cache Module
//!
//! The caller-facing cache facade and the values it stores.

mod facade;
mod value;


// Re-export public types
pub use facade::Cache;
pub use value::Value;
