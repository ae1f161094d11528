//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror. Only configuration
//! problems are errors; cache misses are reported as `None`.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for driver registration, resolution and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No driver is registered under the requested name
    #[error("cache driver '{0}' is not registered")]
    DriverNotRegistered(String),

    /// A driver is already registered under this name
    #[error("cache driver '{0}' is already registered")]
    DriverAlreadyRegistered(String),

    /// Driver name is empty or blank
    #[error("cache driver name must not be empty")]
    InvalidDriverName,

    /// Invalid configuration value
    #[error("invalid cache configuration: {0}")]
    Config(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache facade.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_driver() {
        let err = CacheError::DriverNotRegistered("redis".to_string());
        assert_eq!(err.to_string(), "cache driver 'redis' is not registered");

        let err = CacheError::DriverAlreadyRegistered("memory".to_string());
        assert_eq!(err.to_string(), "cache driver 'memory' is already registered");
    }
}
