//! Integration Tests for the Cache Facade
//!
//! Exercises registry, facade and drivers through the public API only.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, sleep};
use std::time::Duration;

use mini_cache::driver::CacheStats;
use mini_cache::{
    Cache, CacheConfig, CacheError, Driver, DriverRegistry, ExpiryPolicy, MemoryDriver, Value,
};

// == Helper Types ==

/// Driver that records every call, standing in for an external backend.
#[derive(Debug, Default)]
struct RecordingDriver {
    store: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<String>>,
}

impl RecordingDriver {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Driver for RecordingDriver {
    fn get(&self, key: &str) -> Option<Value> {
        self.record(format!("get {}", key));
        self.store.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, value: Value, ttl_secs: i64) {
        self.record(format!("put {} {}", key, ttl_secs));
        self.store.lock().unwrap().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.record(format!("remove {}", key));
        self.store.lock().unwrap().remove(key);
    }

    fn clear(&self) {
        self.record("clear".to_string());
        self.store.lock().unwrap().clear();
    }
}

// == Helper Functions ==

fn memory_cache() -> Cache {
    Cache::new(&DriverRegistry::new(), CacheConfig::default()).unwrap()
}

// == Registry Tests ==

#[test]
fn test_unregistered_driver_is_rejected() {
    let registry = DriverRegistry::new();

    let err = Cache::new(&registry, CacheConfig::new("memcached")).unwrap_err();

    assert_eq!(err, CacheError::DriverNotRegistered("memcached".to_string()));
    assert!(err.to_string().contains("memcached"));
}

#[test]
fn test_empty_registry_has_no_default() {
    let registry = DriverRegistry::empty();

    assert!(Cache::new(&registry, CacheConfig::default()).is_err());
}

#[test]
fn test_custom_driver_receives_delegated_calls() {
    let driver = Arc::new(RecordingDriver::default());
    let mut registry = DriverRegistry::new();
    registry.register("recording", driver.clone()).unwrap();

    let cache = Cache::new(&registry, CacheConfig::new("recording")).unwrap();
    cache.put("a", 1, 30);
    cache.put_forever("b", "x");
    assert_eq!(cache.pull_string("b"), Some("x".to_string()));
    cache.remove("a");
    cache.clear();

    assert_eq!(
        driver.calls(),
        vec!["put a 30", "put b 0", "get b", "remove b", "remove a", "clear"]
    );
}

#[test]
fn test_custom_driver_has_default_extras() {
    let mut registry = DriverRegistry::empty();
    registry
        .register("recording", Arc::new(RecordingDriver::default()))
        .unwrap();

    let cache = Cache::new(&registry, CacheConfig::new("recording")).unwrap();

    assert_eq!(cache.purge_expired(), 0);
    assert_eq!(cache.stats(), None);
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut registry = DriverRegistry::new();
    registry
        .register("secondary", Arc::new(MemoryDriver::new()))
        .unwrap();

    let err = registry
        .register("secondary", Arc::new(RecordingDriver::default()))
        .unwrap_err();

    assert_eq!(err, CacheError::DriverAlreadyRegistered("secondary".to_string()));
    assert_eq!(registry.names(), vec!["memory", "secondary"]);
}

#[test]
fn test_caches_on_same_driver_share_state() {
    let registry = DriverRegistry::new();
    let first = Cache::new(&registry, CacheConfig::default()).unwrap();
    let second = Cache::new(&registry, CacheConfig::default().with_max_size(10)).unwrap();

    first.put_forever("shared", 1);

    assert_eq!(second.get_int("shared"), Some(1));
}

#[test]
fn test_independent_registries_are_isolated() {
    let a = memory_cache();
    let b = memory_cache();

    a.put_forever("k", "v");

    assert_eq!(b.get("k"), None);
}

// == Facade Scenario ==

#[test]
fn test_end_to_end_scenario() {
    let cache = memory_cache();

    cache.put("a", 42, 0);
    assert_eq!(cache.get_int("a"), Some(42));

    cache.put("b", "x", 5);
    assert_eq!(cache.get_string("b"), Some("x".to_string()));

    cache.remove("a");
    assert_eq!(cache.get("a"), None);

    assert_eq!(cache.pull("b"), Some(Value::from("x")));
    assert_eq!(cache.get("b"), None);
}

#[test]
fn test_json_values_round_trip() {
    let cache = memory_cache();
    let doc = serde_json::json!({"user": "ada", "roles": ["admin"]});

    cache.put_forever("doc", doc.clone());

    assert_eq!(cache.get_typed::<serde_json::Value>("doc"), Some(doc));
    assert_eq!(cache.get_string("doc"), None);
}

// == Expiry Tests ==

#[test]
fn test_enforced_expiry_hides_and_evicts_entry() {
    let registry = DriverRegistry::with_memory_policy(ExpiryPolicy::Enforce);
    let cache = Cache::new(&registry, CacheConfig::default()).unwrap();

    cache.put("short", "value", 2);
    cache.put_forever("long", "value");
    assert_eq!(cache.get_string("short"), Some("value".to_string()));

    // Expiry has whole-second granularity
    sleep(Duration::from_millis(3100));

    assert_eq!(cache.get("short"), None);
    assert_eq!(cache.get_string("long"), Some("value".to_string()));

    let stats = cache.stats().unwrap();
    assert_eq!(stats.expired, 1);
    assert_eq!(stats.total_entries, 1);
}

#[test]
fn test_advisory_expiry_keeps_entry_until_purged() {
    let registry = DriverRegistry::with_memory_policy(ExpiryPolicy::Advisory);
    let cache = Cache::new(&registry, CacheConfig::default()).unwrap();

    cache.put("short", "value", 1);

    sleep(Duration::from_millis(2100));

    assert_eq!(cache.get_string("short"), Some("value".to_string()));
    assert_eq!(cache.purge_expired(), 1);
    assert_eq!(cache.get("short"), None);
}

// == Concurrency Tests ==

#[test]
fn test_concurrent_access_from_many_threads() {
    let cache = memory_cache();
    let mut handles = Vec::new();

    for t in 0..8i64 {
        let cache = cache.clone();
        handles.push(thread::spawn(move || {
            for i in 0..500i64 {
                let key = format!("t{}-{}", t, i % 10);
                cache.put(&key, t * 1000 + i, 0);
                let read = cache.get_int(&key);
                // Only this thread writes its own keys
                assert_eq!(read, Some(t * 1000 + i));
                if i % 7 == 0 {
                    cache.pull(&key);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let stats: CacheStats = cache.stats().unwrap();
    assert!(stats.total_entries <= 80);
    assert_eq!(stats.hits, 8 * 500 + 8 * (500 / 7 + 1));
}

#[test]
fn test_concurrent_remember_is_not_deduplicated() {
    let cache = memory_cache();
    let computations = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(std::sync::Barrier::new(4));
    let mut handles = Vec::new();

    for _ in 0..4 {
        let cache = cache.clone();
        let computations = Arc::clone(&computations);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            cache.remember("slow", 0, || {
                computations.fetch_add(1, Ordering::SeqCst);
                // Hold every caller inside compute until all have missed
                barrier.wait();
                "computed"
            })
        }));
    }

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Value::from("computed"));
    }

    assert_eq!(computations.load(Ordering::SeqCst), 4);
    assert_eq!(cache.get_string("slow"), Some("computed".to_string()));
}
