//! Tests for concurrent access
//!
//! These tests verify:
//! - Concurrent writers to one bucket file never lose updates
//! - Readers never observe a partially written bucket

use std::sync::Arc;
use std::thread;

use bucketkv::{Cache, Config};
use serde_json::json;
use tempfile::TempDir;

use super::colliding_keys;

fn setup_shared_cache(depth: usize) -> (TempDir, Arc<Cache>) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .base_dir(temp_dir.path())
        .depth(depth)
        .build();
    (temp_dir, Arc::new(Cache::open(config).unwrap()))
}

#[test]
fn test_cache_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cache>();
}

#[test]
fn test_concurrent_writers_same_bucket() {
    let (_temp, cache) = setup_shared_cache(2);
    let keys = colliding_keys(&cache, 8);

    let handles: Vec<_> = keys
        .iter()
        .cloned()
        .map(|key| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for round in 0..20 {
                    cache.set_item(&key, &json!({"key": key, "round": round})).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for key in &keys {
        assert_eq!(cache.get(key), Some(json!({"key": key, "round": 19})));
    }
}

#[test]
fn test_concurrent_set_and_remove_same_bucket() {
    let (_temp, cache) = setup_shared_cache(2);
    let keys = colliding_keys(&cache, 4);
    let (kept, churned) = keys.split_at(2);

    for key in kept {
        cache.set_item(key, "kept").unwrap();
    }

    let handles: Vec<_> = churned
        .iter()
        .cloned()
        .map(|key| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for _ in 0..25 {
                    cache.set_item(&key, "temp").unwrap();
                    cache.remove_item(&key).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for key in kept {
        assert_eq!(cache.get_item::<String>(key).unwrap().as_deref(), Some("kept"));
    }
    for key in churned {
        assert!(!cache.has_item(key));
    }
}

#[test]
fn test_readers_see_complete_buckets() {
    let (_temp, cache) = setup_shared_cache(2);
    let keys = colliding_keys(&cache, 2);
    let (reader_key, writer_key) = (keys[0].clone(), keys[1].clone());

    cache.set_item(&reader_key, "stable").unwrap();

    let writer = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
            for i in 0..200 {
                cache.set_item(&writer_key, &"x".repeat(i * 10)).unwrap();
            }
        })
    };

    for _ in 0..200 {
        assert_eq!(cache.get(&reader_key), Some(json!("stable")));
    }

    writer.join().unwrap();
}

#[test]
fn test_parallel_writers_distinct_keys() {
    let (_temp, cache) = setup_shared_cache(3);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..50 {
                    cache.set_item(&format!("t{}-k{}", t, i), &i).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..8 {
        for i in 0..50 {
            assert_eq!(cache.get(&format!("t{}-k{}", t, i)), Some(json!(i)));
        }
    }
}
