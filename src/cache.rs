//! Cache Module
//!
//! The public cache facade that composes sharding and bucket storage.
//!
//! ## Responsibilities
//! - Digest keys and resolve their bucket files
//! - Run each operation as one load → scan → mutate → persist cycle
//! - Serialize cycles on the same shard within this process
//! - Convert between caller types and stored values

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::bucket::BucketStore;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::shard::{KeyDigest, ShardGuard, ShardLocks, ShardResolver};
use crate::value;

/// Filesystem-backed key-value cache
///
/// ## Concurrency Model
///
/// - Every operation locks the stripe of its shard for the whole
///   read-modify-write sequence, so concurrent writers in one process
///   never lose updates
/// - Operations on different shards run in parallel
/// - Nothing is cached in memory; a second `Cache` (or another process)
///   pointed at the same directory sees every completed write
/// - Writers in different processes are not coordinated
pub struct Cache {
    /// Cache configuration (depth as requested)
    config: Config,

    /// Digest → bucket path mapping (depth clamped)
    resolver: ShardResolver,

    /// Bucket file I/O
    store: BucketStore,

    /// In-process mutual exclusion per shard
    locks: ShardLocks,
}

impl Cache {
    /// Open or create a cache with the given config
    ///
    /// Creates the base directory if it doesn't exist. Depth is clamped
    /// to [2, 5].
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.base_dir)?;

        let resolver = ShardResolver::new(&config.base_dir, config.depth);
        let store = BucketStore::new(config.sync_strategy);

        debug!(
            base_dir = %config.base_dir.display(),
            depth = resolver.depth(),
            "cache opened"
        );

        Ok(Self {
            config,
            resolver,
            store,
            locks: ShardLocks::new(),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified base directory
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder().base_dir(path.as_ref()).build();
        Self::open(config)
    }

    /// Store a value under `key`, replacing any previous value
    ///
    /// Values containing NaN or infinite floats, or maps with non-string
    /// keys, fail with `CacheError::Serialization` before any I/O.
    pub fn set_item<V>(&self, key: &str, value: &V) -> Result<()>
    where
        V: Serialize + ?Sized,
    {
        let value = value::to_value(value)?;
        self.set(key, value)
    }

    /// Store an already-built value under `key`
    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        let (digest, path, _guard) = self.locate(key);

        let mut bucket = self.store.load(&path);
        let replaced = bucket.upsert(digest, value).is_some();
        trace!(%digest, replaced, entries = bucket.len(), "set");

        self.store.save(&path, &bucket)
    }

    /// Fetch the value stored under `key`
    ///
    /// `None` when the key was never written, was removed, or its bucket
    /// file cannot be read or decoded.
    pub fn get(&self, key: &str) -> Option<Value> {
        let (digest, path, _guard) = self.locate(key);

        // The bucket is discarded afterwards, so move the value out
        let mut bucket = self.store.load(&path);
        let value = bucket.remove(&digest);
        trace!(%digest, hit = value.is_some(), "get");
        value
    }

    /// Fetch and convert the value stored under `key`
    ///
    /// Returns `Ok(None)` on a miss. Fails only when a stored value cannot
    /// be converted into `T`.
    pub fn get_item<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.get(key)
            .map(|value| {
                serde_json::from_value(value)
                    .map_err(|e| CacheError::Deserialization(e.to_string()))
            })
            .transpose()
    }

    /// Whether `key` has an entry, regardless of its value (null included)
    pub fn has_item(&self, key: &str) -> bool {
        let (digest, path, _guard) = self.locate(key);
        self.store.load(&path).contains(&digest)
    }

    /// Remove the entry for `key`
    ///
    /// Missing keys are a no-op and leave the filesystem untouched. The
    /// bucket file is deleted once its last entry is removed.
    pub fn remove_item(&self, key: &str) -> Result<()> {
        let (digest, path, _guard) = self.locate(key);

        let mut bucket = self.store.load(&path);
        if bucket.remove(&digest).is_none() {
            trace!(%digest, "remove of absent key");
            return Ok(());
        }

        if bucket.is_empty() {
            self.store.delete(&path)
        } else {
            self.store.save(&path, &bucket)
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the base directory path
    pub fn base_dir(&self) -> &Path {
        self.resolver.base_dir()
    }

    /// Get the effective (clamped) depth
    pub fn depth(&self) -> usize {
        self.resolver.depth()
    }

    /// Get the configuration as supplied to `open`
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the bucket file `key` resolves to (may not exist)
    pub fn bucket_path(&self, key: &str) -> PathBuf {
        self.resolver.resolve(&KeyDigest::of(key))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Digest the key, resolve its bucket, and lock its shard
    fn locate(&self, key: &str) -> (KeyDigest, PathBuf, ShardGuard<'_>) {
        let digest = KeyDigest::of(key);
        let path = self.resolver.resolve(&digest);
        let guard = self.locks.lock(self.resolver.shard_index(&digest));
        (digest, path, guard)
    }
}
