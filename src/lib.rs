//! # bucketkv
//!
//! A persistent key-value cache backed directly by the filesystem:
//! - Keys are hashed (MD5) and sharded into a hex-nibble directory tree
//! - Each shard is one small MessagePack "bucket" file
//! - Atomic bucket replacement (temp file + rename)
//! - Per-shard locking for concurrent use within a process
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Cache                              │
//! │          set_item / get_item / has_item / remove_item       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ key
//!                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Shard                               │
//! │      KeyDigest (md5) → ShardResolver (path) → ShardLocks    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ {base}/0/9/8.pack
//!                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Bucket                               │
//! │        BucketStore: load → scan/mutate → save/delete        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use bucketkv::Cache;
//!
//! # fn main() -> bucketkv::Result<()> {
//! let cache = Cache::open_path("/tmp/bucketkv")?;
//!
//! cache.set_item("greeting", "hello")?;
//! assert_eq!(cache.get_item::<String>("greeting")?, Some("hello".to_string()));
//!
//! cache.remove_item("greeting")?;
//! assert!(!cache.has_item("greeting"));
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod shard;
pub mod bucket;
pub mod cache;

mod value;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CacheError, Result};
pub use config::{Config, SyncStrategy};
pub use cache::Cache;
pub use serde_json::Value;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of bucketkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
