//! Shard Module
//!
//! Maps string keys onto bucket files.
//!
//! ## Responsibilities
//! - Derive a fixed-size digest from each key
//! - Resolve a digest to a hierarchical bucket path
//! - Serialize mutations that target the same bucket
//!
//! ## Directory Layout (depth 3)
//! ```text
//! key "test" ──md5──▶ 098f6bcd4621d373cade4e832627b4f6
//!                     │││
//!                     ││└─▶ 8.pack  (last segment + suffix)
//!                     │└──▶ 9/
//!                     └───▶ 0/
//!
//! {base_dir}/0/9/8.pack
//! ```

mod digest;
mod locks;
mod path;

pub use digest::{KeyDigest, DIGEST_LEN};
pub use locks::{ShardGuard, ShardLocks};
pub use path::{clamp_depth, ShardResolver};

// =============================================================================
// Shared Constants
// =============================================================================

/// Smallest allowed directory depth
pub const MIN_DEPTH: usize = 2;

/// Largest allowed directory depth
pub const MAX_DEPTH: usize = 5;

/// Depth used when none is configured
pub const DEFAULT_DEPTH: usize = 3;

/// File extension of every bucket file
pub const BUCKET_EXTENSION: &str = "pack";
