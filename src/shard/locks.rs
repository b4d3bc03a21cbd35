//! Per-shard write locks
//!
//! A fixed stripe of mutexes indexed by shard. Every operation on a bucket
//! holds its stripe for the whole load → mutate → persist sequence, so two
//! threads touching the same bucket file never interleave. Unrelated shards
//! may share a stripe; that only costs contention, never correctness.
//!
//! Locks are in-process only. Other processes writing the same tree are not
//! coordinated.

use parking_lot::{Mutex, MutexGuard};

/// Number of lock stripes
const STRIPES: usize = 64;

/// Held while a bucket is being read or rewritten
pub type ShardGuard<'a> = MutexGuard<'a, ()>;

/// Striped mutexes keyed by shard index
pub struct ShardLocks {
    stripes: Box<[Mutex<()>]>,
}

impl ShardLocks {
    pub fn new() -> Self {
        Self {
            stripes: (0..STRIPES).map(|_| Mutex::new(())).collect(),
        }
    }

    /// Block until the stripe owning `shard_index` is free
    pub fn lock(&self, shard_index: u32) -> ShardGuard<'_> {
        self.stripes[shard_index as usize % self.stripes.len()].lock()
    }
}

impl Default for ShardLocks {
    fn default() -> Self {
        Self::new()
    }
}
