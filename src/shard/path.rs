//! Shard path resolution
//!
//! Pure digest → path mapping. Performs no I/O.

use std::path::{Path, PathBuf};

use super::{KeyDigest, BUCKET_EXTENSION, MAX_DEPTH, MIN_DEPTH};

/// Clamp a requested depth into [MIN_DEPTH, MAX_DEPTH]
pub fn clamp_depth(requested: usize) -> usize {
    requested.clamp(MIN_DEPTH, MAX_DEPTH)
}

/// Resolves key digests to bucket file paths under a base directory
#[derive(Debug, Clone)]
pub struct ShardResolver {
    /// Root of the bucket tree
    base_dir: PathBuf,
    /// Number of nibble segments (already clamped)
    depth: usize,
}

impl ShardResolver {
    /// Create a resolver; `depth` is clamped to [2, 5]
    pub fn new(base_dir: impl Into<PathBuf>, depth: usize) -> Self {
        Self {
            base_dir: base_dir.into(),
            depth: clamp_depth(depth),
        }
    }

    /// Bucket file path for a digest
    ///
    /// `{base}/{n1}/.../{n(depth-1)}/{n(depth)}.pack`
    pub fn resolve(&self, digest: &KeyDigest) -> PathBuf {
        let mut segments: Vec<char> = digest.nibbles(self.depth).map(nibble_char).collect();
        let last = segments.pop().unwrap_or('0');

        let mut path = self.base_dir.clone();
        for segment in segments {
            path.push(segment.to_string());
        }
        path.push(format!("{}.{}", last, BUCKET_EXTENSION));
        path
    }

    /// Numeric value of the first `depth` nibbles.
    ///
    /// Two digests land in the same bucket file iff their indexes match.
    pub fn shard_index(&self, digest: &KeyDigest) -> u32 {
        digest
            .nibbles(self.depth)
            .fold(0u32, |acc, n| (acc << 4) | u32::from(n))
    }

    /// Total number of distinct bucket files at this depth.
    ///
    /// Public convenience for sizing and diagnostics; not used internally.
    pub fn shard_count(&self) -> u32 {
        1 << (4 * self.depth)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Lowercase hex digit for a nibble (0..16)
fn nibble_char(nibble: u8) -> char {
    // nibbles are masked to 4 bits, so from_digit cannot fail
    char::from_digit(u32::from(nibble), 16).unwrap_or('0')
}
