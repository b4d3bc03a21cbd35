//! Configuration for bucketkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::shard::DEFAULT_DEPTH;

/// Main configuration for a cache instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all bucket files
    /// Internal structure (depth 3):
    ///   {base_dir}/
    ///     └── 0/
    ///         └── 9/
    ///             └── 8.pack
    pub base_dir: PathBuf,

    /// Number of hex-nibble path segments per bucket file.
    /// Clamped to [2, 5] when the cache is opened.
    pub depth: usize,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// Whether bucket writes are fsynced before being renamed into place
    pub sync_strategy: SyncStrategy,
}

/// Bucket write sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Atomic rename only; contents may still sit in the page cache
    None,

    /// fsync the temporary file before renaming it over the bucket
    EveryWrite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./bucketkv_data"),
            depth: DEFAULT_DEPTH,
            sync_strategy: SyncStrategy::None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the base directory (root for all bucket files)
    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.base_dir = path.into();
        self
    }

    /// Set the directory depth (clamped to [2, 5] on open)
    pub fn depth(mut self, depth: usize) -> Self {
        self.config.depth = depth;
        self
    }

    /// Set the bucket write sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
