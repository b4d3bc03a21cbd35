//! Bucket Store
//!
//! Loads, persists, and deletes bucket files.
//!
//! ## Failure Policy
//! - `load` never fails: a missing, unreadable, or undecodable file is an
//!   empty bucket
//! - `save` and `delete` propagate every I/O error except deleting a file
//!   that is already gone

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, trace, warn};

use crate::config::SyncStrategy;
use crate::error::Result;

use super::{codec, Bucket};

/// Reads and writes bucket files
#[derive(Debug, Clone, Copy)]
pub struct BucketStore {
    sync_strategy: SyncStrategy,
}

impl BucketStore {
    pub fn new(sync_strategy: SyncStrategy) -> Self {
        Self { sync_strategy }
    }

    /// Load the bucket at `path`
    ///
    /// Corruption is indistinguishable from absence for the caller; it is
    /// only visible in the logs.
    pub fn load(&self, path: &Path) -> Bucket {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!(path = %path.display(), "bucket file absent");
                return Bucket::new();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable bucket treated as empty");
                return Bucket::new();
            }
        };

        match codec::decode(&bytes) {
            Ok(bucket) => bucket,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    bytes = bytes.len(),
                    error = %e,
                    "undecodable bucket treated as empty"
                );
                Bucket::new()
            }
        }
    }

    /// Persist `bucket` at `path`, replacing any previous file
    ///
    /// Steps:
    /// 1. Create parent directories
    /// 2. Encode and write to a temp file in the same directory, created
    ///    with the same permissions a plain file create would get
    ///    (0o666 minus umask on Unix)
    /// 3. fsync if configured
    /// 4. Rename over the target
    ///
    /// The rename is atomic, so readers see either the old or the new
    /// bucket, never a partial write.
    pub fn save(&self, path: &Path, bucket: &Bucket) -> Result<()> {
        let bytes = codec::encode(bucket)?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut temp = bucket_temp_file(dir)?;
        temp.write_all(&bytes)?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            temp.as_file().sync_all()?;
        }
        temp.persist(path)?;

        debug!(
            path = %path.display(),
            entries = bucket.len(),
            bytes = bytes.len(),
            "bucket written"
        );
        Ok(())
    }

    /// Delete the bucket file at `path`; absent files are not an error
    pub fn delete(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => {
                debug!(path = %path.display(), "bucket deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Temp file for a bucket rewrite.
///
/// tempfile defaults to 0o600; bucket files must stay readable by other
/// users sharing the tree, so request 0o666 and let the umask apply.
fn bucket_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

impl Default for BucketStore {
    fn default() -> Self {
        Self::new(SyncStrategy::None)
    }
}
