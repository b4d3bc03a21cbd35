//! Bucket entries
//!
//! In-memory form of a bucket file. Lives only for the duration of one
//! cache operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shard::KeyDigest;

/// A single cached value and the digest of its key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub digest: KeyDigest,
    pub value: Value,
}

impl Entry {
    pub fn new(digest: KeyDigest, value: Value) -> Self {
        Self { digest, value }
    }
}

/// Ordered entries of one bucket file.
///
/// Holds at most one entry per digest as long as it is only mutated
/// through [`Bucket::upsert`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bucket {
    entries: Vec<Entry>,
}

impl Bucket {
    /// Create an empty bucket
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear scan for a digest
    pub fn position(&self, digest: &KeyDigest) -> Option<usize> {
        self.entries.iter().position(|e| &e.digest == digest)
    }

    /// Value stored under a digest.
    ///
    /// Borrowing lookup for callers inspecting a loaded bucket; the cache
    /// itself moves values out with [`Bucket::remove`].
    pub fn get(&self, digest: &KeyDigest) -> Option<&Value> {
        self.entries
            .iter()
            .find(|e| &e.digest == digest)
            .map(|e| &e.value)
    }

    pub fn contains(&self, digest: &KeyDigest) -> bool {
        self.position(digest).is_some()
    }

    /// Replace the value in place if the digest exists, otherwise append.
    ///
    /// Returns the previous value, if any.
    pub fn upsert(&mut self, digest: KeyDigest, value: Value) -> Option<Value> {
        match self.position(&digest) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].value, value)),
            None => {
                self.entries.push(Entry::new(digest, value));
                None
            }
        }
    }

    /// Remove the entry for a digest, keeping the order of the rest
    pub fn remove(&mut self, digest: &KeyDigest) -> Option<Value> {
        let i = self.position(digest)?;
        Some(self.entries.remove(i).value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order (public convenience for inspection)
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl From<Vec<Entry>> for Bucket {
    /// Wraps entries as-is; duplicates are not collapsed
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}
