//! Bucket Module
//!
//! On-disk storage unit: one file per shard holding every entry whose
//! digest shares the shard prefix.
//!
//! ## Responsibilities
//! - Model a bucket as an ordered list of (digest, value) entries
//! - Encode/decode buckets with the MessagePack codec
//! - Load, atomically persist, and delete bucket files
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ MessagePack array (one element per entry)    │
//! │ ┌──────────────────────────────────────────┐ │
//! │ │ array(2)                                 │ │
//! │ │ ┌─────────────────────┬────────────────┐ │ │
//! │ │ │ bin8(16): digest    │ value (any)    │ │ │
//! │ │ └─────────────────────┴────────────────┘ │ │
//! │ └──────────────────────────────────────────┘ │
//! │ ... repeated for each entry ...              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! A missing file and an undecodable file both read as an empty bucket.
//!
//! Values decode into `serde_json::Value`, which cannot hold NaN or
//! ±infinity. A float64 NaN or infinity found in an existing bucket file
//! reads back as `null`, and rewriting that bucket stores the `null`.
//! The cache never writes such floats itself; they are rejected on set.

mod codec;
mod entry;
mod store;

pub use codec::{decode, encode};
pub use entry::{Bucket, Entry};
pub use store::BucketStore;
