//! Bucket codec
//!
//! MessagePack with structs written as arrays, so an entry is the
//! 2-element array `[bin digest, value]` that existing bucket files use.

use crate::error::Result;

use super::Bucket;

/// Encode a bucket to MessagePack bytes
pub fn encode(bucket: &Bucket) -> Result<Vec<u8>> {
    Ok(rmp_serde::to_vec(bucket)?)
}

/// Decode a bucket from MessagePack bytes
pub fn decode(bytes: &[u8]) -> std::result::Result<Bucket, rmp_serde::decode::Error> {
    rmp_serde::from_slice(bytes)
}
