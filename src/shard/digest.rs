//! Key digests
//!
//! MD5 is used for shard distribution and in-bucket equality only.
//! It is not a security boundary.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Digest length in bytes
pub const DIGEST_LEN: usize = 16;

/// Fixed-length digest of a cache key
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyDigest([u8; DIGEST_LEN]);

impl KeyDigest {
    /// Digest the UTF-8 bytes of a key
    pub fn of(key: &str) -> Self {
        Self(md5::compute(key.as_bytes()).0)
    }

    /// Wrap raw digest bytes
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// The `index`-th hex nibble, most significant first.
    ///
    /// `None` past the last nibble (`index >= 2 * DIGEST_LEN`).
    pub fn nibble(&self, index: usize) -> Option<u8> {
        let byte = *self.0.get(index / 2)?;
        Some(if index % 2 == 0 { byte >> 4 } else { byte & 0x0f })
    }

    /// The first `count` nibbles, fewer if `count` exceeds the digest
    pub fn nibbles(&self, count: usize) -> impl Iterator<Item = u8> + '_ {
        (0..count).map_while(move |i| self.nibble(i))
    }

    /// Lowercase hex representation (32 chars)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for KeyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for KeyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyDigest({})", self.to_hex())
    }
}

// =============================================================================
// Serde
// =============================================================================
//
// Digests travel as a MessagePack `bin` payload, the same shape existing
// bucket files use. Sequences of integers are accepted too so that
// non-binary codecs still round-trip.

impl Serialize for KeyDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for KeyDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(DigestVisitor)
    }
}

struct DigestVisitor;

impl<'de> Visitor<'de> for DigestVisitor {
    type Value = KeyDigest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digest bytes", DIGEST_LEN)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<KeyDigest, E> {
        let bytes: [u8; DIGEST_LEN] = v
            .try_into()
            .map_err(|_| E::invalid_length(v.len(), &self))?;
        Ok(KeyDigest(bytes))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<KeyDigest, A::Error> {
        let mut bytes = [0u8; DIGEST_LEN];
        for (i, slot) in bytes.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(DIGEST_LEN + 1, &self));
        }
        Ok(KeyDigest(bytes))
    }
}
