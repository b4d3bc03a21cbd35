//! Tests for KeyDigest
//!
//! These tests verify:
//! - Known MD5 vectors
//! - Determinism and fixed length
//! - Nibble extraction order

use bucketkv::shard::{KeyDigest, DIGEST_LEN};

// =============================================================================
// Known Vectors
// =============================================================================

#[test]
fn test_digest_known_vectors() {
    assert_eq!(KeyDigest::of("test").to_hex(), "098f6bcd4621d373cade4e832627b4f6");
    assert_eq!(KeyDigest::of("").to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(KeyDigest::of("hello").to_hex(), "5d41402abc4b2a76b9719d911017c592");
}

#[test]
fn test_display_matches_hex() {
    let digest = KeyDigest::of("test");
    assert_eq!(digest.to_string(), digest.to_hex());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_digest_is_deterministic() {
    assert_eq!(KeyDigest::of("some key"), KeyDigest::of("some key"));
    assert_ne!(KeyDigest::of("some key"), KeyDigest::of("some key "));
}

#[test]
fn test_digest_fixed_length_for_any_key() {
    let long = "x".repeat(10_000);
    for key in ["", "a", "日本語のキー", long.as_str()] {
        let digest = KeyDigest::of(key);
        assert_eq!(digest.as_bytes().len(), DIGEST_LEN);
        assert_eq!(digest.to_hex().len(), DIGEST_LEN * 2);
    }
}

#[test]
fn test_from_bytes_round_trip() {
    let digest = KeyDigest::of("test");
    assert_eq!(KeyDigest::from_bytes(*digest.as_bytes()), digest);
}

// =============================================================================
// Nibbles
// =============================================================================

#[test]
fn test_nibbles_of_known_digest() {
    // 098f6bcd...
    let digest = KeyDigest::of("test");
    let nibbles: Vec<u8> = digest.nibbles(6).collect();
    assert_eq!(nibbles, vec![0x0, 0x9, 0x8, 0xf, 0x6, 0xb]);
}

#[test]
fn test_last_nibble() {
    // ...2627b4f6
    let digest = KeyDigest::of("test");
    assert_eq!(digest.nibble(DIGEST_LEN * 2 - 1), Some(0x6));
}

#[test]
fn test_nibble_past_end_is_none() {
    let digest = KeyDigest::of("test");
    assert_eq!(digest.nibble(DIGEST_LEN * 2), None);
    assert_eq!(digest.nibbles(DIGEST_LEN * 2 + 5).count(), DIGEST_LEN * 2);
}
