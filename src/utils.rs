// License: MIT

use once_cell::sync::Lazy;

/// 64-bit FNV-1a hash.
///
/// This is the identity test used by every name lookup in the document model
/// (a matching hash is confirmed with a full string comparison before a slot
/// is treated as found).
pub fn fnv1a_64(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
    for b in s.bytes() {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3); // FNV prime
    }
    hash
}

/// Cached hashes of the two boolean keywords, used by value resolution.
pub(crate) static TRUE_HASH: Lazy<u64> = Lazy::new(|| fnv1a_64("true"));
pub(crate) static FALSE_HASH: Lazy<u64> = Lazy::new(|| fnv1a_64("false"));
