//! Settings fingerprint: field hashing and the memo cell.
//!
//! The renderer uses a single integer to answer "did anything visually
//! relevant change since the last draw" without deep-comparing fields.
//! Field hashes are folded into a seeded accumulator with a fixed odd
//! multiplier; the result is memoized until a render-affecting setter
//! invalidates it.

use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::constants::{FINGERPRINT_MULTIPLIER, FINGERPRINT_SEED};

/// Intrinsic hash of one field value.
pub fn hash_field<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Intrinsic hash of a float field, via its bit pattern.
pub fn hash_f64(value: f64) -> u64 {
    hash_field(&value.to_bits())
}

/// Folds one field hash into the accumulator.
pub fn combine(accumulator: u64, field_hash: u64) -> u64 {
    accumulator
        .wrapping_mul(FINGERPRINT_MULTIPLIER)
        .wrapping_add(field_hash)
}

/// Combines field hashes in order, starting from the fixed seed.
pub fn combine_all(field_hashes: &[u64]) -> u64 {
    field_hashes
        .iter()
        .fold(FINGERPRINT_SEED, |acc, h| combine(acc, *h))
}

/// Memo cell for the computed fingerprint.
///
/// The stale state is an explicit `None`, not a zero sentinel, so a
/// legitimately-zero hash stays cached. `Cell` keeps reads `&self` while
/// making the owning model `!Sync`; access is single-threaded by contract.
#[derive(Debug, Default)]
pub struct FingerprintCache {
    value: Cell<Option<u64>>,
}

impl FingerprintCache {
    /// Creates a stale cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value, computing and storing it first if stale.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> u64) -> u64 {
        match self.value.get() {
            Some(cached) => cached,
            None => {
                let computed = compute();
                self.value.set(Some(computed));
                computed
            }
        }
    }

    /// Marks the cache stale; the next read recomputes.
    pub fn invalidate(&self) {
        self.value.set(None);
    }

    /// True if a value is currently cached.
    pub fn is_cached(&self) -> bool {
        self.value.get().is_some()
    }
}
