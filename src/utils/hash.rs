//! Content hashing helpers built on FxHash.
//!
//! Fast, non-cryptographic. Used to detect changed site data between
//! watch reloads.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Computes a 64-bit FxHash of any hashable value.
pub fn compute<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}
