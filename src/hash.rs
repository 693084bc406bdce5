//! Key hash codes and the slot-index strategies built on top of them.
//!
//! Every key is first reduced to a 32-bit hash code with [`hash_code`]. A [`SlotHasher`] then maps
//! that code onto a slot of a table holding `2^bits` slots.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hash::{Hash, Hasher};

/// The multiplier used by [`Multiplicative`], equal to 2^32 divided by the golden ratio.
///
/// The golden ratio can be calculated with Python 3 using the following statements:
///
/// ```text
/// from decimal import Decimal
/// golden_ratio = Decimal((Decimal(1.0) + Decimal.sqrt(Decimal(5.0)))/ Decimal(2.0))
/// golden_ratio
/// 1.618033988749894848204586834
/// ```
///
/// For 32-bit values use 2^32 / golden_ratio = 2654435769, which is odd.
pub const HASH_MULTIPLIER: u32 = 2654435769;

/// The prime modulus of the universal hash family.
pub const UNIVERSAL_PRIME: u64 = 1_000_000_007;

/// A deterministic polynomial hasher: `code = code * 31 + byte` over every byte written.
///
/// It starts from zero, so a value which only writes zero bytes (such as `None`) has code 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeHasher {
    code: u32,
}

impl Hasher for CodeHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.code as u64
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.code = self.code.wrapping_mul(31).wrapping_add(*byte as u32);
        }
    }
}

/// Returns the 32-bit hash code of `key`.
#[inline]
pub fn hash_code<K>(key: &K) -> u32
where
    K: Hash + ?Sized,
{
    let mut hasher: CodeHasher = CodeHasher::default();
    key.hash(&mut hasher);
    hasher.finish() as u32
}

/// The absolute value of a hash code read as a signed 32-bit integer.
#[inline]
pub fn magnitude(code: u32) -> u64 {
    (code as i32).unsigned_abs() as u64
}

/// Maps a hash code onto one of `2^bits` slots.
pub trait SlotHasher {
    /// Returns an index in `[0, 2^bits)`.
    fn slot(&self, code: u32, bits: u32) -> usize;
}

/// Multiply-shift hashing: keep the top `bits` bits of `code * HASH_MULTIPLIER mod 2^32`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Multiplicative;

impl SlotHasher for Multiplicative {
    #[inline]
    fn slot(&self, code: u32, bits: u32) -> usize {
        // A single slot table would need a shift by 32.
        code
            .wrapping_mul(HASH_MULTIPLIER)
            .checked_shr(32 - bits)
            .unwrap_or(0) as usize
    }
}

/// `((a * k + b) mod p) mod 2^bits`, with `a` and `b` drawn once per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Universal {
    a: u64,
    b: u64,
    seed: u64,
}

impl Universal {
    /// Draws `a` in `[1, p-1]` and `b` in `[0, p-1]` from a generator seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let a: u64 = rng.gen_range(1..UNIVERSAL_PRIME);
        let b: u64 = rng.gen_range(0..UNIVERSAL_PRIME);
        trace!("universal hash seed {} picked a = {}, b = {}", seed, a, b);
        Universal { a, b, seed }
    }

    /// Picks a fresh seed, then behaves like [`Universal::from_seed`].
    pub fn random() -> Self {
        Self::from_seed(rand::random::<u64>())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn parameters(&self) -> (u64, u64) {
        (self.a, self.b)
    }
}

impl SlotHasher for Universal {
    #[inline]
    fn slot(&self, code: u32, bits: u32) -> usize {
        // a < 2^30 and k <= 2^31, the product stays far below 2^64.
        let k: u64 = magnitude(code);
        (((self.a * k + self.b) % UNIVERSAL_PRIME) % (1u64 << bits)) as usize
    }
}
