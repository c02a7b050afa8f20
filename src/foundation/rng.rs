use rand::Rng as _;
use rand::seq::{IndexedRandom as _, SliceRandom as _};
use rand_xoshiro::Xoshiro256StarStar;
use rand_xoshiro::rand_core::SeedableRng as _;

/// Injectable, seedable random source shared by every randomized component.
///
/// Wraps Xoshiro256** so that a session seeded with the same value replays the same stage
/// parameters, permutations and generated content.
#[derive(Clone, Debug)]
pub struct RmxRng {
    inner: Xoshiro256StarStar,
}

impl RmxRng {
    /// Deterministic generator for `seed`.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the thread-local OS-backed source.
    pub fn from_entropy() -> Self {
        Self::seed_from_u64(rand::random())
    }

    /// Generator for a (seed, index) pair. Used to give every block its own
    /// reproducible stream inside one stage activation.
    pub fn derive(seed: u64, index: u64) -> Self {
        Self::seed_from_u64(mix64(seed ^ mix64(index.wrapping_add(0x9E37_79B9_7F4A_7C15))))
    }

    /// Raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.inner.random()
    }

    /// Uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// Uniform value in `[lo, hi)`; returns `lo` for an empty range.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if !(hi > lo) {
            return lo;
        }
        lo + self.unit() * (hi - lo)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.inner.random_range(0..len.max(1))
    }

    /// Uniform integer in `lo..=hi`.
    pub fn int_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }

    /// Bernoulli draw: `true` with probability `p` (clamped to `[0, 1]`).
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() < p.clamp(0.0, 1.0)
    }

    /// `+1.0` or `-1.0` with equal probability.
    pub fn sign(&mut self) -> f64 {
        if self.unit() < 0.5 { 1.0 } else { -1.0 }
    }

    /// Uniformly pick one element.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// SplitMix64 finalizer.
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
