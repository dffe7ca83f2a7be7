//! Deterministic random source.
//!
//! Every "random" choice in reelcraft is a pure function of an integer seed. There is no
//! generator state and no cursor: callers derive distinct seeds per purpose (see
//! [`crate::SeedCategory`]) and the same seed always maps to the same value, which keeps frames
//! independently computable in any order and on any thread.

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finalizer.
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Map a seed to a reproducible value in `[0, 1)`.
pub fn random01(seed: u64) -> f64 {
    // 53 bits of precision.
    let v = mix64(seed.wrapping_add(GOLDEN_GAMMA)) >> 11;
    (v as f64) * (1.0 / ((1u64 << 53) as f64))
}

/// Uniform index in `0..len` drawn from `seed`. `len` must be non-zero.
pub fn random_index(seed: u64, len: usize) -> usize {
    debug_assert!(len > 0);
    let i = (random01(seed) * len as f64).floor() as usize;
    i.min(len.saturating_sub(1))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
