//! Deterministic generator for the scrambling transform
//!
//! Scrambled images can only be restored when the exact same sequence of
//! draws is replayed, so the generator is part of the data format. This is
//! a 48-bit linear congruential generator with the constants and bounded
//! draw procedure of `java.util.Random`:
//!
//! - state update: `state = (state * 0x5DEECE66D + 0xB) mod 2^48`
//! - seeding: `state = (seed ^ 0x5DEECE66D) mod 2^48`, with a 32-bit seed
//!   sign-extended first
//! - `next(bits)`: the top `bits` bits of the new state
//! - bounded draw: power-of-two bounds take the high bits of `next(31)`,
//!   other bounds use rejection sampling on `next(31)`
//!
//! Images scrambled by other implementations of that algorithm descramble
//! here, and vice versa.

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Seeded 48-bit LCG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleRng {
    state: u64,
}

impl ScrambleRng {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: i32) -> Self {
        Self::from_seed(seed as i64)
    }

    /// Create a generator from a 64-bit seed (only the low 48 bits matter).
    pub fn from_seed(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
        }
    }

    fn next(&mut self, bits: u32) -> i32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(ADDEND)
            & MASK;
        (self.state >> (48 - bits)) as u32 as i32
    }

    /// Next uniformly distributed 32-bit value.
    pub fn next_int(&mut self) -> i32 {
        self.next(32)
    }

    /// Next value uniformly distributed in `[0, bound)`.
    ///
    /// Returns `None` if `bound` is not positive.
    pub fn next_bounded(&mut self, bound: i32) -> Option<i32> {
        if bound <= 0 {
            return None;
        }

        if bound & (bound - 1) == 0 {
            return Some(((bound as i64 * self.next(31) as i64) >> 31) as i32);
        }

        loop {
            let bits = self.next(31);
            let val = bits % bound;
            // Reject draws from the incomplete final bucket
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return Some(val);
            }
        }
    }

    /// Next value in `[0, 256)`, the draw used per sample when scrambling.
    #[inline]
    pub fn next_byte(&mut self) -> i32 {
        ((256_i64 * self.next(31) as i64) >> 31) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_first_int() {
        assert_eq!(ScrambleRng::new(0).next_int(), -1155484576);
        assert_eq!(ScrambleRng::new(42).next_int(), -1170105035);
    }

    #[test]
    fn test_reference_bytes() {
        let mut rng = ScrambleRng::new(0);
        let draws: Vec<i32> = (0..5).map(|_| rng.next_byte()).collect();
        assert_eq!(draws, vec![187, 212, 61, 155, 163]);
    }

    #[test]
    fn test_reference_bounded_non_power_of_two() {
        let mut rng = ScrambleRng::new(42);
        let draws: Vec<i32> = (0..5).map(|_| rng.next_bounded(10).unwrap()).collect();
        assert_eq!(draws, vec![0, 3, 8, 4, 0]);
    }

    #[test]
    fn test_next_byte_matches_bounded_256() {
        let mut a = ScrambleRng::new(-99);
        let mut b = ScrambleRng::new(-99);
        for _ in 0..100 {
            assert_eq!(a.next_byte(), b.next_bounded(256).unwrap());
        }
    }

    #[test]
    fn test_invalid_bound() {
        let mut rng = ScrambleRng::new(1);
        assert_eq!(rng.next_bounded(0), None);
        assert_eq!(rng.next_bounded(-5), None);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ScrambleRng::new(1234);
        let mut b = ScrambleRng::new(1234);
        for _ in 0..50 {
            assert_eq!(a.next_int(), b.next_int());
        }
    }
}
