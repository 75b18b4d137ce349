//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the seven kinds with equal probability; there is
//! no bag, so repeats are possible. The generator is a small LCG seeded once
//! per session, either from the wall clock or from a fixed seed for
//! deterministic tests.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the current wall-clock time
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG are weak; use the high half.
        (self.next_u32() >> 16) % max
    }
}

/// Seed mixed from the wall clock: seconds XOR nanoseconds, plus calendar seconds.
pub fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs();
    let nanos = u64::from(now.subsec_nanos());
    let mixed = (secs ^ nanos).wrapping_add(secs);
    (mixed ^ (mixed >> 32)) as u32
}

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
}

impl PieceGenerator {
    /// Create a generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Create a generator seeded from the wall clock
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Draw a uniformly random piece kind
    pub fn draw(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[index]
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        for _ in 0..8 {
            assert_eq!(zero.next_u32(), one.next_u32());
        }
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_generator_same_seed_same_sequence() {
        let mut a = PieceGenerator::new(42);
        let mut b = PieceGenerator::new(42);
        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_generator_eventually_draws_every_kind() {
        let mut generator = PieceGenerator::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[generator.draw().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "kinds seen: {:?}", seen);
    }
}
