//! RNG module - deterministic random numbers for spawning
//!
//! A simple LCG keeps games reproducible from a seed, which the tests and
//! benchmarks rely on. Spawn-cell sampling and spawn-value rolls both draw
//! from the same generator.

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low LCG bits cycle quickly; mix in the high bits first.
        let mixed = self.next_u32() >> 16;
        mixed % max
    }

    /// Roll a percent chance: true with probability `percent`/100
    pub fn roll_percent(&mut self, percent: u8) -> bool {
        self.next_range(100) < percent as u32
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
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
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_roll_percent_extremes() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..100 {
            assert!(!rng.roll_percent(0));
            assert!(rng.roll_percent(100));
        }
    }

    #[test]
    fn test_roll_percent_rate_roughly_matches() {
        let mut rng = SimpleRng::new(2024);
        let hits = (0..10_000).filter(|_| rng.roll_percent(10)).count();
        // 10% +- 3 points over 10k trials
        assert!((700..=1300).contains(&hits), "hits = {}", hits);
    }
}
