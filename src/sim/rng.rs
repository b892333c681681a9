//! Randomness sources for spawning
//!
//! The spawner only ever asks for "the next uniform float in [0, 1)", so any
//! source implementing that one call can drive it. Production runs use a
//! seeded PCG32 stream; tests feed fixed sequences.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of uniform floats in [0, 1)
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }
}

/// Seeded PCG32 source (deterministic per seed)
#[derive(Debug, Clone)]
pub struct PcgSource {
    seed: u64,
    rng: Pcg32,
}

impl PcgSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgSource {
    fn next_f32(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Values are clamped into [0, 1) so callers can't break range guarantees
    pub fn new(mut values: Vec<f32>) -> Self {
        if values.is_empty() {
            values.push(0.0);
        }
        for v in &mut values {
            *v = if v.is_finite() {
                v.clamp(0.0, 1.0 - f32::EPSILON)
            } else {
                0.0
            };
        }
        Self { values, cursor: 0 }
    }

    /// Always returns the same value
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg_in_unit_range() {
        let mut rng = PcgSource::new(42);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_pcg_same_seed_same_stream() {
        let mut a = PcgSource::new(7);
        let mut b = PcgSource::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn test_pcg_keeps_seed() {
        let mut rng = PcgSource::new(99);
        rng.next_f32();
        assert_eq!(rng.seed(), 99);
    }

    #[test]
    fn test_sequence_wraps_and_clamps() {
        let mut seq = SequenceSource::new(vec![0.25, 2.0, -1.0]);
        assert_eq!(seq.next_f32(), 0.25);
        assert!(seq.next_f32() < 1.0);
        assert_eq!(seq.next_f32(), 0.0);
        assert_eq!(seq.next_f32(), 0.25);
        assert_eq!(seq.draws(), 4);
    }

    #[test]
    fn test_sequence_empty_yields_zero() {
        let mut seq = SequenceSource::new(Vec::new());
        assert_eq!(seq.next_f32(), 0.0);
    }
}
