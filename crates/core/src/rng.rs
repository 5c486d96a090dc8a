//! RNG module - uniform random piece generation
//!
//! Pieces are drawn independently and uniformly from the catalog; there is no
//! bag. A small LCG keeps games reproducible from a seed.

use crate::piece::{Piece, Tetromino};

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
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Draw one catalog piece uniformly at random
pub fn random_piece(rng: &mut SimpleRng) -> Piece {
    let idx = rng.next_range(Tetromino::ALL.len() as u32) as usize;
    Tetromino::ALL[idx].piece()
}

/// Where the engine gets its next piece from
#[derive(Debug, Clone)]
pub enum PieceSource {
    /// Uniform draws from the catalog
    Random(SimpleRng),
    /// The same piece every time
    Repeat(Piece),
}

impl PieceSource {
    pub fn random(seed: u32) -> Self {
        PieceSource::Random(SimpleRng::new(seed))
    }

    pub fn next_piece(&mut self) -> Piece {
        match self {
            PieceSource::Random(rng) => random_piece(rng),
            PieceSource::Repeat(piece) => piece.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

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
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_random_draws_cover_catalog() {
        let mut source = PieceSource::random(1);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let piece = source.next_piece();
            if !seen.contains(&piece) {
                seen.push(piece);
            }
        }
        assert_eq!(seen.len(), Tetromino::ALL.len());
    }

    #[test]
    fn test_repeat_source() {
        let piece = Piece::single(Color::Green);
        let mut source = PieceSource::Repeat(piece.clone());
        assert_eq!(source.next_piece(), piece);
        assert_eq!(source.next_piece(), piece);
    }
}
