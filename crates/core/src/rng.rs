//! RNG module - deterministic piece draws
//!
//! Boards are dealt from a seeded LCG so the same seed always produces the same
//! cube. Draws are uniform over a slice of candidate pieces.

use crate::types::Piece;

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
        // Low bits of an LCG have short periods; draw from the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Pick one element uniformly. `None` for an empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_range(items.len() as u32) as usize;
        Some(items[idx])
    }

    /// Random piece whose palette ordinal is at most `max`, optionally also `Block`.
    ///
    /// `max` is clamped to the last palette entry, so `Empty` is never drawn.
    pub fn random_piece(&mut self, max: usize, include_blocks: bool) -> Piece {
        let pool = draw_pool(max, include_blocks);
        self.choose(&pool).unwrap_or(Piece::Piece1)
    }

    /// Current state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Candidate pieces for a random deal: palette ordinals `0..=max`, plus `Block` on request.
pub fn draw_pool(max: usize, include_blocks: bool) -> Vec<Piece> {
    let last = max.min(Piece::PALETTE.len() - 1);
    let mut pool: Vec<Piece> = Piece::PALETTE[..=last].to_vec();
    if include_blocks {
        pool.push(Piece::Block);
    }
    pool
}
