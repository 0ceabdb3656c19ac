//! RNG module - 7-bag piece sequencing
//!
//! Every bag holds one of each kind in a uniformly shuffled order. Kinds are
//! drawn from the bag until it is empty, and only then is a whole fresh bag
//! shuffled in. No kind can therefore repeat before all seven have appeared.
//!
//! Shuffling uses a seeded LCG so sessions are reproducible from their seed.

use crate::types::{PieceKind, PREVIEW_LEN};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is an alias for 1.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

fn shuffled_bag(rng: &mut SimpleRng) -> [PieceKind; 7] {
    let mut bag = PieceKind::ALL;
    rng.shuffle(&mut bag);
    bag
}

/// 7-bag piece sequencer
#[derive(Debug, Clone)]
pub struct PieceQueue {
    bag: [PieceKind; 7],
    /// Next undrawn slot; 7 means the bag is empty.
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create an empty queue; the first draw shuffles the first bag.
    pub fn new(seed: u32) -> Self {
        Self {
            bag: PieceKind::ALL,
            bag_index: 7,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind, refilling with a whole fresh bag when empty.
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= 7 {
            self.bag = shuffled_bag(&mut self.rng);
            self.bag_index = 0;
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Discard the rest of the current bag.
    ///
    /// The RNG keeps running, so the next bag is a new permutation.
    pub fn clear(&mut self) {
        self.bag_index = 7;
    }

    /// Kinds left in the current bag, in draw order.
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index.min(7)..]
    }

    /// Peek at the next kind without drawing it.
    pub fn peek(&self) -> PieceKind {
        self.preview()[0]
    }

    /// The next [`PREVIEW_LEN`] kinds, in draw order, without drawing them.
    ///
    /// When the preview runs past the current bag, the next bag is shuffled on
    /// a copy of the RNG, so it matches what later draws will produce.
    pub fn preview(&self) -> [PieceKind; PREVIEW_LEN] {
        let mut out = [PieceKind::I; PREVIEW_LEN];
        let remaining = self.remaining();
        let mut preview_rng = self.rng.clone();
        let mut upcoming = shuffled_bag(&mut preview_rng);
        let mut upcoming_i = 0usize;

        for (i, slot) in out.iter_mut().enumerate() {
            if let Some(&kind) = remaining.get(i) {
                *slot = kind;
            } else {
                if upcoming_i == 7 {
                    upcoming = shuffled_bag(&mut preview_rng);
                    upcoming_i = 0;
                }
                *slot = upcoming[upcoming_i];
                upcoming_i += 1;
            }
        }

        out
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_bag(kinds: &[PieceKind]) {
        assert_eq!(kinds.len(), 7);
        for kind in PieceKind::ALL {
            assert_eq!(
                kinds.iter().filter(|&&k| k == kind).count(),
                1,
                "kind {:?} in {:?}",
                kind,
                kinds
            );
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..=7 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_new_queue_starts_empty() {
        let queue = PieceQueue::new(1);
        assert!(queue.remaining().is_empty());
    }

    #[test]
    fn test_each_bag_has_all_seven() {
        let mut queue = PieceQueue::new(99);
        for _ in 0..10 {
            let bag: Vec<_> = (0..7).map(|_| queue.draw()).collect();
            assert_is_bag(&bag);
        }
    }

    #[test]
    fn test_peek_matches_draw() {
        let mut queue = PieceQueue::new(1);
        for _ in 0..20 {
            let peeked = queue.peek();
            assert_eq!(peeked, queue.draw());
        }
    }

    #[test]
    fn test_preview_crosses_bag_boundary() {
        let mut queue = PieceQueue::new(4242);
        for _ in 0..5 {
            queue.draw();
        }
        assert_eq!(queue.remaining().len(), 2);

        let preview = queue.preview();
        let drawn: Vec<_> = (0..PREVIEW_LEN).map(|_| queue.draw()).collect();
        assert_eq!(preview.as_slice(), drawn.as_slice());
    }

    #[test]
    fn test_clear_discards_partial_bag() {
        let mut queue = PieceQueue::new(3);
        queue.draw();
        queue.draw();
        queue.clear();
        assert!(queue.remaining().is_empty());

        let bag: Vec<_> = (0..7).map(|_| queue.draw()).collect();
        assert_is_bag(&bag);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceQueue::new(2024);
        let mut b = PieceQueue::new(2024);
        for _ in 0..21 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
