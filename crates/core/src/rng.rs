//! Session-owned randomness. Each session carries its own seeded generator
//! so maze generation and minotaur decisions replay identically for a given
//! seed; tests construct one with [`GameRng::seeded`].

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn uniform(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = i64::from(max) - i64::from(min) + 1;
        min + (self.inner.next_u64() % span as u64) as i32
    }

    /// Uniform index into a non-empty slice of length `len`.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.inner.next_u64() % len as u64) as usize
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.index(items.len())])
    }
}
