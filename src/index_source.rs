//! Index sources: the one nondeterministic seam in the crate.
//!
//! Every encoder draws its setup index through [`IndexSource`] instead of
//! touching an RNG directly, so tests script exact indices with
//! [`FixedIndexSource`] and reproduction runs seed [`RandomIndexSource`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Yields one index per call, uniformly over `[0, space)` for the random
/// implementation.
pub trait IndexSource {
    /// Next index in `[0, space)`. `space` is the `len()` of the index the
    /// caller is drawing from and must be positive.
    fn next_index(&mut self, space: u64) -> u64;
}

/// Production source: `SmallRng`, seedable for reproducible sweeps.
pub struct RandomIndexSource {
    rng: SmallRng,
}

impl RandomIndexSource {
    /// OS-entropy seed.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Fixed seed: the same sequence of indices every run.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIndexSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for RandomIndexSource {
    fn next_index(&mut self, space: u64) -> u64 {
        assert!(space > 0, "cannot draw an index from an empty space");
        self.rng.gen_range(0..space)
    }
}

/// Scripted source for tests: yields a fixed sequence of indices, panicking
/// if a drawn index does not fit the space it is drawn for or if the script
/// runs dry.
pub struct FixedIndexSource {
    indices: Vec<u64>,
    cursor: usize,
}

impl FixedIndexSource {
    pub fn new(indices: Vec<u64>) -> Self {
        Self { indices, cursor: 0 }
    }

    /// Number of scripted indices not yet handed out.
    pub fn remaining(&self) -> usize {
        self.indices.len() - self.cursor
    }
}

impl IndexSource for FixedIndexSource {
    fn next_index(&mut self, space: u64) -> u64 {
        assert!(
            self.cursor < self.indices.len(),
            "fixed index script exhausted after {} draws",
            self.cursor
        );
        let index = self.indices[self.cursor];
        self.cursor += 1;
        assert!(
            index < space,
            "scripted index {} out of range for space {}",
            index,
            space
        );
        index
    }
}
