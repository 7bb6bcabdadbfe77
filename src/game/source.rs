use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks which shape of the configured set spawns next.
pub trait ShapeSource {
    /// Returns an index in `0..count`. `count` is never zero.
    fn next_shape_index(&mut self, count: usize) -> usize;
}

/// Uniform choice over the shape set.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeSource for RandomSource {
    fn next_shape_index(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

/// Replays a fixed list of indices, wrapping around at the end.
pub struct SequenceSource {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }
}

impl ShapeSource for SequenceSource {
    fn next_shape_index(&mut self, count: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % count
    }
}
