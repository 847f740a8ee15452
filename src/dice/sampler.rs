//! Random sources for dice
//!
//! Everything that rolls goes through [`Sampler`], so callers can swap the
//! thread RNG for a seeded or fully scripted source.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A uniform integer source over `[1, sides]`
pub trait Sampler {
    /// Draw one value in `[1, sides]`. `sides` is always at least 1.
    fn sample(&mut self, sides: u32) -> u32;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self, sides: u32) -> u32 {
        (**self).sample(sides)
    }
}

/// Sampler backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<ThreadRng> {
    /// The thread-local generator
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSampler<StdRng> {
    /// A reproducible generator for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RngSampler<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn sample(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides)
    }
}

/// The default sampler used by [`DiceResult::roll`](super::DiceResult::roll)
pub type ThreadSampler = RngSampler<ThreadRng>;

/// Always lands in the middle of the die: `sides / 2 + 1`
///
/// Matches a generator pinned at 0.5, so a d6 gives 4 and a d20 gives 11.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidpointSampler;

impl Sampler for MidpointSampler {
    fn sample(&mut self, sides: u32) -> u32 {
        sides / 2 + 1
    }
}

/// Replays a fixed list of values, wrapping around at the end
///
/// Values are clamped into `[1, sides]`. An empty script always yields 1.
#[derive(Debug, Clone, Default)]
pub struct SequenceSampler {
    values: Vec<u32>,
    next: usize,
    drawn: usize,
}

impl SequenceSampler {
    /// Create a sampler that replays `values` in order
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
            drawn: 0,
        }
    }

    /// Number of values handed out so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl Sampler for SequenceSampler {
    fn sample(&mut self, sides: u32) -> u32 {
        self.drawn += 1;
        let Some(&value) = self.values.get(self.next) else {
            return 1;
        };
        self.next = (self.next + 1) % self.values.len();
        value.clamp(1, sides)
    }
}
