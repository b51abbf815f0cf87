//! Sample Generation
//!
//! Every trial gets a fresh input: `count` integers drawn independently and
//! uniformly from `[0, bound)`.

use rand::Rng;

/// Default number of integers per trial
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

/// Default exclusive upper bound of generated values
pub const DEFAULT_VALUE_BOUND: i32 = 1000;

/// Draw `count` integers uniformly from `[0, bound)`.
///
/// `bound` must be positive. Debug builds panic otherwise; release builds
/// return an empty sample since the range holds nothing to draw.
pub fn generate_samples<R: Rng + ?Sized>(count: usize, bound: i32, rng: &mut R) -> Vec<i32> {
    debug_assert!(bound > 0, "sample bound must be positive, got {bound}");
    if bound <= 0 {
        return Vec::new();
    }
    (0..count).map(|_| rng.gen_range(0..bound)).collect()
}

/// Reusable generator bound to a sample size, a value range and an RNG
#[derive(Debug)]
pub struct SampleGenerator<R> {
    count: usize,
    bound: i32,
    rng: R,
}

impl<R: Rng> SampleGenerator<R> {
    /// Create a generator producing `count` values in `[0, bound)`
    pub fn new(count: usize, bound: i32, rng: R) -> Self {
        Self { count, bound, rng }
    }

    /// Produce the next sample
    pub fn next_sample(&mut self) -> Vec<i32> {
        generate_samples(self.count, self.bound, &mut self.rng)
    }
}
