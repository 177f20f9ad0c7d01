use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can pick the hidden number for a session.
pub trait SecretSource {
    /// Draw one value from the closed interval `[1, range_max]`.
    fn draw(&mut self, range_max: u32) -> u32;
}

/// Uniform secrets backed by any `rand` generator.
pub struct RngSecret<R> {
    rng: R,
}

impl<R: Rng> RngSecret<R> {
    pub fn new(rng: R) -> Self {
        RngSecret { rng }
    }
}

impl RngSecret<StdRng> {
    /// Seeded from system entropy, so games differ from run to run.
    pub fn from_entropy() -> Self {
        RngSecret::new(StdRng::from_entropy())
    }

    /// Reproducible sequence of secrets.
    pub fn seeded(seed: u64) -> Self {
        RngSecret::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SecretSource for RngSecret<R> {
    fn draw(&mut self, range_max: u32) -> u32 {
        self.rng.gen_range(1..=range_max)
    }
}
