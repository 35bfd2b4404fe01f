//! Caller-owned generator state

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Seedable source for every generation and shuffling function
///
/// There is no process-wide generator; each context is independent, so
/// tests and threads get isolation by owning their own context.
#[derive(Debug, Clone)]
pub struct RandomContext {
    rng: StdRng,
}

impl RandomContext {
    /// Seeded from operating-system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic context; the same seed reproduces the same sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn set_seed(&mut self, seed: u64) {
        debug!("Reseeding random context with {}", seed);
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn set_seed_random(&mut self) {
        debug!("Reseeding random context from entropy");
        self.rng = StdRng::from_entropy();
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for RandomContext {
    fn default() -> Self {
        Self::new()
    }
}
