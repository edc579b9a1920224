use crate::gameplay::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Computer opponent. Throws uniformly at random, independent across rounds.
///
/// Generic over the random source so tests can replay a match exactly.
#[derive(Debug, Clone)]
pub struct Cpu<R = SmallRng>
where
    R: Rng,
{
    rng: R,
}

impl<R> Cpu<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
    pub fn throw(&mut self) -> Choice {
        match self.rng.random_range(0..3u8) {
            0 => Choice::Rock,
            1 => Choice::Paper,
            _ => Choice::Scissors,
        }
    }
}

impl Cpu<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl From<Option<u64>> for Cpu<SmallRng> {
    /// Seeded when given a seed, fresh OS entropy otherwise.
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(SmallRng::from_rng(&mut rand::rng())),
        }
    }
}
