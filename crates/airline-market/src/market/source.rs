use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random stream handed to every generator.
///
/// A seeded source replays the exact same stream on every platform, which is
/// what tests and the `--seed` flag rely on.
pub type MarketRng = ChaCha8Rng;

pub fn seeded(seed: u64) -> MarketRng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn from_entropy() -> MarketRng {
    ChaCha8Rng::from_entropy()
}

/// Builds a seeded stream when a seed is supplied, otherwise draws one from
/// the operating system.
pub fn for_request(seed: Option<u64>) -> MarketRng {
    match seed {
        Some(seed) => seeded(seed),
        None => from_entropy(),
    }
}
