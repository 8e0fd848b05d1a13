pub mod draw;
pub mod roll;

use rand::rngs::StdRng;

/// Seed a random stream, picking a fresh seed when none is given.
/// Returns the seed so it can be printed for replay.
fn rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (tb_core::seeded(seed), seed)
}
