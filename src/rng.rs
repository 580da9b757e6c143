use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a random number generator for window sampling.
///
/// `None` gives a fresh generator seeded from entropy, so repeated runs
/// differ; `Some(seed)` gives a deterministic, reproducible stream. An
/// already-built generator can be handed to the sampling methods directly.
pub fn random_number_generator(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
