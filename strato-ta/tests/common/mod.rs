use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; `RUST_LOG=strato_ta=debug` shows
/// the indicator logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Seeded random walk starting at `start`, with steps in `(-2, 2)`.
#[allow(dead_code)]
pub fn random_walk(seed: u64, len: usize, start: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price = start;
    (0..len)
        .map(|_| {
            price += rng.gen_range(-2.0..2.0);
            price
        })
        .collect()
}
