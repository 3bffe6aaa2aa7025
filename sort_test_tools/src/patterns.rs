use std::env;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::{debug, warn};

/// Base seed of every generator in this module.
///
/// Set `OVERRIDE_SEED=<u64>` to reproduce a run. Otherwise a fresh seed is drawn once per
/// process.
static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = match env::var("OVERRIDE_SEED") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                warn!(raw = %raw, "ignoring unparsable OVERRIDE_SEED");
                thread_rng().gen()
            }
        },
        Err(_) => thread_rng().gen(),
    };

    debug!(seed, "pattern seed");
    seed
});

// Every call gets its own stream, derived from the base seed in call order.
static CALL_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    let call = CALL_COUNT.fetch_add(1, Ordering::Relaxed);
    StdRng::seed_from_u64(random_init_seed().wrapping_add(call))
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Values drawn uniformly from `range`, lower bound inclusive, upper bound exclusive.
///
/// Panics if `range` is empty.
pub fn random_uniform<T>(len: usize, range: Range<T>) -> Vec<T>
where
    T: SampleUniform,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist = Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = zipf::ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort_unstable();
    }

    vals
}
