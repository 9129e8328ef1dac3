use std::{
    sync::atomic::{AtomicU64, Ordering},
    time,
};

use rand::{rngs::StdRng, Rng, SeedableRng};

static SEED_UNIQUIFIER: AtomicU64 = AtomicU64::new(8682522807148012u64);

/// Derives a process-unique seed by mixing an atomic uniquifier with the
/// current wall clock. Two calls never produce the same seed, even within
/// the same nanosecond.
pub fn fresh_seed() -> u64 {
    let seed = SEED_UNIQUIFIER
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |val| {
            Some(val.wrapping_mul(1181783497276652981u64))
        })
        // The closure always returns `Some`, so this is always `Ok`
        .unwrap();

    let nanos = time::SystemTime::now()
        .duration_since(time::SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    seed ^ (nanos >> 8) as u64 ^ nanos as u64
}

/// The only randomness interface the assignment algorithms consume: a
/// uniform draw from `[0, bound)`.
///
/// Any `rand` generator qualifies, so callers can pass a seeded `StdRng`
/// when they need reproducible results.
pub trait RandomSource {
    /// `bound` must be non-zero.
    fn next_bounded(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_bounded(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// A freshly seeded generator for call sites that do not carry their own.
pub fn default_source() -> impl RandomSource {
    StdRng::seed_from_u64(fresh_seed())
}
