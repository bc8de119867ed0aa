//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - RNG seeding (wall clock)
//! - Storage (LocalStorage on web)

#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Seed from the current time in milliseconds
#[cfg(target_arch = "wasm32")]
pub fn seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Seed from the current time in nanoseconds
#[cfg(not(target_arch = "wasm32"))]
pub fn seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Fresh shuffle RNG seeded from the clock
pub fn new_rng() -> Pcg32 {
    let seed = seed();
    log::debug!("Seeding shuffle RNG with {}", seed);
    Pcg32::seed_from_u64(seed)
}
