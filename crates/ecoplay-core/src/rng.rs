//! Random number generator abstraction for determinism.
//!
//! Engines never reach for a global RNG. Production code injects
//! [`SystemRng`]; tests inject a seeded or scripted implementation.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// An RNG shared between sessions and the content catalog.
pub type SharedRng = Arc<Mutex<dyn DeterministicRng + Send>>;

/// Wraps `rng` in a [`SharedRng`] handle.
pub fn shared<R: DeterministicRng + 'static>(rng: R) -> SharedRng {
    Arc::new(Mutex::new(rng))
}

/// Production RNG wrapping `StdRng`.
#[derive(Debug)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Creates an RNG seeded from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Creates a reproducible RNG from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.0.random_range(min..=max)
    }
}

/// Shuffles `items` in place with a Fisher–Yates pass driven by `rng`.
///
/// Every permutation is equally likely when `rng` is uniform.
#[allow(clippy::cast_possible_truncation)]
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_u32_range(0, i as u32) as usize;
        // Scripted RNGs may return values outside the requested range.
        items.swap(i, j.min(i));
    }
}
