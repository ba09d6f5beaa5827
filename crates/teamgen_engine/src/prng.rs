//! Frame-stepped pseudo-random number generator.
//!
//! The generator is a 64-bit linear congruential generator whose state is
//! exposed as four 16-bit words (most significant first). Each
//! [`Prng::next_frame`] advances the state by one step; every draw consumes
//! exactly one frame, so a seed fully determines a generation run.

use rand::RngCore;
use serde::{Deserialize, Serialize};

const MULTIPLIER: u64 = 0x5D58_8B65_6C07_8965;
const INCREMENT: u64 = 0x0026_9EC3;

/// A PRNG seed: four 16-bit words, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub [u16; 4]);

impl Seed {
    /// Split a 64-bit state into seed words.
    #[must_use]
    pub const fn from_u64(state: u64) -> Self {
        Self([
            (state >> 48) as u16,
            (state >> 32) as u16,
            (state >> 16) as u16,
            state as u16,
        ])
    }

    /// Join the seed words into a 64-bit state.
    #[must_use]
    pub const fn to_u64(self) -> u64 {
        let [a, b, c, d] = self.0;
        ((a as u64) << 48) | ((b as u64) << 32) | ((c as u64) << 16) | d as u64
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a},{b},{c},{d}")
    }
}

/// The engine's random-number source.
#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
    initial: Seed,
}

impl Prng {
    /// Create a generator from an explicit seed.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            state: seed.to_u64(),
            initial: seed,
        }
    }

    /// Create a generator seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(Seed::from_u64(rand::thread_rng().next_u64()))
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn initial_seed(&self) -> Seed {
        self.initial
    }

    /// The current state.
    #[must_use]
    pub fn seed(&self) -> Seed {
        Seed::from_u64(self.state)
    }

    /// Advance the state by one frame.
    pub fn next_frame(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
    }

    /// Advance one frame and return the upper 32 bits of the new state.
    fn next_u32(&mut self) -> u32 {
        self.next_frame();
        (self.state >> 32) as u32
    }

    /// A float in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// An integer in `[0, bound)`. A zero bound always yields 0.
    pub fn random_below(&mut self, bound: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }

    /// An integer in `[low, high)`.
    pub fn random_range(&mut self, low: u32, high: u32) -> u32 {
        self.random_below(high.saturating_sub(low)) + low
    }

    /// `true` with probability `numerator / denominator`.
    pub fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        self.random_below(denominator) < numerator
    }

    /// A uniformly chosen element, or `None` for an empty slice.
    pub fn sample<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.random_below(u32::try_from(items.len()).unwrap_or(u32::MAX));
        items.get(index as usize)
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let bound = u32::try_from(i + 1).unwrap_or(u32::MAX);
            let j = self.random_below(bound) as usize;
            items.swap(i, j);
        }
    }
}
