//! Seeded random streams.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// One independently seeded random stream.
///
/// A stream is seeded by two `u64` words. The 256-bit `StdRng` seed is laid
/// out as `[a, b, mix(a, b), mix(b, a)]` in little-endian words, where `mix`
/// is [`mix_seed_words`], so swapping the words gives a different stream.
/// Topology and layout share one stream; walks use another.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Single-word seeding, used by tests and benches.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds a stream from the pair `(first, second)`.
    pub fn from_seed_pair(first: u64, second: u64) -> Self {
        let words = [
            first,
            second,
            mix_seed_words(first, second),
            mix_seed_words(second, first),
        ];
        let mut seed = <StdRng as SeedableRng>::Seed::default();
        for (chunk, word) in seed.chunks_exact_mut(8).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self {
            rng: StdRng::from_seed(seed),
        }
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// SipHash-1-3 with zero keys over `(a, b)`. Order sensitive.
pub fn mix_seed_words(a: u64, b: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(a);
    hasher.write_u64(b);
    hasher.finish()
}
