//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal C PCG32 implementation from <https://www.pcg-random.org/> written against the [rand_core] traits, with the reference stream constant.
//!
//! PCG32 is used as the source of (pseudo)random numbers for decisions as it is small, fast, and deterministic across platforms given a seed --- so a solve is reproducible from its configuration alone.

use rand_core::{impls, RngCore, SeedableRng};

/// State and increment of a PCG32 generator.
#[derive(Default)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

/// The stream constant of the reference implementation, forced odd.
const INCREMENT: u64 = 1442695040888963407 | 1;

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}
