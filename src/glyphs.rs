// Copyright (c) 2026 rezky_nightky

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Seedable uniform sampler over ALPHABET. fork() derives an independent
// child stream so concurrent render tasks never share a generator.
pub struct GlyphSource {
    rng: StdRng,
    rand_idx: Uniform<usize>,
}

impl GlyphSource {
    pub fn from_os_entropy() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            rand_idx: Uniform::new(0, ALPHABET.len()).expect("valid range"),
        }
    }

    pub fn next_glyph(&mut self) -> char {
        ALPHABET[self.rand_idx.sample(&mut self.rng)] as char
    }

    pub fn fork(&mut self) -> GlyphSource {
        GlyphSource::with_seed(self.rng.random())
    }
}
