use std::hash::{BuildHasherDefault, Hasher};

use crate::*;

pub const DJB2_SEED: u16 = 5381;
const DJB2_FACTOR: u16 = 33;

/// Bernstein's multiplicative string hash: `h = h * 33 + byte`, seeded with 5381.
///
/// Arithmetic wraps at the width of the requested output type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Djb2;

impl<H: HashValue> HashFunction<H> for Djb2 {
  fn hash(&self, bytes: &[u8]) -> H {
    bytes
      .iter()
      .fold(<H as From<u16>>::from(DJB2_SEED), |hash, &byte| fold_byte(hash, byte))
  }
}

#[inline(always)]
fn fold_byte<H: HashValue>(hash: H, byte: u8) -> H {
  hash
    .wrapping_mul(&<H as From<u16>>::from(DJB2_FACTOR))
    .wrapping_add(&<H as From<u16>>::from(byte as u16))
}

/// [`Djb2`] as a streaming [`Hasher`], so it can back std hash maps.
#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher {
  state: u64,
}

impl Default for Djb2Hasher {
  fn default() -> Self {
    Self {
      state: DJB2_SEED as u64,
    }
  }
}

impl Hasher for Djb2Hasher {
  fn finish(&self) -> u64 {
    self.state
  }

  fn write(&mut self, bytes: &[u8]) {
    self.state = bytes
      .iter()
      .fold(self.state, |hash, &byte| fold_byte(hash, byte));
  }
}

pub type Djb2BuildHasher = BuildHasherDefault<Djb2Hasher>;
