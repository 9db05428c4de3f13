//! Byte buffer hashing behind a small strategy interface.
//!
//! A [`HashFunction`] maps an arbitrary byte slice to an unsigned integer of the
//! caller's choosing. [`Djb2`] is the provided implementation.

use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingMul};

mod djb2;
pub use djb2::*;

/// The value type a [`HashFunction`] produces.
///
/// Only unsigned primitive integers that can hold a 16 bit seed qualify, so
/// `u8` and every signed integer are rejected when the bound is checked.
/// [`Djb2`] starts from 5381, which a `u8` can only hold truncated to 5. That
/// would silently change the algorithm, so 8 bit output is left out instead of
/// starting from a different seed.
pub trait HashValue: PrimInt + Unsigned + WrappingAdd + WrappingMul + From<u16> {}
impl<T> HashValue for T where T: PrimInt + Unsigned + WrappingAdd + WrappingMul + From<u16> {}

pub trait HashFunction<H: HashValue>: dyn_clone::DynClone {
  /// Hash the given bytes. The result is a pure function of the input.
  fn hash(&self, bytes: &[u8]) -> H;
}

dyn_clone::clone_trait_object!(<H> HashFunction<H> where H: HashValue);
