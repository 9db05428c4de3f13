use std::{fmt, marker::PhantomData};

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

// serde only covers arrays up to 32 elements, so fixed sizes go through a
// tuple of the exact length instead.

fn serialize_elements<S: Serializer, E: Serialize>(
  elements: &[E],
  serializer: S,
) -> Result<S::Ok, S::Error> {
  let mut tuple = serializer.serialize_tuple(elements.len())?;
  for element in elements {
    tuple.serialize_element(element)?;
  }
  tuple.end()
}

struct ArrayVisitor<E, const N: usize>(PhantomData<E>);

impl<E, const N: usize> ArrayVisitor<E, N> {
  fn new() -> Self {
    Self(PhantomData)
  }
}

impl<'de, E: Deserialize<'de>, const N: usize> Visitor<'de> for ArrayVisitor<E, N> {
  type Value = [E; N];

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "a sequence of exactly {N} elements")
  }

  fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
    let mut elements: Vec<E> = Vec::with_capacity(N);
    while let Some(element) = seq.next_element()? {
      if elements.len() == N {
        return Err(de::Error::invalid_length(N + 1, &self));
      }
      elements.push(element);
    }
    let len = elements.len();
    elements
      .try_into()
      .map_err(|_| de::Error::invalid_length(len, &self))
  }
}

impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_elements(self.as_slice(), serializer)
  }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer
      .deserialize_tuple(N, ArrayVisitor::<T, N>::new())
      .map(Vector::new)
  }
}

/// A matrix is written as a tuple of `H` rows.
impl<T: Serialize, const W: usize, const H: usize> Serialize for Matrix<T, W, H> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_elements(self.rows(), serializer)
  }
}

impl<'de, T: Deserialize<'de>, const W: usize, const H: usize> Deserialize<'de>
  for Matrix<T, W, H>
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer
      .deserialize_tuple(H, ArrayVisitor::<Vector<T, W>, H>::new())
      .map(Matrix::from_rows)
  }
}
