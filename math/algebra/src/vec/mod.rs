use std::fmt;
use std::ops::{Index, IndexMut};

use bytemuck::TransparentWrapper;

use crate::error::check_index;
use crate::*;

mod ops;

/// A fixed length run of `N` scalars, stored densely with no padding.
///
/// Indexing with `[]` panics on an out of range index just like an array does,
/// [`Vector::get_checked`] reports it as an error instead, and
/// [`Vector::get_unchecked`] skips the check entirely.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Vector<T, const N: usize> {
  data: [T; N],
}

// a matrix hands out its rows as `&Vector` views over its own storage
unsafe impl<T, const N: usize> TransparentWrapper<[T; N]> for Vector<T, N> {}
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T, const N: usize> Vector<T, N> {
  pub const LEN: usize = N;

  #[inline]
  pub const fn new(data: [T; N]) -> Self {
    Self { data }
  }

  #[inline]
  pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
    Self::new(std::array::from_fn(f))
  }

  #[inline]
  pub const fn len(&self) -> usize {
    N
  }

  #[inline]
  pub const fn is_empty(&self) -> bool {
    N == 0
  }

  #[inline]
  pub fn into_array(self) -> [T; N] {
    self.data
  }

  #[inline]
  pub const fn as_array(&self) -> &[T; N] {
    &self.data
  }

  #[inline]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data
  }

  #[inline]
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.data.iter()
  }

  pub fn get_checked(&self, index: usize) -> Result<&T, AlgebraError> {
    check_index(index, N).map(|index| &self.data[index])
  }

  pub fn get_checked_mut(&mut self, index: usize) -> Result<&mut T, AlgebraError> {
    check_index(index, N).map(|index| &mut self.data[index])
  }

  /// # Safety
  ///
  /// `index` must be less than `N`.
  #[inline(always)]
  pub unsafe fn get_unchecked(&self, index: usize) -> &T {
    self.data.get_unchecked(index)
  }

  /// # Safety
  ///
  /// `index` must be less than `N`.
  #[inline(always)]
  pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
    self.data.get_unchecked_mut(index)
  }

  /// Perform the given operation on each component, returning a new vector
  /// constructed from the results.
  #[inline]
  #[must_use]
  pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
    Vector::new(self.data.map(f))
  }
}

impl<T: Copy, const N: usize> Vector<T, N> {
  #[inline]
  pub fn splat(v: T) -> Self {
    Self::new([v; N])
  }

  /// Construct a new vector where each component is the result of
  /// applying the given operation to each pair of components of the
  /// given vectors.
  #[inline]
  #[must_use]
  pub fn zip<U: Copy, R>(self, other: Vector<U, N>, mut f: impl FnMut(T, U) -> R) -> Vector<R, N> {
    Vector::from_fn(|i| f(self.data[i], other.data[i]))
  }

  /// Element-wise `as` conversion into another scalar type.
  #[inline]
  #[must_use]
  pub fn cast<U>(self) -> Vector<U, N>
  where
    T: AsPrimitive<U>,
    U: Copy + 'static,
  {
    self.map(|v| v.as_())
  }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
  #[inline]
  pub fn zero() -> Self {
    Self::splat(T::zero())
  }

  /// Build from an element list. Components past the end of `elements` are
  /// zero, elements past `N` are ignored.
  pub fn from_elements(elements: &[T]) -> Self {
    let mut v = Self::zero();
    v.data
      .iter_mut()
      .zip(elements)
      .for_each(|(dst, src)| *dst = *src);
    v
  }

  #[inline]
  pub fn dot(self, rhs: Self) -> T {
    self
      .data
      .iter()
      .zip(rhs.data.iter())
      .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
  }

  #[inline]
  pub fn sum(self) -> T {
    self.data.iter().fold(T::zero(), |acc, &v| acc + v)
  }
}

impl<T: bytemuck::Pod, const N: usize> Vector<T, N> {
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }

  /// Hash the raw component bytes.
  pub fn content_hash<H: HashValue>(&self, hasher: &(impl HashFunction<H> + ?Sized)) -> H {
    hasher.hash(self.as_bytes())
  }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
  #[inline]
  fn default() -> Self {
    Self::zero()
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;

  #[inline]
  fn index(&self, index: usize) -> &T {
    &self.data[index]
  }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
  #[inline]
  fn index_mut(&mut self, index: usize) -> &mut T {
    &mut self.data[index]
  }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
  #[inline]
  fn from(data: [T; N]) -> Self {
    Self::new(data)
  }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
  #[inline]
  fn from(v: Vector<T, N>) -> Self {
    v.data
  }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
  fn as_ref(&self) -> &[T] {
    &self.data
  }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
  fn as_mut(&mut self) -> &mut [T] {
    &mut self.data
  }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.data.iter()
  }
}

impl<T: fmt::Debug, const N: usize> fmt::Display for Vector<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "(")?;
    for (i, v) in self.data.iter().enumerate() {
      if i != 0 {
        write!(f, ", ")?;
      }
      write!(f, "{v:?}")?;
    }
    write!(f, ")")
  }
}
