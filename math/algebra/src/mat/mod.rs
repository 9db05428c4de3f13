use std::ops::{Index, IndexMut};

use bytemuck::TransparentWrapper;

use crate::error::check_index;
use crate::*;

mod inverse;
mod product;

pub use inverse::*;

/// A `W` wide, `H` high grid of scalars in row-major order: element
/// `(row, col)` lives at flat offset `row * W + col`.
///
/// Rows are `Vector<T, W>`, columns are `Vector<T, H>`. Rows can be borrowed in
/// place ([`Matrix::row_ref`], [`Matrix::row_mut`], `matrix[row]`) because they
/// are contiguous; columns are always gathered into a new vector.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Matrix<T, const W: usize, const H: usize> {
  rows: [[T; W]; H],
}

unsafe impl<T: bytemuck::Zeroable, const W: usize, const H: usize> bytemuck::Zeroable
  for Matrix<T, W, H>
{
}
unsafe impl<T: bytemuck::Pod, const W: usize, const H: usize> bytemuck::Pod for Matrix<T, W, H> {}

impl<T, const W: usize, const H: usize> Matrix<T, W, H> {
  pub const WIDTH: usize = W;
  pub const HEIGHT: usize = H;
  pub const MIN: usize = if W < H { W } else { H };
  pub const MAX: usize = if W > H { W } else { H };
  pub const LEN: usize = W * H;

  #[inline]
  pub const fn from_array(rows: [[T; W]; H]) -> Self {
    Self { rows }
  }

  #[inline]
  pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
    Self {
      rows: std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))),
    }
  }

  #[inline]
  pub fn from_rows(rows: [Vector<T, W>; H]) -> Self {
    Self {
      rows: rows.map(Vector::into_array),
    }
  }

  #[inline]
  pub fn into_array(self) -> [[T; W]; H] {
    self.rows
  }

  /// The whole backing store, row-major.
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    self.rows.as_flattened()
  }

  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    self.rows.as_flattened_mut()
  }

  #[inline]
  pub fn rows(&self) -> &[Vector<T, W>] {
    Vector::<T, W>::wrap_slice(self.rows.as_slice())
  }

  /// Borrow a row in place. Panics if `index >= H`.
  #[inline]
  pub fn row_ref(&self, index: usize) -> &Vector<T, W> {
    Vector::<T, W>::wrap_ref(&self.rows[index])
  }

  /// Borrow a row in place, writes go straight into this matrix. Panics if
  /// `index >= H`.
  #[inline]
  pub fn row_mut(&mut self, index: usize) -> &mut Vector<T, W> {
    Vector::<T, W>::wrap_mut(&mut self.rows[index])
  }

  pub fn get_checked(&self, row: usize, col: usize) -> Result<&T, AlgebraError> {
    let row = check_index(row, H)?;
    let col = check_index(col, W)?;
    Ok(&self.rows[row][col])
  }

  pub fn get_checked_mut(&mut self, row: usize, col: usize) -> Result<&mut T, AlgebraError> {
    let row = check_index(row, H)?;
    let col = check_index(col, W)?;
    Ok(&mut self.rows[row][col])
  }

  /// # Safety
  ///
  /// `row` must be less than `H` and `col` less than `W`.
  #[inline(always)]
  pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
    self.rows.get_unchecked(row).get_unchecked(col)
  }

  /// # Safety
  ///
  /// `row` must be less than `H` and `col` less than `W`.
  #[inline(always)]
  pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
    self.rows.get_unchecked_mut(row).get_unchecked_mut(col)
  }

  #[must_use]
  pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, W, H> {
    Matrix {
      rows: self.rows.map(|row| row.map(&mut f)),
    }
  }
}

impl<T: Copy, const W: usize, const H: usize> Matrix<T, W, H> {
  pub fn from_columns(columns: [Vector<T, H>; W]) -> Self {
    Self::from_fn(|row, col| columns[col][row])
  }

  /// Copy out a row. Panics if `index >= H`.
  #[inline]
  pub fn row(&self, index: usize) -> Vector<T, W> {
    *self.row_ref(index)
  }

  /// Gather a column into a new vector. Panics if `index >= W`.
  #[inline]
  pub fn column(&self, index: usize) -> Vector<T, H> {
    assert!(index < W, "column {index} out of range for width {W}");
    Vector::from_fn(|row| self.rows[row][index])
  }

  #[inline]
  pub fn set_row(&mut self, index: usize, row: Vector<T, W>) {
    self.rows[index] = row.into_array();
  }

  pub fn set_column(&mut self, index: usize, column: Vector<T, H>) {
    assert!(index < W, "column {index} out of range for width {W}");
    for (row, value) in self.rows.iter_mut().zip(column.into_array()) {
      row[index] = value;
    }
  }

  pub fn row_checked(&self, index: usize) -> Result<Vector<T, W>, AlgebraError> {
    check_index(index, H).map(|index| self.row(index))
  }

  pub fn column_checked(&self, index: usize) -> Result<Vector<T, H>, AlgebraError> {
    check_index(index, W).map(|index| self.column(index))
  }

  pub fn set_row_checked(&mut self, index: usize, row: Vector<T, W>) -> Result<(), AlgebraError> {
    let index = check_index(index, H)?;
    self.set_row(index, row);
    Ok(())
  }

  pub fn set_column_checked(
    &mut self,
    index: usize,
    column: Vector<T, H>,
  ) -> Result<(), AlgebraError> {
    let index = check_index(index, W)?;
    self.set_column(index, column);
    Ok(())
  }

  /// Swap rows and columns: `result[(i, j)] == self[(j, i)]`, so every row of
  /// `self` becomes the same-index column of the result.
  #[must_use]
  pub fn transpose(&self) -> Matrix<T, H, W> {
    Matrix::from_fn(|row, col| self.rows[col][row])
  }

  /// Convert into the transposed shape. Only meaningful for non-square
  /// matrices; using it on a square shape fails to build.
  ///
  /// ```
  /// # use fixed_algebra::Matrix;
  /// let tall: Matrix<i32, 2, 3> = Matrix::<i32, 3, 2>::identity().into_transposed();
  /// assert_eq!(tall.row(1).into_array(), [0, 1]);
  /// ```
  /// ```compile_fail,E0080
  /// # use fixed_algebra::Matrix;
  /// let _ = Matrix::<i32, 2, 2>::identity().into_transposed();
  /// ```
  #[must_use]
  pub fn into_transposed(self) -> Matrix<T, H, W> {
    const { assert!(W != H, "square matrices keep their shape, use transpose") };
    self.transpose()
  }

  /// Element-wise `as` conversion into another scalar type.
  #[must_use]
  pub fn cast<U>(self) -> Matrix<U, W, H>
  where
    T: AsPrimitive<U>,
    U: Copy + 'static,
  {
    self.map(|v| v.as_())
  }
}

impl<T: Scalar, const W: usize, const H: usize> Matrix<T, W, H> {
  pub fn zero() -> Self {
    Self::from_fn(|_, _| T::zero())
  }

  /// The generalized identity: ones on the main diagonal, zero everywhere
  /// else, also for non-square shapes.
  pub fn identity() -> Self {
    Self::from_scalar(T::one())
  }

  /// A diagonal matrix with `scalar` on every main diagonal slot.
  pub fn from_scalar(scalar: T) -> Self {
    Self::from_fn(|row, col| if row == col { scalar } else { T::zero() })
  }

  /// Fill from a row-major element list. Slots past the end of `elements` are
  /// zero, diagonal included, so a short list does not produce an identity
  /// remainder. Elements past `W * H` are ignored.
  pub fn from_elements(elements: &[T]) -> Self {
    let mut m = Self::zero();
    m.as_mut_slice()
      .iter_mut()
      .zip(elements)
      .for_each(|(dst, src)| *dst = *src);
    m
  }
}

impl<T: bytemuck::Pod, const W: usize, const H: usize> Matrix<T, W, H> {
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }

  /// Hash the raw element bytes in row-major order.
  pub fn content_hash<H2: HashValue>(&self, hasher: &(impl HashFunction<H2> + ?Sized)) -> H2 {
    hasher.hash(self.as_bytes())
  }
}

impl<T: Scalar, const W: usize, const H: usize> Default for Matrix<T, W, H> {
  fn default() -> Self {
    Self::identity()
  }
}

impl<T, const W: usize, const H: usize> Index<usize> for Matrix<T, W, H> {
  type Output = Vector<T, W>;

  #[inline]
  fn index(&self, row: usize) -> &Vector<T, W> {
    self.row_ref(row)
  }
}

impl<T, const W: usize, const H: usize> IndexMut<usize> for Matrix<T, W, H> {
  #[inline]
  fn index_mut(&mut self, row: usize) -> &mut Vector<T, W> {
    self.row_mut(row)
  }
}

impl<T, const W: usize, const H: usize> Index<(usize, usize)> for Matrix<T, W, H> {
  type Output = T;

  #[inline]
  fn index(&self, (row, col): (usize, usize)) -> &T {
    &self.rows[row][col]
  }
}

impl<T, const W: usize, const H: usize> IndexMut<(usize, usize)> for Matrix<T, W, H> {
  #[inline]
  fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
    &mut self.rows[row][col]
  }
}

impl<T, const W: usize, const H: usize> From<[[T; W]; H]> for Matrix<T, W, H> {
  fn from(rows: [[T; W]; H]) -> Self {
    Self::from_array(rows)
  }
}

impl<T, const W: usize, const H: usize> From<Matrix<T, W, H>> for [[T; W]; H] {
  fn from(m: Matrix<T, W, H>) -> Self {
    m.rows
  }
}
