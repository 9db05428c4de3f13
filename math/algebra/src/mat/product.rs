use std::ops::Mul;

use crate::*;

/// Column vector on the right: `result[row] = self.row(row) . v`.
impl<T: Scalar, const W: usize, const H: usize> Mul<Vector<T, W>> for Matrix<T, W, H> {
  type Output = Vector<T, H>;

  fn mul(self, v: Vector<T, W>) -> Vector<T, H> {
    Vector::from_fn(|row| self.row(row).dot(v))
  }
}

/// Row vector on the left: `result[col] = v . m.column(col)`.
impl<T: Scalar, const W: usize, const H: usize> Mul<Matrix<T, W, H>> for Vector<T, H> {
  type Output = Vector<T, W>;

  fn mul(self, m: Matrix<T, W, H>) -> Vector<T, W> {
    Vector::from_fn(|col| self.dot(m.column(col)))
  }
}

impl<T: Scalar, const W: usize, const H: usize, const K: usize> Mul<Matrix<T, K, W>>
  for Matrix<T, W, H>
{
  type Output = Matrix<T, K, H>;

  fn mul(self, rhs: Matrix<T, K, W>) -> Matrix<T, K, H> {
    Matrix::from_fn(|row, col| self.row(row).dot(rhs.column(col)))
  }
}
