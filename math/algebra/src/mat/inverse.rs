use num_traits::{Float, NumCast};

use crate::*;

/// How small a pivot may get before elimination gives up and reports the
/// matrix as singular.
///
/// The default is `Relative(epsilon)`, scaled by the largest element. That
/// rejects matrices whose rows differ wildly in magnitude even when they are
/// exactly invertible: `diag(1e8, 1e-8)` fails at column 1. Pass an
/// [`Tolerance::Absolute`] threshold for such inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance<T> {
  /// `factor * largest absolute element * N`
  Relative(T),
  Absolute(T),
}

impl<T: Float> Default for Tolerance<T> {
  fn default() -> Self {
    Self::Relative(T::epsilon())
  }
}

impl<T: Float> Tolerance<T> {
  fn threshold<const N: usize>(self, rows: &[[T; N]; N]) -> T {
    match self {
      Self::Absolute(threshold) => threshold,
      Self::Relative(factor) => {
        let largest = rows
          .as_flattened()
          .iter()
          .fold(T::zero(), |largest, v| largest.max(v.abs()));
        let dimension = <T as NumCast>::from(N).unwrap_or_else(T::one);
        factor * largest * dimension
      }
    }
  }
}

/// Row with the largest magnitude entry in `column`, searching from the
/// diagonal down.
fn select_pivot<T: Float, const N: usize>(rows: &[[T; N]; N], column: usize) -> usize {
  (column..N).fold(column, |best, row| {
    if rows[row][column].abs() > rows[best][column].abs() {
      row
    } else {
      best
    }
  })
}

fn check_finite<T: Float, const W: usize, const H: usize>(
  m: &Matrix<T, W, H>,
) -> Result<(), AlgebraError> {
  match m.as_slice().iter().position(|v| !v.is_finite()) {
    Some(offset) => {
      let (row, col) = (offset / W, offset % W);
      log::debug!("matrix inversion rejected non-finite element at ({row}, {col})");
      Err(AlgebraError::NonFinite { row, col })
    }
    None => Ok(()),
  }
}

impl<T: Scalar + Float, const N: usize> Matrix<T, N, N> {
  /// Gauss-Jordan inversion with partial pivoting and the default
  /// [`Tolerance`].
  pub fn inverse(&self) -> Result<Self, AlgebraError> {
    self.inverse_with(Tolerance::default())
  }

  /// Fails with [`AlgebraError::NonFinite`] if any element is NaN or infinite,
  /// and with [`AlgebraError::Singular`] once a pivot is not above the
  /// tolerance threshold.
  pub fn inverse_with(&self, tolerance: Tolerance<T>) -> Result<Self, AlgebraError> {
    check_finite(self)?;
    let mut work = self.into_array();
    let threshold = tolerance.threshold(&work);
    let mut inverse = Self::identity().into_array();

    for column in 0..N {
      let pivot_row = select_pivot(&work, column);
      let pivot = work[pivot_row][column];
      // a NaN pivot compares false and fails here too
      let usable = pivot.abs() > threshold;
      if !usable {
        log::debug!(
          "matrix inversion failed at column {column}: pivot {:?} within tolerance {:?}",
          pivot.abs(),
          threshold
        );
        return Err(AlgebraError::Singular { column });
      }

      if pivot_row != column {
        log::trace!("inversion swaps row {column} with pivot row {pivot_row}");
        work.swap(column, pivot_row);
        inverse.swap(column, pivot_row);
      }

      let inv_pivot = T::one() / pivot;
      for c in 0..N {
        work[column][c] *= inv_pivot;
        inverse[column][c] *= inv_pivot;
      }

      for row in 0..N {
        let factor = work[row][column];
        if row == column || factor == T::zero() {
          continue;
        }
        for c in 0..N {
          work[row][c] = work[row][c] - factor * work[column][c];
          inverse[row][c] = inverse[row][c] - factor * inverse[column][c];
        }
      }
    }

    Ok(Self::from_array(inverse))
  }

  /// Determinant by forward elimination: the product of the pivots, negated
  /// once per row swap.
  pub fn determinant(&self) -> T {
    let mut work = self.into_array();
    let mut det = T::one();

    for column in 0..N {
      let pivot_row = select_pivot(&work, column);
      let pivot = work[pivot_row][column];
      if pivot == T::zero() {
        return T::zero();
      }
      if pivot_row != column {
        work.swap(column, pivot_row);
        det = -det;
      }
      det *= pivot;

      for row in column + 1..N {
        let factor = work[row][column] / pivot;
        for c in column..N {
          work[row][c] = work[row][c] - factor * work[column][c];
        }
      }
    }

    det
  }
}

#[cfg(test)]
mod test {
  use cgmath::SquareMatrix as _;

  use crate::*;

  fn assert_near<const W: usize, const H: usize>(a: Matrix<f64, W, H>, b: Matrix<f64, W, H>) {
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
      assert!((x - y).abs() < 1e-9, "{a:?} != {b:?}");
    }
  }

  #[test]
  fn inverts_two_by_two() {
    let m = Matrix2D::from_elements(&[4., 7., 2., 6.]);
    let inv = m.inverse().unwrap();
    assert_near(inv, Matrix2D::from_elements(&[0.6, -0.7, -0.2, 0.4]));
    assert_near(inv * m, Matrix2D::identity());
    assert_near(m * inv, Matrix2D::identity());
  }

  #[test]
  fn needs_pivoting() {
    // zero in the leading slot
    let m = Matrix3D::from_elements(&[0., 1., 2., 1., 0., 3., 4., -3., 8.]);
    let inv = m.inverse().unwrap();
    assert_near(m * inv, Matrix3D::identity());
  }

  #[test]
  fn identity_is_own_inverse() {
    assert_eq!(Matrix4F::identity().inverse(), Ok(Matrix4F::identity()));
    assert_eq!(Matrix::<f64, 1, 1>::from_scalar(4.).inverse(), Ok(Matrix::from_scalar(0.25)));
  }

  #[test]
  fn singular_is_an_error() {
    let proportional = Matrix2D::from_elements(&[1., 2., 2., 4.]);
    assert_eq!(
      proportional.inverse(),
      Err(AlgebraError::Singular { column: 1 })
    );

    assert_eq!(
      Matrix3F::zero().inverse(),
      Err(AlgebraError::Singular { column: 0 })
    );

    let repeated_rows = Matrix3D::from_elements(&[1., 2., 3., 4., 5., 6., 1., 2., 3.]);
    assert!(repeated_rows.inverse().is_err());
  }

  #[test]
  fn tolerance_controls_near_singular() {
    let m = Matrix2D::from_elements(&[1., 0., 0., 1e-6]);
    assert!(m.inverse().is_ok());
    assert_eq!(
      m.inverse_with(Tolerance::Absolute(1e-3)),
      Err(AlgebraError::Singular { column: 1 })
    );
    assert!(m.inverse_with(Tolerance::Relative(1e-3)).is_err());
    assert!(m.inverse_with(Tolerance::Relative(1e-8)).is_ok());
  }

  #[test]
  fn non_finite_is_an_error() {
    let nan = Matrix2D::from_elements(&[f64::NAN, 1., 1., 1.]);
    assert_eq!(nan.inverse(), Err(AlgebraError::NonFinite { row: 0, col: 0 }));

    let inf = Matrix3F::from_elements(&[1., 0., 0., 0., 1., f32::INFINITY, 0., 0., 1.]);
    assert_eq!(inf.inverse(), Err(AlgebraError::NonFinite { row: 1, col: 2 }));

    let neg_inf = Matrix2D::from_elements(&[1., 0., 0., f64::NEG_INFINITY]);
    assert_eq!(
      neg_inf.inverse_with(Tolerance::Absolute(0.)),
      Err(AlgebraError::NonFinite { row: 1, col: 1 })
    );
  }

  #[test]
  fn badly_scaled_needs_absolute_tolerance() {
    let m = Matrix2D::from_elements(&[1e8, 0., 0., 1e-8]);
    assert_eq!(m.inverse(), Err(AlgebraError::Singular { column: 1 }));
    let inv = m.inverse_with(Tolerance::Absolute(1e-12)).unwrap();
    assert_near(inv * m, Matrix2D::identity());
  }

  #[test]
  fn matches_cgmath() {
    #[rustfmt::skip]
    let rows = [
      [2.0, -1.0, 0.5, 3.0],
      [1.0, 4.0, -2.0, 0.0],
      [0.0, 1.5, 3.0, -1.0],
      [5.0, 0.0, 1.0, 2.0],
    ];
    let ours = Matrix4D::from_array(rows).inverse().unwrap();

    // cgmath reads the nested array as columns, so it sees the transpose, and
    // the column-major layout of its inverse is our row-major layout
    let theirs = cgmath::Matrix4::from(rows).invert().unwrap();
    let theirs: &[f64; 16] = theirs.as_ref();
    assert_near(ours, Matrix4D::from_elements(theirs));
  }

  #[test]
  fn determinant() {
    assert_eq!(Matrix2D::from_elements(&[4., 7., 2., 6.]).determinant(), 10.);
    assert_eq!(Matrix2D::from_elements(&[1., 2., 2., 4.]).determinant(), 0.);
    assert_eq!(Matrix3D::identity().determinant(), 1.);

    // a single row swap flips the sign
    let swapped = Matrix2D::from_elements(&[0., 1., 1., 0.]);
    assert_eq!(swapped.determinant(), -1.);

    let m = Matrix3D::from_elements(&[0., 1., 2., 1., 0., 3., 4., -3., 8.]);
    let reference = cgmath::Matrix3::from(m.into_array()).determinant();
    assert!((m.determinant() - reference).abs() < 1e-9);
  }
}
