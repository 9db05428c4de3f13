use std::ops::*;

use crate::*;

/// Component-wise ops against another vector, broadcast ops against a scalar
/// on the right, and the compound assignment forms of both.
macro_rules! impl_vector_operator {
  ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
    impl<T: $Op<Output = T> + Copy, const N: usize> $Op for Vector<T, N> {
      type Output = Self;
      #[inline]
      fn $op(self, rhs: Self) -> Self {
        self.zip(rhs, $Op::$op)
      }
    }

    impl<T: $Op<Output = T> + Copy, const N: usize> $Op<T> for Vector<T, N> {
      type Output = Self;
      #[inline]
      fn $op(self, rhs: T) -> Self {
        self.map(|v| $Op::$op(v, rhs))
      }
    }

    impl<T: $OpAssign + Copy, const N: usize> $OpAssign for Vector<T, N> {
      #[inline]
      fn $op_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.as_mut_slice().iter_mut().zip(rhs.into_array()) {
          $OpAssign::$op_assign(lhs, rhs);
        }
      }
    }

    impl<T: $OpAssign + Copy, const N: usize> $OpAssign<T> for Vector<T, N> {
      #[inline]
      fn $op_assign(&mut self, rhs: T) {
        for lhs in self.as_mut_slice() {
          $OpAssign::$op_assign(lhs, rhs);
        }
      }
    }
  };
}

impl_vector_operator!(Add, add, AddAssign, add_assign);
impl_vector_operator!(Sub, sub, SubAssign, sub_assign);
impl_vector_operator!(Mul, mul, MulAssign, mul_assign);
impl_vector_operator!(Div, div, DivAssign, div_assign);

impl<T: Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
  type Output = Self;
  #[inline]
  fn neg(self) -> Self {
    self.map(Neg::neg)
  }
}

/// `scalar op vector`. The scalar stays the left operand of every component
/// op, so `s - v` is `[s - v[0], s - v[1], ..]`.
///
/// Coherence only allows this for concrete scalar types.
macro_rules! impl_scalar_lhs_operator {
  ($Op:ident, $op:ident, $($S:ty),+) => {
    $(
      impl<const N: usize> $Op<Vector<$S, N>> for $S {
        type Output = Vector<$S, N>;
        #[inline]
        fn $op(self, rhs: Vector<$S, N>) -> Vector<$S, N> {
          rhs.map(|v| $Op::$op(self, v))
        }
      }
    )+
  };
}

macro_rules! impl_scalar_lhs_ops {
  ($($S:ty),+) => {
    impl_scalar_lhs_operator!(Add, add, $($S),+);
    impl_scalar_lhs_operator!(Sub, sub, $($S),+);
    impl_scalar_lhs_operator!(Mul, mul, $($S),+);
    impl_scalar_lhs_operator!(Div, div, $($S),+);
  };
}

impl_scalar_lhs_ops!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64);
