use crate::*;

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

pub type Matrix2<T> = Matrix<T, 2, 2>;
pub type Matrix3<T> = Matrix<T, 3, 3>;
pub type Matrix4<T> = Matrix<T, 4, 4>;

/// `Vector3I32`, `Matrix4F`, .. for every listed scalar at 2, 3 and 4
/// dimensions. `F` is single precision and `D` double precision.
macro_rules! scalar_aliases {
  ($($suffix:ident => $S:ty),+ $(,)?) => {
    paste::paste! {
      $(
        pub type [<Vector2 $suffix>] = Vector2<$S>;
        pub type [<Vector3 $suffix>] = Vector3<$S>;
        pub type [<Vector4 $suffix>] = Vector4<$S>;
        pub type [<Matrix2 $suffix>] = Matrix2<$S>;
        pub type [<Matrix3 $suffix>] = Matrix3<$S>;
        pub type [<Matrix4 $suffix>] = Matrix4<$S>;
      )+
    }
  };
}

scalar_aliases!(
  U8 => u8,
  I8 => i8,
  U16 => u16,
  I16 => i16,
  U32 => u32,
  I32 => i32,
  U64 => u64,
  I64 => i64,
  F => f32,
  D => f64,
);
