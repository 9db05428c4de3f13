//! Fixed dimension vectors and matrices over a generic scalar.
//!
//! [`Vector<T, N>`] is a dense array of `N` scalars, [`Matrix<T, W, H>`] is a
//! `W` wide, `H` high grid stored in row-major order whose rows are
//! `Vector<T, W>` and whose columns are `Vector<T, H>`.

mod catalog;
mod error;
mod mat;
mod scalar;
mod serialize;
mod vec;

pub use catalog::*;
pub use error::*;
pub use mat::*;
pub use scalar::*;
pub use vec::*;

pub use byte_hash::{HashFunction, HashValue};
pub use num_traits::{AsPrimitive, Float, One, Zero};
