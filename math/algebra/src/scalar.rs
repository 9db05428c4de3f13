use std::fmt::Debug;

use num_traits::{Num, NumAssign};

/// The element type of a [`Vector`](crate::Vector) or [`Matrix`](crate::Matrix).
///
/// Every primitive integer and float qualifies.
pub trait Scalar: Num + NumAssign + Copy + Debug + PartialEq + 'static {}

impl<T> Scalar for T where T: Num + NumAssign + Copy + Debug + PartialEq + 'static {}
