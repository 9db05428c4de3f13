#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
  #[error("index {index} is out of bounds for length {len}")]
  OutOfBounds { index: usize, len: usize },
  #[error("matrix is singular, no usable pivot in column {column}")]
  Singular { column: usize },
  #[error("matrix element ({row}, {col}) is not finite")]
  NonFinite { row: usize, col: usize },
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, AlgebraError> {
  if index < len {
    Ok(index)
  } else {
    Err(AlgebraError::OutOfBounds { index, len })
  }
}
