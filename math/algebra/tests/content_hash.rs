use byte_hash::{Djb2, HashFunction};
use fixed_algebra::*;

#[test]
fn equal_values_hash_equal() {
  let a = Matrix3F::from_elements(&[1., 2., 3., 4., 5., 6., 7., 8., 9.]);
  let b = Matrix3F::from_array([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
  let ha: u64 = a.content_hash(&Djb2);
  let hb: u64 = b.content_hash(&Djb2);
  assert_eq!(ha, hb);

  let c = a.transpose();
  let hc: u64 = c.content_hash(&Djb2);
  assert_ne!(ha, hc);
}

#[test]
fn hash_covers_row_major_bytes() {
  let m = Matrix::<u8, 3, 2>::from_elements(&[b'a', b'b', b'c', b'd', b'e', 0]);
  assert_eq!(m.as_bytes(), b"abcde\0");

  let v = Vector::<u8, 5>::from_elements(b"abcde");
  let direct: u32 = Djb2.hash(b"abcde");
  assert_eq!(v.content_hash::<u32>(&Djb2), direct);
  assert_eq!(v.content_hash::<u32>(&Djb2), 252819604);
}

#[test]
fn dynamic_hash_function() {
  let strategy: Box<dyn HashFunction<u64>> = Box::new(Djb2);
  let v = Vector4I32::new([1, 2, 3, 4]);
  assert_eq!(v.content_hash(strategy.as_ref()), Djb2.hash(v.as_bytes()));
}
