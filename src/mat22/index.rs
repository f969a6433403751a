use std::ops::{Index, IndexMut};

use crate::MatError;

use super::Mat22;

/// Number of elements in a [Mat22]
const LEN: usize = 4;

/// Map a linear (row-major) index onto an offset into the backing array
#[inline]
fn offset_for_index(index: isize) -> Result<usize, MatError> {
	match usize::try_from(index) {
		Ok(offset) if offset < LEN => Ok(offset),
		_ => Err(MatError::IndexOutOfRange { index }),
	}
}

impl Mat22 {
	/// Get element by row-major index (`0 => a`, `1 => b`, `2 => c`, `3 => d`)
	pub fn at(&self, index: isize) -> Result<f64, MatError> {
		let offset = offset_for_index(index)?;
		Ok(self.0[offset])
	}

	/// Get a mutable reference to an element by row-major index
	pub fn at_mut(&mut self, index: isize) -> Result<&mut f64, MatError> {
		let offset = offset_for_index(index)?;
		Ok(&mut self.0[offset])
	}
}

impl Index<usize> for Mat22 {
	type Output = f64;

	fn index(&self, index: usize) -> &Self::Output {
		match self.0.get(index) {
			Some(v) => v,
			None => panic!("Index out of bound (index: {}, valid: 0..=3)", index),
		}
	}
}

impl IndexMut<usize> for Mat22 {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		match self.0.get_mut(index) {
			Some(v) => v,
			None => panic!("Index out of bound (index: {}, valid: 0..=3)", index),
		}
	}
}

#[cfg(test)]
mod test {
	use crate::{Mat22, MatError};

	#[test]
	fn read() {
		let m = Mat22::new(1., 2., 3., 4.);
		for i in 0..4 {
			assert_eq!(m.at(i).unwrap(), (i + 1) as f64);
			assert_eq!(m[i as usize], (i + 1) as f64);
		}
	}

	#[test]
	fn write() {
		let mut m = Mat22::new(123., 6., 6., 4567.89);
		*m.at_mut(0).unwrap() = 3.;
		*m.at_mut(1).unwrap() = 1.;
		m[2] = 7.;
		m[3] = 4.;
		assert_eq!(m, Mat22::new(3., 1., 7., 4.));
	}

	#[test]
	fn out_of_range() {
		let mut m = Mat22::identity();
		assert_eq!(m.at(4), Err(MatError::IndexOutOfRange { index: 4 }));
		assert_eq!(m.at(-1), Err(MatError::IndexOutOfRange { index: -1 }));
		assert_eq!(m.at_mut(4).err(), Some(MatError::IndexOutOfRange { index: 4 }));
		assert_eq!(m.at_mut(-1).err(), Some(MatError::IndexOutOfRange { index: -1 }));
		assert_eq!(m, Mat22::identity());
	}

	#[test]
	#[cfg(target_pointer_width = "64")]
	#[should_panic(expected = "index: 18446744073709551615")]
	fn index_panic_reports_full_usize() {
		let m = Mat22::identity();
		let _ = m[usize::MAX];
	}

	#[test]
	#[should_panic]
	fn index_panics() {
		let m = Mat22::identity();
		let _ = m[4];
	}
}
