mod eigen;
mod format;
mod index;
mod ops;
mod walkthrough;

use crate::MatError;

pub use eigen::{Eigenvalue, RootDisplay};
pub use format::Mat22Display;

/// Smallest determinant (or scalar divisor) magnitude we are willing to divide by: e⁻⁶
pub const NEAR_SINGULAR_THRESHOLD: f64 = 0.0024787521766663585;

/// 2x2 matrix, stored row-major
///
/// ```text
/// | a b |
/// | c d |
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat22(pub(crate) [f64; 4]);

impl From<[f64; 4]> for Mat22 {
	fn from(value: [f64; 4]) -> Self {
		Self(value)
	}
}

#[cfg(feature="approx")]
impl float_cmp::ApproxEq for Mat22 {
    type Margin = float_cmp::F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        <&[f64] as float_cmp::ApproxEq>::approx_eq(&self.0, &other.0, margin)
    }
}

impl Mat22 {
	/// Create from elements in row-major order
	pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
		Self([a, b, c, d])
	}

	/// Create matrix with all zeroes
	pub const fn zeroes() -> Self {
		Self([0.; 4])
	}

	/// Create from array
	pub const fn of(v: [f64; 4]) -> Self {
		Self(v)
	}

	/// Create an identity matrix
	pub const fn identity() -> Self {
		Self([
			1., 0.,
			0., 1.,
		])
	}

	pub const fn data(&self) -> &[f64; 4] {
		&self.0
	}

	/// Top-left
	#[inline(always)]
	pub const fn a(&self) -> f64 {
		self.0[0]
	}

	/// Top-right
	#[inline(always)]
	pub const fn b(&self) -> f64 {
		self.0[1]
	}

	/// Bottom-left
	#[inline(always)]
	pub const fn c(&self) -> f64 {
		self.0[2]
	}

	/// Bottom-right
	#[inline(always)]
	pub const fn d(&self) -> f64 {
		self.0[3]
	}

	/// Compute matrix determinant
	pub fn determinant(&self) -> f64 {
		self.a() * self.d() - self.b() * self.c()
	}

	/// Sum of the diagonal
	pub fn trace(&self) -> f64 {
		self.a() + self.d()
	}

	/// Is the top-right element exactly equal to the bottom-left one?
	pub fn is_symmetric(&self) -> bool {
		self.b() == self.c()
	}

	/// Do both matrices have exactly the same determinant and trace?
	///
	/// Similar matrices always pass this check, but passing it does not prove
	/// similarity: `[[1, 1], [0, 1]]` and the identity share determinant and
	/// trace without being conjugate.
	pub fn is_similar(&self, other: &Mat22) -> bool {
		self.determinant() == other.determinant() && self.trace() == other.trace()
	}

	/// Largest element (signed)
	pub(crate) fn maximum(&self) -> f64 {
		self.0
			.iter()
			.copied()
			.fold(self.0[0], |max, v| if v > max { v } else { max })
	}

	/// Transpose
	pub const fn transpose(&self) -> Self {
		Self([
			self.0[0], self.0[2],
			self.0[1], self.0[3],
		])
	}

	/// In-place transpose
	pub fn transpose_mut(&mut self) {
		self.0.swap(1, 2);
	}

	/// Matrix inverse
	///
	/// Fails with [MatError::DivideByZero] if the determinant is exactly zero,
	/// and with [MatError::InverseUndefined] if it is nonzero but no larger than
	/// [NEAR_SINGULAR_THRESHOLD] in magnitude.
	pub fn inverse(&self) -> Result<Self, MatError> {
		let det = self.determinant();
		if det == 0. {
			log::debug!("Refusing to invert singular matrix {:?}", self);
			return Err(MatError::DivideByZero);
		}
		if det.abs() <= NEAR_SINGULAR_THRESHOLD {
			log::debug!("Refusing to invert near-singular matrix {:?} (det={})", self, det);
			return Err(MatError::InverseUndefined { determinant: det });
		}

		let scale = 1. / det;
		Ok(Self([
			self.d() * scale, -self.b() * scale,
			-self.c() * scale, self.a() * scale,
		]))
	}

	/// Element-wise `self += rhs`
	pub fn add_mat(&mut self, rhs: &Mat22) -> &mut Self {
		for (v, r) in self.0.iter_mut().zip(rhs.0.iter()) {
			*v += r;
		}
		self
	}

	/// Element-wise `self -= rhs`
	pub fn sub_mat(&mut self, rhs: &Mat22) -> &mut Self {
		for (v, r) in self.0.iter_mut().zip(rhs.0.iter()) {
			*v -= r;
		}
		self
	}

	/// Matrix multiplication (`self = self * rhs`)
	pub fn mul_mat(&mut self, rhs: &Mat22) -> &mut Self {
		// Every output reads two of our elements, so build the result first
		let result = Self([
			self.0[0]*rhs.0[0] + self.0[1]*rhs.0[2], self.0[0]*rhs.0[1] + self.0[1]*rhs.0[3],
			self.0[2]*rhs.0[0] + self.0[3]*rhs.0[2], self.0[2]*rhs.0[1] + self.0[3]*rhs.0[3],
		]);
		*self = result;
		self
	}

	/// Multiply by the inverse of `rhs` (`self = self * rhs⁻¹`)
	///
	/// If `rhs` can't be inverted, `self` is not modified.
	pub fn div_mat(&mut self, rhs: &Mat22) -> Result<&mut Self, MatError> {
		let inv = rhs.inverse()?;
		Ok(self.mul_mat(&inv))
	}

	/// Add `x` to every element
	pub fn add_scalar(&mut self, x: f64) -> &mut Self {
		for v in self.0.iter_mut() {
			*v += x;
		}
		self
	}

	/// Subtract `x` from every element
	pub fn sub_scalar(&mut self, x: f64) -> &mut Self {
		for v in self.0.iter_mut() {
			*v -= x;
		}
		self
	}

	/// Multiply every element by `x`
	///
	/// Any `-0.0` produced is replaced by `0.0`.
	pub fn mul_scalar(&mut self, x: f64) -> &mut Self {
		for v in self.0.iter_mut() {
			*v *= x;
			if *v == 0. {
				*v = 0.;
			}
		}
		self
	}

	/// Divide every element by `x`
	///
	/// Fails with [MatError::DivideByZero] if `|x|` is below [NEAR_SINGULAR_THRESHOLD].
	pub fn div_scalar(&mut self, x: f64) -> Result<&mut Self, MatError> {
		if x.abs() < NEAR_SINGULAR_THRESHOLD {
			log::debug!("Refusing to divide {:?} by {}", self, x);
			return Err(MatError::DivideByZero);
		}
		for v in self.0.iter_mut() {
			*v /= x;
		}
		Ok(self)
	}

	/// `self * rhs⁻¹`, as a new matrix
	pub fn try_div(&self, rhs: &Mat22) -> Result<Self, MatError> {
		let mut result = *self;
		result.div_mat(rhs)?;
		Ok(result)
	}

	/// `self / x`, as a new matrix
	pub fn try_div_scalar(&self, x: f64) -> Result<Self, MatError> {
		let mut result = *self;
		result.div_scalar(x)?;
		Ok(result)
	}

	/// `x * m⁻¹`
	pub fn scalar_div(x: f64, m: &Mat22) -> Result<Self, MatError> {
		Ok(x * m.inverse()?)
	}

	/// `x - m`, computed as `(-1 * m) + x`
	pub fn scalar_sub(x: f64, m: &Mat22) -> Self {
		let mut result = *m;
		result.mul_scalar(-1.).add_scalar(x);
		result
	}

	/// Unary plus: a copy multiplied by `1`
	pub fn pos(&self) -> Self {
		let mut result = *self;
		result.mul_scalar(1.);
		result
	}

	/// Add one to every element, returning the updated matrix
	pub fn increment(&mut self) -> &mut Self {
		self.add_scalar(1.)
	}

	/// Subtract one from every element, returning the updated matrix
	pub fn decrement(&mut self) -> &mut Self {
		self.sub_scalar(1.)
	}

	/// Add one to every element, returning the value from before
	pub fn post_increment(&mut self) -> Self {
		let prev = *self;
		self.add_scalar(1.);
		prev
	}

	/// Subtract one from every element, returning the value from before
	pub fn post_decrement(&mut self) -> Self {
		let prev = *self;
		self.sub_scalar(1.);
		prev
	}
}
