use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::MatError;

use super::Mat22;

/// Implement a binary operator for every combination of owned and borrowed
/// operands, by applying a compound operation to a copy of the left side.
macro_rules! mat_binop {
    ($trait: ident, $method: ident, $rhs: ty, |$lhs_id: ident, $rhs_id: ident| $body: expr) => {
        impl $trait<$rhs> for Mat22 {
            type Output = Mat22;

            fn $method(self, rhs: $rhs) -> Self::Output {
                let mut $lhs_id = self;
                let $rhs_id = rhs;
                $body;
                $lhs_id
            }
        }

        impl $trait<$rhs> for &Mat22 {
            type Output = Mat22;

            fn $method(self, rhs: $rhs) -> Self::Output {
                (*self).$method(rhs)
            }
        }
    };
}

mat_binop!(Add, add, &Mat22, |lhs, rhs| lhs.add_mat(rhs));
mat_binop!(Add, add, Mat22, |lhs, rhs| lhs.add_mat(&rhs));
mat_binop!(Sub, sub, &Mat22, |lhs, rhs| lhs.sub_mat(rhs));
mat_binop!(Sub, sub, Mat22, |lhs, rhs| lhs.sub_mat(&rhs));
mat_binop!(Mul, mul, &Mat22, |lhs, rhs| lhs.mul_mat(rhs));
mat_binop!(Mul, mul, Mat22, |lhs, rhs| lhs.mul_mat(&rhs));
mat_binop!(Add, add, f64, |lhs, rhs| lhs.add_scalar(rhs));
mat_binop!(Sub, sub, f64, |lhs, rhs| lhs.sub_scalar(rhs));
mat_binop!(Mul, mul, f64, |lhs, rhs| lhs.mul_scalar(rhs));

/// Matrix division (multiply by inverse). Fails if `rhs` can't be inverted.
impl Div<&Mat22> for &Mat22 {
    type Output = Result<Mat22, MatError>;

    fn div(self, rhs: &Mat22) -> Self::Output {
        self.try_div(rhs)
    }
}

impl Div<Mat22> for Mat22 {
    type Output = Result<Mat22, MatError>;

    fn div(self, rhs: Mat22) -> Self::Output {
        self.try_div(&rhs)
    }
}

impl Div<&Mat22> for Mat22 {
    type Output = Result<Mat22, MatError>;

    fn div(self, rhs: &Mat22) -> Self::Output {
        self.try_div(rhs)
    }
}

impl Div<f64> for Mat22 {
    type Output = Result<Mat22, MatError>;

    fn div(self, rhs: f64) -> Self::Output {
        self.try_div_scalar(rhs)
    }
}

impl Div<f64> for &Mat22 {
    type Output = Result<Mat22, MatError>;

    fn div(self, rhs: f64) -> Self::Output {
        self.try_div_scalar(rhs)
    }
}

impl Add<Mat22> for f64 {
    type Output = Mat22;

    fn add(self, rhs: Mat22) -> Self::Output {
        rhs + self
    }
}

impl Add<&Mat22> for f64 {
    type Output = Mat22;

    fn add(self, rhs: &Mat22) -> Self::Output {
        rhs + self
    }
}

impl Sub<Mat22> for f64 {
    type Output = Mat22;

    fn sub(self, rhs: Mat22) -> Self::Output {
        Mat22::scalar_sub(self, &rhs)
    }
}

impl Sub<&Mat22> for f64 {
    type Output = Mat22;

    fn sub(self, rhs: &Mat22) -> Self::Output {
        Mat22::scalar_sub(self, rhs)
    }
}

impl Mul<Mat22> for f64 {
    type Output = Mat22;

    fn mul(self, rhs: Mat22) -> Self::Output {
        rhs * self
    }
}

impl Mul<&Mat22> for f64 {
    type Output = Mat22;

    fn mul(self, rhs: &Mat22) -> Self::Output {
        rhs * self
    }
}

impl Div<Mat22> for f64 {
    type Output = Result<Mat22, MatError>;

    fn div(self, rhs: Mat22) -> Self::Output {
        Mat22::scalar_div(self, &rhs)
    }
}

impl Div<&Mat22> for f64 {
    type Output = Result<Mat22, MatError>;

    fn div(self, rhs: &Mat22) -> Self::Output {
        Mat22::scalar_div(self, rhs)
    }
}

impl AddAssign<&Mat22> for Mat22 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: &Mat22) {
        self.add_mat(rhs);
    }
}

impl AddAssign<Mat22> for Mat22 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Mat22) {
        self.add_mat(&rhs);
    }
}

impl SubAssign<&Mat22> for Mat22 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: &Mat22) {
        self.sub_mat(rhs);
    }
}

impl SubAssign<Mat22> for Mat22 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Mat22) {
        self.sub_mat(&rhs);
    }
}

impl MulAssign<&Mat22> for Mat22 {
    fn mul_assign(&mut self, rhs: &Mat22) {
        self.mul_mat(rhs);
    }
}

impl MulAssign<Mat22> for Mat22 {
    fn mul_assign(&mut self, rhs: Mat22) {
        self.mul_mat(&rhs);
    }
}

impl AddAssign<f64> for Mat22 {
    fn add_assign(&mut self, rhs: f64) {
        self.add_scalar(rhs);
    }
}

impl SubAssign<f64> for Mat22 {
    fn sub_assign(&mut self, rhs: f64) {
        self.sub_scalar(rhs);
    }
}

impl MulAssign<f64> for Mat22 {
    fn mul_assign(&mut self, rhs: f64) {
        self.mul_scalar(rhs);
    }
}

impl Neg for Mat22 {
    type Output = Mat22;

    fn neg(self) -> Self::Output {
        self * -1.
    }
}

impl Neg for &Mat22 {
    type Output = Mat22;

    fn neg(self) -> Self::Output {
        self * -1.
    }
}

#[cfg(test)]
mod test {
    use crate::{Mat22, MatError};

    #[test]
    fn add_sub() {
        let u = Mat22::new(1., 2., 3., 4.);
        let v = Mat22::new(-1., 5., 0.5, 2.);
        assert_eq!(u + v, Mat22::new(0., 7., 3.5, 6.));
        assert_eq!(&u + &v, u + v);
        assert_eq!(u - v, Mat22::new(2., -3., 2.5, 2.));
        assert_eq!(u - &v + v, u);
    }

    #[test]
    fn matmul_not_commutative() {
        let u = Mat22::new(1., 2., 3., 4.);
        let v = Mat22::new(0., 1., 1., 0.);
        assert_eq!(u * v, Mat22::new(2., 1., 4., 3.));
        assert_eq!(v * u, Mat22::new(3., 4., 1., 2.));
    }

    #[test]
    fn matdiv() {
        let m = Mat22::new(2., -1., 1., 2.);
        assert_eq!((m / m).unwrap(), Mat22::identity());
        assert_eq!(m / Mat22::new(1., 2., 2., 4.), Err(MatError::DivideByZero));
    }

    #[test]
    fn scalar_commutes() {
        let m = Mat22::new(2., -1., 1., 2.);
        assert_eq!(3. + m, m + 3.);
        assert_eq!(3. * m, m * 3.);
        assert_eq!(3. + &m, &m + 3.);
    }

    #[test]
    fn scalar_first_sub() {
        let m = Mat22::new(2., -1., 1., 2.);
        assert_eq!(1. - m, -m + 1.);
        assert_eq!(1. - m, Mat22::new(-1., 2., 0., -1.));
    }

    #[test]
    fn scalar_first_div() {
        let m = Mat22::new(-50., 100., 0., -50.);
        assert_eq!((10. / m).unwrap(), 10. * m.inverse().unwrap());
        assert_eq!(10. / Mat22::new(1e-7, 0., 0., 1.), Err(MatError::InverseUndefined { determinant: 1e-7 }));
    }

    #[test]
    fn scalar_roundtrip() {
        let m = Mat22::new(-5., 10., 0., -5.);
        assert_eq!((m * 10. / 10.).unwrap(), m);
        assert_eq!(m / 1e-9, Err(MatError::DivideByZero));
    }

    #[test]
    fn unary() {
        let m = Mat22::new(1.5, -2., 0., 7.);
        assert_eq!(m.pos(), m);
        assert_eq!(-(-m), m);
        assert_eq!(-&m, Mat22::new(-1.5, 2., 0., -7.));
        assert!((-m).c().is_sign_positive());
    }

    #[test]
    fn compound() {
        let mut m = Mat22::new(3., 1., 7., 4.);
        m += m;
        assert_eq!(m, 2. * Mat22::new(3., 1., 7., 4.));
        m -= Mat22::new(3., 1., 7., 4.);
        assert_eq!(m, Mat22::new(3., 1., 7., 4.));
        m *= 2.;
        m += 10.;
        m -= 10.;
        assert_eq!(m, Mat22::new(6., 2., 14., 8.));
        m *= Mat22::identity();
        assert_eq!(m, Mat22::new(6., 2., 14., 8.));
    }
}
