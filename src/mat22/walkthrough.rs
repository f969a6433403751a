#![cfg(test)]
//! Walkthrough exercising the whole operator suite together

use std::io::Cursor;

use super::Mat22;

macro_rules! assert_close {
	($a: expr, $b: expr) => {
		{
			let (a, b) = ($a, $b);
			const EPS: f64 = 1e-6;
			if f64::abs(a - b) >= EPS {
				assert_eq!(a, b);
			}
		}
	};
}

#[test]
fn inverse_and_roots() {
	let m1 = Mat22::new(2., -1., 1., 2.);
	let m1_inv = m1.inverse().unwrap();
	assert_eq!(m1_inv * m1, Mat22::identity());
	assert_eq!(m1 * m1_inv, Mat22::identity());

	assert_eq!(m1.determinant(), 5.);
	assert_eq!(m1.trace(), 4.);

	let root1 = m1.eigen(1).unwrap();
	assert_close!(root1[0], 2.);
	assert_close!(root1[1], 1.);

	let root2 = m1.eigen(2).unwrap();
	assert_close!(root2[0], 2.);
	assert_close!(root2[1], -1.);
}

#[test]
fn scalar_arithmetic() {
	let m1 = Mat22::new(2., -1., 1., 2.);

	let m2 = m1 + 1.;
	assert_eq!(m2, Mat22::new(3., 0., 2., 3.));
	let m2 = 1. + m1;
	assert_eq!(m2, Mat22::new(3., 0., 2., 3.));

	let m3 = m2 - 1.;
	assert_eq!(m3, m1);

	let m4 = 1. - m3;
	assert_eq!(m4, Mat22::new(-1., 2., 0., -1.));

	let m5 = m4 * 5.;
	assert_eq!(m5, Mat22::new(-5., 10., 0., -5.));

	let m6 = 10. * m5;
	assert_eq!(m6, Mat22::new(-50., 100., 0., -50.));
	assert_eq!((m6 / 10.).unwrap(), m5);
	assert_eq!((10. / m6).unwrap(), 10. * m6.inverse().unwrap());
	assert_eq!(5. * m4 * 10., m6);
}

#[test]
fn increment_decrement() {
	let mut m1 = Mat22::new(2., -1., 1., 2.);

	let m7 = m1.post_increment();
	assert_eq!(m7, Mat22::new(2., -1., 1., 2.));
	assert_eq!(m1, Mat22::new(3., 0., 2., 3.));

	let mut m8 = *m1.decrement();
	assert_eq!(m8, m1);
	m8.post_decrement();

	assert_eq!(m1, 1. + m8);
	assert_eq!(m1 - 1., m8);
	assert_eq!(-m1 + 1., -m8);
	assert_eq!(2. * m1, m8 + m1 + 1.);
	assert_eq!(m1 * m1, m1 * (1. + m8));
}

#[test]
fn symmetry_and_similarity() {
	let m1 = Mat22::new(2., -1., 1., 2.);
	let mut m9 = Mat22::new(123., 6., 6., 4567.89);
	assert!(m9.is_symmetric());

	m9[0] = 3.;
	m9[1] = 1.;
	m9[2] = 7.;
	m9[3] = 4.;
	assert_eq!(m9, Mat22::new(3., 1., 7., 4.));
	assert!(!m9.is_symmetric());

	assert_eq!(m1.eigenvalues()[0], 5.);
	assert_eq!(m9.eigenvalues()[0], 5.);
	// Same determinant, different trace
	assert!(!m9.is_similar(&m1));
}

#[test]
fn compound_assignment() {
	let mut m9 = Mat22::new(3., 1., 7., 4.);
	m9 += m9;
	assert_eq!(m9, 2. * Mat22::new(3., 1., 7., 4.));

	let mut m10 = Mat22::default();
	m10 += (m9 / 2.).unwrap();
	assert_eq!(m10, Mat22::new(3., 1., 7., 4.));

	m10 *= 2.;
	assert_eq!(m10, m9);

	m10.div_scalar(2.).unwrap();
	assert_eq!(m10, (m9 / 2.).unwrap());

	m10 += 10.;
	assert_eq!(m10, ((m9 + 20.) / 2.).unwrap());

	m10 -= 10.;
	assert_eq!(m10, 0.5 * m9);

	let m11 = m10.transpose();
	assert_eq!(m10, m11.transpose());

	let m13 = -m11;
	assert_eq!(m11.pos(), -m13);
}

#[test]
fn read_from_input() {
	let mut input = Cursor::new("10 20 30 40\n");
	let mut output = Vec::new();
	let m12 = Mat22::prompt(&mut input, &mut output).unwrap();
	assert_eq!(m12, Mat22::new(10., 20., 30., 40.));
}
