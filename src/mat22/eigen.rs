use std::{fmt, ops::Deref};

use arrayvec::ArrayVec;

use crate::{FormatConfig, MatError};

use super::Mat22;

/// Result of [Mat22::eigen]
///
/// Holds a single real value, or the real and imaginary parts of a complex root
/// (in that order).
#[derive(Clone, Debug, PartialEq)]
pub struct Eigenvalue(ArrayVec<f64, 2>);

impl Eigenvalue {
    fn real(value: f64) -> Self {
        let mut values = ArrayVec::new();
        values.push(value);
        Self(values)
    }

    fn complex(re: f64, im: f64) -> Self {
        Self(ArrayVec::from([re, im]))
    }

    /// Real part (or the only value)
    pub fn re(&self) -> f64 {
        self.0[0]
    }

    /// Imaginary part, if this is a complex root
    pub fn im(&self) -> Option<f64> {
        self.0.get(1).copied()
    }

    pub fn is_complex(&self) -> bool {
        self.0.len() == 2
    }

    /// Render as `root {index}: ...` with the default [FormatConfig]
    pub fn display_root(&self, index: usize) -> RootDisplay<'_> {
        self.display_root_with(index, FormatConfig::default())
    }

    /// Render as `root {index}: ...`
    pub fn display_root_with(&self, index: usize, config: FormatConfig) -> RootDisplay<'_> {
        RootDisplay {
            value: self,
            index,
            precision: config.precision,
        }
    }
}

impl Deref for Eigenvalue {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Prints only the first value, honoring any precision in the format spec
impl fmt::Display for Eigenvalue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.re()),
            None => write!(f, "{}", self.re()),
        }
    }
}

/// Helper returned by [Eigenvalue::display_root]
pub struct RootDisplay<'a> {
    value: &'a Eigenvalue,
    index: usize,
    precision: usize,
}

impl fmt::Display for RootDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        write!(f, "root {}: {:.*}", self.index, p, self.value.re())?;
        match self.value.im() {
            Some(im) if im >= 0. => write!(f, " +{:.*}i", p, im),
            Some(im) => write!(f, " {:.*}i", p, im),
            None => Ok(()),
        }
    }
}

impl Mat22 {
    /// Eigenvalue extraction
    ///
    /// - `0`: the **determinant**, not an eigenvalue (this is what
    ///   [Mat22::eigenvalues] returns)
    /// - `1`: the root `(tr + √disc) / 2`, or `tr/2 + i·√(-disc)/2` when the
    ///   discriminant `tr² - 4·det` is negative
    /// - `2`: the root `(tr - √disc) / 2`, or its conjugate `tr/2 - i·√(-disc)/2`
    ///
    /// Any other selector is a [MatError::InvalidSelector].
    pub fn eigen(&self, selector: i32) -> Result<Eigenvalue, MatError> {
        let sign = match selector {
            0 => return Ok(Eigenvalue::real(self.determinant())),
            1 => 1.,
            2 => -1.,
            _ => {
                log::debug!("Invalid eigenvalue selector {}", selector);
                return Err(MatError::InvalidSelector { selector });
            }
        };

        let trace = self.trace();
        let disc = trace.powi(2) - 4. * self.determinant();
        log::trace!("eigen({}) of {:?}: discriminant={}", selector, self, disc);

        if disc >= 0. {
            Ok(Eigenvalue::real((trace + sign * disc.sqrt()) / 2.))
        } else {
            Ok(Eigenvalue::complex(trace / 2., sign * (-disc).sqrt() / 2.))
        }
    }

    /// Same as `eigen(0)`, which yields the determinant (see [Mat22::eigen])
    pub fn eigenvalues(&self) -> Eigenvalue {
        Eigenvalue::real(self.determinant())
    }
}

#[cfg(test)]
mod test {
    use crate::{FormatConfig, Mat22, MatError};

    macro_rules! assert_close {
        ($a: expr, $b: expr) => {
            {
                let (a, b) = ($a, $b);
                const EPS: f64 = 1e-6;
                if f64::abs(a - b) >= EPS {
                    // Delegate
                    assert_eq!(a, b);
                }
            }
        };
    }

    #[test]
    fn selector_zero_is_determinant() {
        let m = Mat22::new(2., -1., 1., 2.);
        assert_eq!(&*m.eigen(0).unwrap(), &[5.]);
        assert_eq!(m.eigenvalues(), m.eigen(0).unwrap());
    }

    #[test]
    fn complex_pair() {
        let m = Mat22::new(2., -1., 1., 2.);
        let root1 = m.eigen(1).unwrap();
        assert!(root1.is_complex());
        assert_close!(root1[0], 2.);
        assert_close!(root1[1], 1.);

        let root2 = m.eigen(2).unwrap();
        assert_close!(root2.re(), 2.);
        assert_close!(root2.im().unwrap(), -1.);
    }

    #[test]
    fn real_roots() {
        let m = Mat22::new(2., 0., 0., 3.);
        let root1 = m.eigen(1).unwrap();
        let root2 = m.eigen(2).unwrap();
        assert_eq!(root1.len(), 1);
        assert_close!(root1.re(), 3.);
        assert_close!(root2.re(), 2.);
        assert_eq!(root2.im(), None);
    }

    #[test]
    fn repeated_root() {
        let root = Mat22::identity().eigen(1).unwrap();
        assert_eq!(&*root, &[1.]);
        assert_eq!(Mat22::identity().eigen(2).unwrap(), root);
    }

    #[test]
    fn invalid_selector() {
        let m = Mat22::identity();
        assert_eq!(m.eigen(3), Err(MatError::InvalidSelector { selector: 3 }));
        assert_eq!(m.eigen(-1), Err(MatError::InvalidSelector { selector: -1 }));
    }

    #[test]
    fn display_root() {
        let m = Mat22::new(2., -1., 1., 2.);
        assert_eq!(m.eigen(1).unwrap().display_root(1).to_string(), "root 1: 2.00 +1.00i");
        assert_eq!(m.eigen(2).unwrap().display_root(2).to_string(), "root 2: 2.00 -1.00i");

        let real = Mat22::new(2., 0., 0., 3.).eigen(1).unwrap();
        assert_eq!(real.display_root(1).to_string(), "root 1: 3.00");
        assert_eq!(real.display_root_with(1, FormatConfig::new().with_precision(0)).to_string(), "root 1: 3");
    }

    #[test]
    fn display_first_value() {
        let det = Mat22::new(3., 1., 7., 4.).eigenvalues();
        assert_eq!(det.to_string(), "5");
        assert_eq!(format!("{:.2}", det), "5.00");
    }
}
