//! Fixed-size 2x2 `f64` matrix value type
//!
//! ```
//! use mat2x2::Mat22;
//!
//! let m = Mat22::new(2., -1., 1., 2.);
//! assert_eq!(m * m.inverse().unwrap(), Mat22::identity());
//! print!("{m}");
//! ```

mod config;
mod error;
mod mat22;

pub use config::FormatConfig;
pub use error::{MatError, ParseMatError};
pub use mat22::{Eigenvalue, Mat22, Mat22Display, RootDisplay, NEAR_SINGULAR_THRESHOLD};
