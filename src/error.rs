use std::{io, num::ParseFloatError};

use thiserror::Error;

/// Error generated by a fallible [Mat22](crate::Mat22) operation
///
/// Every operation that can fail checks its inputs before writing anything, so
/// a matrix that produced one of these is left exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum MatError {
    /// Scalar divisor too close to zero, or a determinant of exactly zero
    #[error("Divide by zero")]
    DivideByZero,
    /// Determinant is nonzero, but too small to invert reliably
    #[error("Inverse undefined (determinant: {determinant})")]
    InverseUndefined {
        determinant: f64,
    },
    #[error("Index out of bound (index: {index}, valid: 0..=3)")]
    IndexOutOfRange {
        index: isize,
    },
    /// Eigenvalue selector was not one of 0, 1, or 2
    #[error("Invalid eigenvalue selector (actual: {selector}, expected: 0, 1, or 2)")]
    InvalidSelector {
        selector: i32,
    },
}

/// Error generated when reading a [Mat22](crate::Mat22) from text
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseMatError {
    #[error("Unable to read input")]
    Io(#[from] io::Error),
    #[error("Matrix element was not a number")]
    Float(#[from] #[source] ParseFloatError),
    #[error("Not enough values (actual: {actual}, expected: 4)")]
    MissingValues {
        actual: usize,
    },
    #[error("Too many values (expected: 4)")]
    TrailingValues,
}

impl PartialEq for ParseMatError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io(_), Self::Io(_)) => false, // io::Error is not comparable
            (Self::Float(l0), Self::Float(r0)) => l0 == r0,
            (Self::MissingValues { actual: l0 }, Self::MissingValues { actual: r0 }) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}
