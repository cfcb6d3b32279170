//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use std::error::Error;
use std::fmt::Formatter;

/// Errors reported while constructing shapes, arrays, schedules and
/// transform plans. Element access and arithmetic on already-constructed
/// values stay unchecked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum McfftError {
    /// An extent list was empty.
    EmptyExtents,
    /// An extent list contained a zero size at the given dimension.
    ZeroExtent(usize),
    /// An element count did not match the count implied by the extents.
    CountMismatch(usize, usize),
    /// A coordinate list did not match the dimensionality of the extents.
    RankMismatch(usize, usize),
    /// Two shapes that must agree did not.
    ExtentsMismatch,
    /// A dimension index was out of range for the given rank.
    AxisOutOfRange(usize, usize),
    /// A coordinate was out of range for its extent.
    CoordOutOfRange(usize, usize),
    /// A transform length had a prime factor other than 2, 3 or 5.
    NotSmooth(usize),
    /// A scalar coefficient count was not a power of two.
    BadCoefficientCount(usize),
    /// A transform was requested over scalars too shallow to hold it.
    DepthTooShallow(usize, usize),
}

impl Error for McfftError {}

impl std::fmt::Display for McfftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            McfftError::EmptyExtents => f.write_str("Extent lists must name at least one dimension"),
            McfftError::ZeroExtent(d) => {
                f.write_fmt(format_args!("Dimension {} has zero extent", d))
            }
            McfftError::CountMismatch(expected, got) => f.write_fmt(format_args!(
                "Element count expected to be {}, but it was {}",
                expected, got
            )),
            McfftError::RankMismatch(expected, got) => f.write_fmt(format_args!(
                "Coordinate list of rank {} does not match rank {}",
                got, expected
            )),
            McfftError::ExtentsMismatch => f.write_str("Operand shapes do not agree"),
            McfftError::AxisOutOfRange(axis, ndims) => f.write_fmt(format_args!(
                "Axis {} is out of range for a rank-{} shape",
                axis, ndims
            )),
            McfftError::CoordOutOfRange(coord, extent) => f.write_fmt(format_args!(
                "Coordinate {} is out of range for extent {}",
                coord, extent
            )),
            McfftError::NotSmooth(n) => f.write_fmt(format_args!(
                "Transform length {} is not 2/3/5-smooth",
                n
            )),
            McfftError::BadCoefficientCount(n) => f.write_fmt(format_args!(
                "Scalar coefficient count {} is not a power of two",
                n
            )),
            McfftError::DepthTooShallow(depth, phase) => f.write_fmt(format_args!(
                "Scalar depth {} cannot encode phase level {}",
                depth, phase
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offender() {
        let msg = format!("{}", McfftError::NotSmooth(7));
        assert!(msg.contains('7'));
        let msg = format!("{}", McfftError::CountMismatch(6, 5));
        assert!(msg.contains('6') && msg.contains('5'));
    }
}
