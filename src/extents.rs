//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::err::McfftError;

/// An immutable ordered list of positive per-dimension sizes.
///
/// The stride of dimension `d` is the product of all extents after `d`,
/// so the last dimension is adjacent in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extents {
    sizes: Vec<usize>,
}

impl Extents {
    /// Builds a shape from per-dimension sizes. Empty lists and zero
    /// extents are refused.
    pub fn new(sizes: &[usize]) -> Result<Self, McfftError> {
        if sizes.is_empty() {
            return Err(McfftError::EmptyExtents);
        }
        for (d, &s) in sizes.iter().enumerate() {
            if s == 0 {
                return Err(McfftError::ZeroExtent(d));
            }
        }
        Ok(Extents {
            sizes: sizes.to_vec(),
        })
    }

    /// Number of dimensions.
    pub fn ndims(&self) -> usize {
        self.sizes.len()
    }

    /// Size of dimension `d`.
    pub fn get(&self, d: usize) -> usize {
        self.sizes[d]
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total element count, the product of all extents.
    pub fn count(&self) -> usize {
        self.sizes.iter().product()
    }

    /// Product of the extents after dimension `d`; the last dimension has
    /// stride 1.
    pub fn stride(&self, d: usize) -> usize {
        self.sizes[d + 1..].iter().product()
    }
}

impl std::ops::Index<usize> for Extents {
    type Output = usize;
    fn index(&self, d: usize) -> &usize {
        &self.sizes[d]
    }
}
