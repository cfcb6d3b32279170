//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::err::McfftError;
use crate::extents::Extents;
use crate::index::MdIndex;

/// An ordered list of sampled grid positions over one dense shape.
///
/// Order is meaningful: extraction and insertion match sparse element `k`
/// with `get(k)`. Duplicate entries are legal, but extraction and
/// insertion assume the list is injective.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    ext: Extents,
    entries: Vec<MdIndex>,
}

impl Schedule {
    /// Builds a schedule from indices. Every index must be bound to the
    /// given shape.
    pub fn from_indices(ext: &Extents, entries: Vec<MdIndex>) -> Result<Self, McfftError> {
        for e in &entries {
            if e.extents() != ext {
                return Err(McfftError::ExtentsMismatch);
            }
        }
        Ok(Schedule {
            ext: ext.clone(),
            entries,
        })
    }

    /// Builds a schedule from coordinate lists.
    pub fn from_coords(ext: &Extents, coords: &[&[usize]]) -> Result<Self, McfftError> {
        let mut entries = Vec::with_capacity(coords.len());
        for c in coords {
            entries.push(MdIndex::with_coords(ext, c)?);
        }
        Ok(Schedule {
            ext: ext.clone(),
            entries,
        })
    }

    /// Builds a one-dimensional schedule from sampled positions along a
    /// grid of the given length.
    pub fn from_points(len: usize, points: &[usize]) -> Result<Self, McfftError> {
        let ext = Extents::new(&[len])?;
        let mut entries = Vec::with_capacity(points.len());
        for &p in points {
            entries.push(MdIndex::with_coords(&ext, &[p])?);
        }
        Ok(Schedule { ext, entries })
    }

    /// The dense shape the schedule samples.
    pub fn extents(&self) -> &Extents {
        &self.ext
    }

    /// Number of sampled positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, k: usize) -> &MdIndex {
        &self.entries[k]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MdIndex> {
        self.entries.iter()
    }

    /// Sorts the entries into right-first (row-major) order.
    pub fn sort(&mut self) {
        self.entries.sort();
    }

    /// Dense memory offsets of the entries, in schedule order.
    pub fn offsets(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.pack_right()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_build_a_one_dimensional_schedule() {
        let s = Schedule::from_points(5, &[0, 2]).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.offsets(), vec![0, 2]);
        assert!(Schedule::from_points(5, &[5]).is_err());
    }

    #[test]
    fn coords_are_validated_against_the_shape() {
        let ext = Extents::new(&[2, 3]).unwrap();
        let s = Schedule::from_coords(&ext, &[&[1, 2], &[0, 0]]).unwrap();
        assert_eq!(s.offsets(), vec![5, 0]);
        assert!(Schedule::from_coords(&ext, &[&[2, 0]]).is_err());
        assert!(Schedule::from_coords(&ext, &[&[0]]).is_err());
    }

    #[test]
    fn indices_must_share_the_shape() {
        let a = Extents::new(&[2, 3]).unwrap();
        let b = Extents::new(&[3, 2]).unwrap();
        let idx = MdIndex::new(&b);
        assert_eq!(
            Schedule::from_indices(&a, vec![idx]),
            Err(McfftError::ExtentsMismatch)
        );
    }

    #[test]
    fn sort_orders_row_major() {
        let ext = Extents::new(&[3, 3]).unwrap();
        let mut s = Schedule::from_coords(&ext, &[&[2, 0], &[0, 1], &[1, 2], &[0, 0]]).unwrap();
        s.sort();
        assert_eq!(s.offsets(), vec![0, 1, 5, 6]);
    }
}
