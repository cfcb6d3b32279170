//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::err::McfftError;
use crate::extents::Extents;
use std::cmp::Ordering;

/// A multidimensional cursor: per-dimension coordinates bound to an
/// [`Extents`].
///
/// Every stepping method returns `true` while the traversal has not
/// wrapped and `false` exactly on the step that wraps around, so a full
/// sweep is written as a `loop`/`while` over the step result. Right-first
/// steps ripple the last dimension fastest (the dense memory order);
/// left-first steps ripple dimension 0 fastest. A one-dimensional index
/// degenerates to a modular counter.
///
/// # Example
///
/// ```rust
/// use mcfft::{Extents, MdIndex};
///
/// let ext = Extents::new(&[2, 3]).unwrap();
/// let mut idx = MdIndex::new(&ext);
/// let mut offsets = Vec::new();
/// loop {
///     offsets.push(idx.pack_right());
///     if !idx.incr() {
///         break;
///     }
/// }
/// assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MdIndex {
    ids: Vec<usize>,
    ext: Extents,
}

impl MdIndex {
    /// A zeroed cursor at the head of the shape.
    pub fn new(ext: &Extents) -> Self {
        MdIndex {
            ids: vec![0; ext.ndims()],
            ext: ext.clone(),
        }
    }

    /// A cursor at explicit coordinates. The coordinate count must match
    /// the rank; coordinates must lie within the extents.
    pub fn with_coords(ext: &Extents, coords: &[usize]) -> Result<Self, McfftError> {
        if coords.len() != ext.ndims() {
            return Err(McfftError::RankMismatch(ext.ndims(), coords.len()));
        }
        for (d, &c) in coords.iter().enumerate() {
            if c >= ext.get(d) {
                return Err(McfftError::CoordOutOfRange(c, ext.get(d)));
            }
        }
        Ok(MdIndex {
            ids: coords.to_vec(),
            ext: ext.clone(),
        })
    }

    pub fn extents(&self) -> &Extents {
        &self.ext
    }

    pub fn ndims(&self) -> usize {
        self.ids.len()
    }

    pub fn get(&self, d: usize) -> usize {
        self.ids[d]
    }

    pub fn set(&mut self, d: usize, value: usize) {
        self.ids[d] = value;
    }

    pub fn coords(&self) -> &[usize] {
        &self.ids
    }

    /// Resets to all-zero coordinates.
    pub fn head(&mut self) {
        for v in self.ids.iter_mut() {
            *v = 0;
        }
    }

    /// Sets every coordinate to its maximum.
    pub fn tail(&mut self) {
        for (d, v) in self.ids.iter_mut().enumerate() {
            *v = self.ext.get(d) - 1;
        }
    }

    /// Right-first increment. Wraps tail to head.
    pub fn incr(&mut self) -> bool {
        for d in (0..self.ids.len()).rev() {
            self.ids[d] += 1;
            if self.ids[d] < self.ext.get(d) {
                return true;
            }
            self.ids[d] = 0;
        }
        false
    }

    /// Right-first decrement. Wraps head to tail.
    pub fn decr(&mut self) -> bool {
        for d in (0..self.ids.len()).rev() {
            if self.ids[d] > 0 {
                self.ids[d] -= 1;
                return true;
            }
            self.ids[d] = self.ext.get(d) - 1;
        }
        false
    }

    /// Left-first increment.
    pub fn incr_left(&mut self) -> bool {
        for d in 0..self.ids.len() {
            self.ids[d] += 1;
            if self.ids[d] < self.ext.get(d) {
                return true;
            }
            self.ids[d] = 0;
        }
        false
    }

    /// Left-first decrement.
    pub fn decr_left(&mut self) -> bool {
        for d in 0..self.ids.len() {
            if self.ids[d] > 0 {
                self.ids[d] -= 1;
                return true;
            }
            self.ids[d] = self.ext.get(d) - 1;
        }
        false
    }

    /// Right-first increment holding `axis` fixed.
    pub fn incr_skip(&mut self, axis: usize) -> bool {
        for d in (0..self.ids.len()).rev() {
            if d == axis {
                continue;
            }
            self.ids[d] += 1;
            if self.ids[d] < self.ext.get(d) {
                return true;
            }
            self.ids[d] = 0;
        }
        false
    }

    /// Right-first decrement holding `axis` fixed.
    pub fn decr_skip(&mut self, axis: usize) -> bool {
        for d in (0..self.ids.len()).rev() {
            if d == axis {
                continue;
            }
            if self.ids[d] > 0 {
                self.ids[d] -= 1;
                return true;
            }
            self.ids[d] = self.ext.get(d) - 1;
        }
        false
    }

    /// Left-first increment holding `axis` fixed.
    pub fn incr_skip_left(&mut self, axis: usize) -> bool {
        for d in 0..self.ids.len() {
            if d == axis {
                continue;
            }
            self.ids[d] += 1;
            if self.ids[d] < self.ext.get(d) {
                return true;
            }
            self.ids[d] = 0;
        }
        false
    }

    /// Left-first decrement holding `axis` fixed.
    pub fn decr_skip_left(&mut self, axis: usize) -> bool {
        for d in 0..self.ids.len() {
            if d == axis {
                continue;
            }
            if self.ids[d] > 0 {
                self.ids[d] -= 1;
                return true;
            }
            self.ids[d] = self.ext.get(d) - 1;
        }
        false
    }

    /// Advances the right-first packed offset by `skip`, wrapping
    /// modularly. Returns `false` when the move passed the tail.
    pub fn incr_by(&mut self, skip: usize) -> bool {
        let n = self.ext.count();
        let offset = self.pack_right() + skip;
        self.unpack_right(offset % n);
        offset < n
    }

    /// Moves the right-first packed offset back by `skip`. Returns
    /// `false` when the move reached or passed the head.
    pub fn decr_by(&mut self, skip: usize) -> bool {
        let n = self.ext.count();
        let offset = self.pack_right();
        if skip >= offset {
            self.unpack_right(offset + n - skip % n);
            false
        } else {
            self.unpack_right(offset - skip);
            true
        }
    }

    /// Left-order counterpart of [`incr_by`](Self::incr_by).
    pub fn incr_by_left(&mut self, skip: usize) -> bool {
        let n = self.ext.count();
        let offset = self.pack_left() + skip;
        self.unpack_left(offset % n);
        offset < n
    }

    /// Left-order counterpart of [`decr_by`](Self::decr_by).
    pub fn decr_by_left(&mut self, skip: usize) -> bool {
        let n = self.ext.count();
        let offset = self.pack_left();
        if skip >= offset {
            self.unpack_left(offset + n - skip % n);
            false
        } else {
            self.unpack_left(offset - skip);
            true
        }
    }

    /// Linear offset with dimension 0 fastest.
    pub fn pack_left(&self) -> usize {
        let mut offset = 0;
        for d in (0..self.ids.len()).rev() {
            offset = offset * self.ext.get(d) + self.ids[d];
        }
        offset
    }

    /// Linear offset with the last dimension fastest. This is the dense
    /// memory offset.
    pub fn pack_right(&self) -> usize {
        let mut offset = 0;
        for d in 0..self.ids.len() {
            offset = offset * self.ext.get(d) + self.ids[d];
        }
        offset
    }

    /// Inverse of [`pack_left`](Self::pack_left). Offsets beyond the
    /// element count wrap digit by digit.
    pub fn unpack_left(&mut self, offset: usize) {
        let mut rem = offset;
        for d in 0..self.ids.len() {
            self.ids[d] = rem % self.ext.get(d);
            rem /= self.ext.get(d);
        }
    }

    /// Inverse of [`pack_right`](Self::pack_right).
    pub fn unpack_right(&mut self, offset: usize) {
        let mut rem = offset;
        for d in (0..self.ids.len()).rev() {
            self.ids[d] = rem % self.ext.get(d);
            rem /= self.ext.get(d);
        }
    }
}

impl PartialOrd for MdIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MdIndex {
    /// Right-first packed order, equal to lexicographic coordinate order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.ids.cmp(&other.ids)
    }
}

impl std::fmt::Display for MdIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in &self.ids {
            write!(f, "[{}]", v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(sizes: &[usize]) -> Extents {
        Extents::new(sizes).unwrap()
    }

    fn check_steps<F: FnMut(&mut MdIndex) -> bool>(
        idx: &mut MdIndex,
        mut f: F,
        expected: &[(&[usize], bool)],
    ) {
        for (coords, result) in expected {
            assert_eq!(f(idx), *result);
            assert_eq!(idx.coords(), *coords);
        }
    }

    #[test]
    fn right_first_increment() {
        let mut idx = MdIndex::new(&ext(&[2, 3]));
        check_steps(
            &mut idx,
            |i| i.incr(),
            &[
                (&[0, 1], true),
                (&[0, 2], true),
                (&[1, 0], true),
                (&[1, 1], true),
                (&[1, 2], true),
                (&[0, 0], false),
            ],
        );
    }

    #[test]
    fn left_first_increment() {
        let mut idx = MdIndex::new(&ext(&[2, 3]));
        check_steps(
            &mut idx,
            |i| i.incr_left(),
            &[
                (&[1, 0], true),
                (&[0, 1], true),
                (&[1, 1], true),
                (&[0, 2], true),
                (&[1, 2], true),
                (&[0, 0], false),
            ],
        );
    }

    #[test]
    fn right_first_decrement() {
        let mut idx = MdIndex::new(&ext(&[2, 3]));
        idx.tail();
        check_steps(
            &mut idx,
            |i| i.decr(),
            &[
                (&[1, 1], true),
                (&[1, 0], true),
                (&[0, 2], true),
                (&[0, 1], true),
                (&[0, 0], true),
                (&[1, 2], false),
            ],
        );
    }

    #[test]
    fn left_first_decrement() {
        let mut idx = MdIndex::new(&ext(&[2, 3]));
        idx.tail();
        check_steps(
            &mut idx,
            |i| i.decr_left(),
            &[
                (&[0, 2], true),
                (&[1, 1], true),
                (&[0, 1], true),
                (&[1, 0], true),
                (&[0, 0], true),
                (&[1, 2], false),
            ],
        );
    }

    #[test]
    fn skipped_increment_holds_the_axis() {
        let mut idx = MdIndex::new(&ext(&[2, 5, 3]));
        check_steps(
            &mut idx,
            |i| i.incr_skip(1),
            &[
                (&[0, 0, 1], true),
                (&[0, 0, 2], true),
                (&[1, 0, 0], true),
                (&[1, 0, 1], true),
                (&[1, 0, 2], true),
                (&[0, 0, 0], false),
            ],
        );

        let mut idx = MdIndex::new(&ext(&[2, 5, 3]));
        check_steps(
            &mut idx,
            |i| i.incr_skip_left(1),
            &[
                (&[1, 0, 0], true),
                (&[0, 0, 1], true),
                (&[1, 0, 1], true),
                (&[0, 0, 2], true),
                (&[1, 0, 2], true),
                (&[0, 0, 0], false),
            ],
        );
    }

    #[test]
    fn skipped_decrement_holds_the_axis() {
        let mut idx = MdIndex::new(&ext(&[2, 5, 3]));
        idx.tail();
        check_steps(
            &mut idx,
            |i| i.decr_skip(1),
            &[
                (&[1, 4, 1], true),
                (&[1, 4, 0], true),
                (&[0, 4, 2], true),
                (&[0, 4, 1], true),
                (&[0, 4, 0], true),
                (&[1, 4, 2], false),
            ],
        );

        let mut idx = MdIndex::new(&ext(&[2, 5, 3]));
        idx.tail();
        check_steps(
            &mut idx,
            |i| i.decr_skip_left(1),
            &[
                (&[0, 4, 2], true),
                (&[1, 4, 1], true),
                (&[0, 4, 1], true),
                (&[1, 4, 0], true),
                (&[0, 4, 0], true),
                (&[1, 4, 2], false),
            ],
        );
    }

    #[test]
    fn bulk_increment_right() {
        let mut idx = MdIndex::new(&ext(&[3, 5]));
        check_steps(
            &mut idx,
            |i| i.incr_by(4),
            &[
                (&[0, 4], true),
                (&[1, 3], true),
                (&[2, 2], true),
                (&[0, 1], false),
            ],
        );
    }

    #[test]
    fn bulk_increment_left() {
        let mut idx = MdIndex::new(&ext(&[3, 5]));
        check_steps(
            &mut idx,
            |i| i.incr_by_left(4),
            &[
                (&[1, 1], true),
                (&[2, 2], true),
                (&[0, 4], true),
                (&[1, 0], false),
            ],
        );
    }

    #[test]
    fn bulk_decrement_right() {
        let mut idx = MdIndex::new(&ext(&[3, 5]));
        idx.tail();
        check_steps(
            &mut idx,
            |i| i.decr_by(4),
            &[
                (&[2, 0], true),
                (&[1, 1], true),
                (&[0, 2], true),
                (&[2, 3], false),
            ],
        );
    }

    #[test]
    fn bulk_decrement_left() {
        let mut idx = MdIndex::new(&ext(&[3, 5]));
        idx.tail();
        check_steps(
            &mut idx,
            |i| i.decr_by_left(4),
            &[
                (&[1, 3], true),
                (&[0, 2], true),
                (&[2, 0], true),
                (&[1, 4], false),
            ],
        );
    }

    #[test]
    fn pack_enumerates_in_step_order() {
        let e = ext(&[2, 3, 5]);
        let mut idx = MdIndex::new(&e);
        let mut i = 0;
        loop {
            assert_eq!(idx.pack_right(), i);
            i += 1;
            if !idx.incr() {
                break;
            }
        }
        assert_eq!(i, e.count());

        let mut idx = MdIndex::new(&e);
        let mut i = 0;
        loop {
            assert_eq!(idx.pack_left(), i);
            i += 1;
            if !idx.incr_left() {
                break;
            }
        }
        assert_eq!(i, e.count());
    }

    #[test]
    fn unpack_inverts_pack() {
        let e = ext(&[2, 3, 5]);
        for offset in 0..e.count() {
            let mut a = MdIndex::new(&e);
            a.unpack_right(offset);
            assert_eq!(a.pack_right(), offset);
            let mut b = MdIndex::new(&e);
            b.unpack_left(offset);
            assert_eq!(b.pack_left(), offset);
        }
    }

    #[test]
    fn single_dimension_is_a_modular_counter() {
        let mut idx = MdIndex::new(&ext(&[3]));
        assert!(idx.incr());
        assert!(idx.incr());
        assert!(!idx.incr());
        assert_eq!(idx.coords(), &[0]);
        assert!(!idx.decr());
        assert_eq!(idx.coords(), &[2]);
    }

    #[test]
    fn ordering_follows_packed_offsets() {
        let e = ext(&[7, 7]);
        let a = MdIndex::with_coords(&e, &[3, 2]).unwrap();
        let b = MdIndex::with_coords(&e, &[3, 3]).unwrap();
        let c = MdIndex::with_coords(&e, &[4, 0]).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(a.pack_right() < b.pack_right());
    }

    #[test]
    fn construction_checks_coordinates() {
        let e = ext(&[2, 3]);
        assert!(MdIndex::with_coords(&e, &[1, 2]).is_ok());
        assert!(MdIndex::with_coords(&e, &[1]).is_err());
        assert!(MdIndex::with_coords(&e, &[2, 0]).is_err());
    }
}
