//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::err::McfftError;
use crate::extents::Extents;
use crate::index::MdIndex;
use crate::matrix::MatrixViewMut;
use crate::scalar::Scalar;
use crate::schedule::Schedule;
use crate::vector::{VectorView, VectorViewMut};
use num_complex::Complex;
use num_traits::float::{Float, FloatConst};
use num_traits::{Num, NumAssign, Zero};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Element types that can produce a zero of their own runtime shape.
///
/// Plain numbers have one zero; a multicomplex value's zero depends on
/// its depth, so insertion and masking derive the fill value from an
/// element already present.
pub trait ZeroLike {
    fn zero_like(&self) -> Self;
}

macro_rules! zero_like_prim {
    ($($t:ty),*) => {
        $(impl ZeroLike for $t {
            fn zero_like(&self) -> Self {
                0 as $t
            }
        })*
    };
}

zero_like_prim!(f32, f64, i32, i64, usize);

impl<T: Num + Clone> ZeroLike for Complex<T> {
    fn zero_like(&self) -> Self {
        Complex::zero()
    }
}

impl<T: Float + FloatConst + NumAssign> ZeroLike for Scalar<T> {
    fn zero_like(&self) -> Self {
        Scalar::zero(self.depth())
    }
}

/// An owned array with a fixed shape.
///
/// Storage is one contiguous `Vec` with the last dimension adjacent in
/// memory: the linear offset of an index is its right-first packed
/// offset. Construction validates counts and shapes; element access past
/// that point is plain slice indexing.
///
/// Arithmetic is eager and elementwise over references, so compound
/// expressions read as they evaluate:
///
/// ```rust
/// use mcfft::{Array, Extents};
///
/// let ext = Extents::new(&[3]).unwrap();
/// let x = Array::from_slice(&ext, &[1, 2, 3]).unwrap();
/// let y = Array::from_slice(&ext, &[4, 5, 6]).unwrap();
/// let z = Array::from_slice(&ext, &[7, 8, 9]).unwrap();
/// let w = &x + &(&(&y * &(-&z)) / 2);
/// assert_eq!(w.data(), &[-13, -18, -24]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Array<T> {
    ext: Extents,
    data: Vec<T>,
}

impl<T> Array<T> {
    /// Builds an array from a dense slice in memory order.
    pub fn from_slice(ext: &Extents, values: &[T]) -> Result<Self, McfftError>
    where
        T: Clone,
    {
        if values.len() != ext.count() {
            return Err(McfftError::CountMismatch(ext.count(), values.len()));
        }
        Ok(Array {
            ext: ext.clone(),
            data: values.to_vec(),
        })
    }

    /// Builds an array from an owned dense vector in memory order.
    pub fn from_vec(ext: &Extents, values: Vec<T>) -> Result<Self, McfftError> {
        if values.len() != ext.count() {
            return Err(McfftError::CountMismatch(ext.count(), values.len()));
        }
        Ok(Array {
            ext: ext.clone(),
            data: values,
        })
    }

    /// Fills every position with copies of one value.
    pub fn fill(ext: &Extents, value: T) -> Self
    where
        T: Clone,
    {
        Array {
            ext: ext.clone(),
            data: vec![value; ext.count()],
        }
    }

    /// Zero-fills a shape.
    pub fn zeros(ext: &Extents) -> Self
    where
        T: Zero + Clone,
    {
        Self::fill(ext, T::zero())
    }

    /// Builds an array by evaluating `f` at every index in memory order.
    pub fn from_fn<F: FnMut(&MdIndex) -> T>(ext: &Extents, mut f: F) -> Self {
        let mut idx = MdIndex::new(ext);
        let mut data = Vec::with_capacity(ext.count());
        loop {
            data.push(f(&idx));
            if !idx.incr() {
                break;
            }
        }
        Array {
            ext: ext.clone(),
            data,
        }
    }

    pub fn extents(&self) -> &Extents {
        &self.ext
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The dense backing slice in memory order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, idx: &MdIndex) -> &T {
        &self.data[idx.pack_right()]
    }

    pub fn get_mut(&mut self, idx: &MdIndex) -> &mut T {
        let offset = idx.pack_right();
        &mut self.data[offset]
    }

    /// Folds all elements in memory order, seeded with the first.
    pub fn reduce<F: FnMut(T, &T) -> T>(&self, mut f: F) -> T
    where
        T: Clone,
    {
        let mut acc = self.data[0].clone();
        for v in &self.data[1..] {
            acc = f(acc, v);
        }
        acc
    }

    /// Largest element under `PartialOrd`. Incomparable pairs keep the
    /// earlier element.
    pub fn max(&self) -> T
    where
        T: Clone + PartialOrd,
    {
        self.reduce(|acc, v| if *v > acc { v.clone() } else { acc })
    }

    /// Smallest element under `PartialOrd`.
    pub fn min(&self) -> T
    where
        T: Clone + PartialOrd,
    {
        self.reduce(|acc, v| if *v < acc { v.clone() } else { acc })
    }

    pub fn sum(&self) -> T
    where
        T: Clone + Add<Output = T>,
    {
        self.reduce(|acc, v| acc + v.clone())
    }

    pub fn prod(&self) -> T
    where
        T: Clone + Mul<Output = T>,
    {
        self.reduce(|acc, v| acc * v.clone())
    }

    /// Visits every element mutably in memory order.
    pub fn for_each<F: FnMut(&mut T)>(&mut self, mut f: F) {
        for v in self.data.iter_mut() {
            f(v);
        }
    }

    /// Maps every element into a new array of the same shape.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Array<U> {
        Array {
            ext: self.ext.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Visits axis numbers in ascending order.
    pub fn for_each_dim<F: FnMut(usize)>(&self, mut f: F) {
        for d in 0..self.ext.ndims() {
            f(d);
        }
    }

    /// Yields one mutable strided vector along `axis` for every
    /// combination of the remaining coordinates, in skipped right-first
    /// order.
    pub fn for_each_vector<F>(&mut self, axis: usize, mut f: F) -> Result<(), McfftError>
    where
        F: FnMut(&mut VectorViewMut<'_, T>),
    {
        if axis >= self.ext.ndims() {
            return Err(McfftError::AxisOutOfRange(axis, self.ext.ndims()));
        }
        let stride = self.ext.stride(axis);
        let len = self.ext.get(axis);
        let mut idx = MdIndex::new(&self.ext);
        loop {
            let base = idx.pack_right();
            let mut view = VectorViewMut::new(&mut self.data, base, stride, len);
            f(&mut view);
            if !idx.incr_skip(axis) {
                break;
            }
        }
        Ok(())
    }

    /// A read-only strided vector along `axis`, anchored at `at` with its
    /// `axis` coordinate zeroed.
    pub fn vector_view(&self, axis: usize, at: &MdIndex) -> Result<VectorView<'_, T>, McfftError> {
        if axis >= self.ext.ndims() {
            return Err(McfftError::AxisOutOfRange(axis, self.ext.ndims()));
        }
        let mut anchor = at.clone();
        anchor.set(axis, 0);
        Ok(VectorView::new(
            &self.data,
            anchor.pack_right(),
            self.ext.stride(axis),
            self.ext.get(axis),
        ))
    }

    /// A mutable strided vector along `axis`, anchored at `at`.
    pub fn vector_view_mut(
        &mut self,
        axis: usize,
        at: &MdIndex,
    ) -> Result<VectorViewMut<'_, T>, McfftError> {
        if axis >= self.ext.ndims() {
            return Err(McfftError::AxisOutOfRange(axis, self.ext.ndims()));
        }
        let mut anchor = at.clone();
        anchor.set(axis, 0);
        let base = anchor.pack_right();
        let stride = self.ext.stride(axis);
        let len = self.ext.get(axis);
        Ok(VectorViewMut::new(&mut self.data, base, stride, len))
    }

    /// A mutable two-axis view, anchored at `at` with both axis
    /// coordinates zeroed. Rows run along `axis_r`, columns along
    /// `axis_c`.
    pub fn matrix_view_mut(
        &mut self,
        axis_r: usize,
        axis_c: usize,
        at: &MdIndex,
    ) -> Result<MatrixViewMut<'_, T>, McfftError> {
        let ndims = self.ext.ndims();
        if axis_r >= ndims {
            return Err(McfftError::AxisOutOfRange(axis_r, ndims));
        }
        if axis_c >= ndims || axis_c == axis_r {
            return Err(McfftError::AxisOutOfRange(axis_c, ndims));
        }
        let mut anchor = at.clone();
        anchor.set(axis_r, 0);
        anchor.set(axis_c, 0);
        let base = anchor.pack_right();
        let stride_r = self.ext.stride(axis_r);
        let stride_c = self.ext.stride(axis_c);
        let rows = self.ext.get(axis_r);
        let cols = self.ext.get(axis_c);
        Ok(MatrixViewMut::new(
            &mut self.data, base, stride_r, stride_c, rows, cols,
        ))
    }

    /// Gathers the scheduled positions into a one-dimensional array, in
    /// schedule order. The schedule must sample this array's shape.
    pub fn extract(&self, sched: &Schedule) -> Result<Array<T>, McfftError>
    where
        T: Clone,
    {
        if sched.extents() != &self.ext {
            return Err(McfftError::ExtentsMismatch);
        }
        let ext = Extents::new(&[sched.len()])?;
        let data = sched
            .iter()
            .map(|idx| self.data[idx.pack_right()].clone())
            .collect();
        Ok(Array { ext, data })
    }

    /// Scatters this one-dimensional array through the schedule into a
    /// dense array, zero elsewhere. The element count must equal the
    /// schedule length.
    pub fn insert_into(&self, sched: &Schedule) -> Result<Array<T>, McfftError>
    where
        T: Clone + ZeroLike,
    {
        if self.ext.ndims() != 1 || self.len() != sched.len() {
            return Err(McfftError::CountMismatch(sched.len(), self.len()));
        }
        let mut out = Array::fill(sched.extents(), self.data[0].zero_like());
        for (k, idx) in sched.iter().enumerate() {
            out.data[idx.pack_right()] = self.data[k].clone();
        }
        Ok(out)
    }

    /// Zeroes every position outside the schedule.
    pub fn mask(&mut self, sched: &Schedule)
    where
        T: Clone + ZeroLike,
    {
        assert_eq!(sched.extents(), &self.ext);
        let mut keep = vec![false; self.data.len()];
        for idx in sched.iter() {
            keep[idx.pack_right()] = true;
        }
        let zero = self.data[0].zero_like();
        for (v, k) in self.data.iter_mut().zip(keep) {
            if !k {
                *v = zero.clone();
            }
        }
    }
}

impl<'a, T> std::ops::Index<&'a MdIndex> for Array<T> {
    type Output = T;
    fn index(&self, idx: &MdIndex) -> &T {
        self.get(idx)
    }
}

impl<'a, T> std::ops::IndexMut<&'a MdIndex> for Array<T> {
    fn index_mut(&mut self, idx: &MdIndex) -> &mut T {
        self.get_mut(idx)
    }
}

impl<T> std::ops::Index<usize> for Array<T> {
    type Output = T;
    fn index(&self, offset: usize) -> &T {
        &self.data[offset]
    }
}

impl<T> std::ops::IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, offset: usize) -> &mut T {
        &mut self.data[offset]
    }
}

macro_rules! array_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<'a, 'b, T> $trait<&'b Array<T>> for &'a Array<T>
        where
            T: Clone + $trait<Output = T>,
        {
            type Output = Array<T>;
            fn $method(self, rhs: &'b Array<T>) -> Array<T> {
                assert_eq!(self.ext, rhs.ext);
                Array {
                    ext: self.ext.clone(),
                    data: self
                        .data
                        .iter()
                        .zip(&rhs.data)
                        .map(|(a, b)| a.clone() $op b.clone())
                        .collect(),
                }
            }
        }
    };
}

array_binop!(Add, add, +);
array_binop!(Sub, sub, -);
array_binop!(Mul, mul, *);
array_binop!(Div, div, /);

macro_rules! array_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<'a, T> $trait<T> for &'a Array<T>
        where
            T: Clone + $trait<Output = T>,
        {
            type Output = Array<T>;
            fn $method(self, rhs: T) -> Array<T> {
                Array {
                    ext: self.ext.clone(),
                    data: self.data.iter().map(|a| a.clone() $op rhs.clone()).collect(),
                }
            }
        }
    };
}

array_scalar_binop!(Add, add, +);
array_scalar_binop!(Sub, sub, -);
array_scalar_binop!(Mul, mul, *);
array_scalar_binop!(Div, div, /);

impl<'a, T> Neg for &'a Array<T>
where
    T: Clone + Neg<Output = T>,
{
    type Output = Array<T>;
    fn neg(self) -> Array<T> {
        Array {
            ext: self.ext.clone(),
            data: self.data.iter().map(|a| -a.clone()).collect(),
        }
    }
}

impl<'a, 'b, T> Rem<&'b Schedule> for &'a Array<T>
where
    T: Clone + ZeroLike,
{
    type Output = Array<T>;

    /// Schedule application: a dense-shaped left operand extracts, a
    /// one-dimensional operand of schedule length inserts. Any other
    /// shape combination is a programming error.
    fn rem(self, sched: &'b Schedule) -> Array<T> {
        if &self.ext == sched.extents() {
            match self.extract(sched) {
                Ok(out) => out,
                Err(e) => panic!("schedule extraction failed: {}", e),
            }
        } else if self.ext.ndims() == 1 && self.len() == sched.len() {
            match self.insert_into(sched) {
                Ok(out) => out,
                Err(e) => panic!("schedule insertion failed: {}", e),
            }
        } else {
            panic!("operand shape fits neither extraction nor insertion");
        }
    }
}

impl<'b, T> std::ops::MulAssign<&'b Schedule> for Array<T>
where
    T: Clone + ZeroLike,
{
    /// Masking: zero outside the schedule, preserve inside.
    fn mul_assign(&mut self, sched: &'b Schedule) {
        self.mask(sched);
    }
}
