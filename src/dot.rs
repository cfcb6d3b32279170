//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::array::Array;
use crate::extents::Extents;
use std::ops::{Add, Mul};

// Inner products fold from the first term, so element types only need
// `Add` and `Mul`.

fn inner<T>(a: &[T], astride: usize, b: &[T], bstride: usize, n: usize) -> T
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    let mut acc = a[0].clone() * b[0].clone();
    for k in 1..n {
        acc = acc + a[k * astride].clone() * b[k * bstride].clone();
    }
    acc
}

/// vector . vector, a scalar. Both operands must be one-dimensional with
/// equal length.
pub fn dot_vv<T>(a: &Array<T>, b: &Array<T>) -> T
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    assert_eq!(a.extents().ndims(), 1);
    assert_eq!(a.extents(), b.extents());
    inner(a.data(), 1, b.data(), 1, a.len())
}

/// matrix . vector, a vector of the matrix row count.
pub fn dot_mv<T>(a: &Array<T>, x: &Array<T>) -> Array<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    assert_eq!(a.extents().ndims(), 2);
    assert_eq!(x.extents().ndims(), 1);
    let (rows, cols) = (a.extents().get(0), a.extents().get(1));
    assert_eq!(cols, x.extents().get(0));
    let data = (0..rows)
        .map(|i| inner(&a.data()[i * cols..], 1, x.data(), 1, cols))
        .collect();
    Array::from_vec(&Extents::new(&[rows]).unwrap(), data).unwrap()
}

/// vector . matrix, a vector of the matrix column count.
pub fn dot_vm<T>(x: &Array<T>, a: &Array<T>) -> Array<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    assert_eq!(x.extents().ndims(), 1);
    assert_eq!(a.extents().ndims(), 2);
    let (rows, cols) = (a.extents().get(0), a.extents().get(1));
    assert_eq!(rows, x.extents().get(0));
    let data = (0..cols)
        .map(|j| inner(x.data(), 1, &a.data()[j..], cols, rows))
        .collect();
    Array::from_vec(&Extents::new(&[cols]).unwrap(), data).unwrap()
}

/// matrix . matrix, a matrix of the outer extents.
pub fn dot_mm<T>(a: &Array<T>, b: &Array<T>) -> Array<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    assert_eq!(a.extents().ndims(), 2);
    assert_eq!(b.extents().ndims(), 2);
    let (m, k) = (a.extents().get(0), a.extents().get(1));
    let (k2, n) = (b.extents().get(0), b.extents().get(1));
    assert_eq!(k, k2);
    let mut data = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            data.push(inner(&a.data()[i * k..], 1, &b.data()[j..], n, k));
        }
    }
    Array::from_vec(&Extents::new(&[m, n]).unwrap(), data).unwrap()
}
