//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

/// A mutable two-axis view of an array.
///
/// Element `(i, j)` lives at linear offset
/// `base + i * stride_r + j * stride_c`.
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    base: usize,
    stride_r: usize,
    stride_c: usize,
    rows: usize,
    cols: usize,
}

impl<'a, T> MatrixViewMut<'a, T> {
    pub fn new(
        data: &'a mut [T],
        base: usize,
        stride_r: usize,
        stride_c: usize,
        rows: usize,
        cols: usize,
    ) -> Self {
        MatrixViewMut {
            data,
            base,
            stride_r,
            stride_c,
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[self.base + i * self.stride_r + j * self.stride_c]
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.data[self.base + i * self.stride_r + j * self.stride_c]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[self.base + i * self.stride_r + j * self.stride_c] = value;
    }

    /// Copies a dense row-major slice into the view, e.g. a dot-product
    /// result. The element counts must match.
    pub fn copy_from(&mut self, values: &[T])
    where
        T: Clone,
    {
        assert_eq!(values.len(), self.rows * self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                self.set(i, j, values[i * self.cols + j].clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_axis_addressing() {
        let mut data: Vec<i32> = (0..12).collect();
        {
            // rows over stride 4, columns over stride 1: the leading 2x3
            // corner of a 3x4 layout.
            let mut m = MatrixViewMut::new(&mut data, 0, 4, 1, 2, 3);
            assert_eq!(*m.get(1, 2), 6);
            m.set(0, 1, 100);
            m.copy_from(&[0, 1, 2, 3, 4, 5]);
        }
        assert_eq!(&data[..3], &[0, 1, 2]);
        assert_eq!(&data[4..7], &[3, 4, 5]);
    }
}
