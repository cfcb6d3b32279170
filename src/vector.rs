//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

/// A read-only strided view of one array axis.
///
/// Element `i` lives at linear offset `base + i * stride` of the backing
/// storage.
pub struct VectorView<'a, T> {
    data: &'a [T],
    base: usize,
    stride: usize,
    len: usize,
}

impl<'a, T> VectorView<'a, T> {
    pub fn new(data: &'a [T], base: usize, stride: usize, len: usize) -> Self {
        VectorView {
            data,
            base,
            stride,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, i: usize) -> &T {
        &self.data[self.base + i * self.stride]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).map(move |i| self.get(i))
    }
}

impl<'a, T> std::ops::Index<usize> for VectorView<'a, T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        self.get(i)
    }
}

/// A mutable strided view of one array axis.
pub struct VectorViewMut<'a, T> {
    data: &'a mut [T],
    base: usize,
    stride: usize,
    len: usize,
}

impl<'a, T> VectorViewMut<'a, T> {
    pub fn new(data: &'a mut [T], base: usize, stride: usize, len: usize) -> Self {
        VectorViewMut {
            data,
            base,
            stride,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Linear offset of element 0 in the backing storage.
    pub fn base(&self) -> usize {
        self.base
    }

    pub fn get(&self, i: usize) -> &T {
        &self.data[self.base + i * self.stride]
    }

    pub fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[self.base + i * self.stride]
    }

    pub fn set(&mut self, i: usize, value: T) {
        self.data[self.base + i * self.stride] = value;
    }

    /// Copies a dense slice into the view, e.g. a dot-product result.
    /// The lengths must match.
    pub fn copy_from(&mut self, values: &[T])
    where
        T: Clone,
    {
        assert_eq!(values.len(), self.len);
        for (i, v) in values.iter().enumerate() {
            self.set(i, v.clone());
        }
    }
}

impl<'a, T> std::ops::Index<usize> for VectorViewMut<'a, T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        self.get(i)
    }
}

impl<'a, T> std::ops::IndexMut<usize> for VectorViewMut<'a, T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.get_mut(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_access() {
        let data = vec![0, 1, 2, 3, 4, 5];
        let v = VectorView::new(&data, 1, 2, 3);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 3);
        assert_eq!(v[2], 5);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn mutation_through_the_view() {
        let mut data = vec![0, 1, 2, 3, 4, 5];
        {
            let mut v = VectorViewMut::new(&mut data, 0, 3, 2);
            v[1] = 30;
            v.copy_from(&[10, 40]);
        }
        assert_eq!(data, vec![10, 1, 2, 40, 4, 5]);
    }
}
