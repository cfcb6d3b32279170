//! Multicomplex mixed-radix Fourier transforms.
//!
//! Numerical kernels for reconstructing nonuniformly sampled spectra:
//! multicomplex scalars of arbitrary depth, shape-indexed arrays with
//! schedule-driven extraction and insertion, a mixed-radix 2/3/5 Fourier
//! transform engine whose per-axis rotations use independent imaginary
//! units, and an iterative soft-thresholding reconstruction driver on
//! top of them.
//!
//! ```rust
//! use mcfft::{Scalar, Transform};
//!
//! let plan = Transform::<f64>::forward(12, 1).unwrap();
//! let mut x = vec![Scalar::unit_real(1); 12];
//! plan.apply(&mut x, 0);
//! assert!((x[0].coeff(0) - 12.0).abs() < 1e-10);
//! ```
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/.

#[macro_use]
pub mod nearly_eq;

pub mod array;
pub mod dot;
mod err;
pub mod extents;
pub mod fft;
pub mod index;
pub mod ists;
pub mod matrix;
pub mod proc;
pub mod scalar;
pub mod schedule;
pub mod trig;
pub mod vector;

pub use crate::array::{Array, ZeroLike};
pub use crate::err::McfftError;
pub use crate::extents::Extents;
pub use crate::fft::{normalize_axis, transform_axis, Direction, Transform};
pub use crate::index::MdIndex;
pub use crate::ists::reconstruct;
pub use crate::matrix::MatrixViewMut;
pub use crate::proc::{Pipeline, Stage};
pub use crate::scalar::{Scalar, ScalarCmp};
pub use crate::schedule::Schedule;
pub use crate::vector::{VectorView, VectorViewMut};
