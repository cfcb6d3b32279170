//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::array::Array;
use crate::err::McfftError;
use crate::extents::Extents;
use crate::fft::{transform_axis, Direction};
use crate::index::MdIndex;
use crate::scalar::Scalar;
use num_traits::float::{Float, FloatConst};
use num_traits::NumAssign;

/// One processing stage. Stages take the array by value and produce a
/// fresh array, so a pipeline is a plain fold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Doubles the extent of one axis; data keeps its coordinates and
    /// the new positions are zero.
    ZeroFill(usize),
    /// Forward transform along one axis.
    Transform(usize),
    /// Inverse transform along one axis. Not normalized.
    Invert(usize),
    /// Collapses every element to its norm, producing depth-0 scalars.
    Modulus,
    /// Keeps only the leading coefficient, producing depth-0 scalars.
    RealPart,
    /// Identity.
    Pass,
}

/// An ordered list of stages applied top to bottom.
///
/// # Example
///
/// ```rust
/// use mcfft::{Array, Extents, Pipeline, Scalar};
///
/// let ext = Extents::new(&[4]).unwrap();
/// let x = Array::fill(&ext, Scalar::<f64>::unit_real(1));
/// let out = Pipeline::new()
///     .zerofill(0)
///     .transform(0)
///     .modulus()
///     .run(x)
///     .unwrap();
/// assert_eq!(out.extents().get(0), 8);
/// assert_eq!(out[0].depth(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline { stages: Vec::new() }
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn zerofill(self, axis: usize) -> Self {
        self.stage(Stage::ZeroFill(axis))
    }

    pub fn transform(self, axis: usize) -> Self {
        self.stage(Stage::Transform(axis))
    }

    pub fn invert(self, axis: usize) -> Self {
        self.stage(Stage::Invert(axis))
    }

    pub fn modulus(self) -> Self {
        self.stage(Stage::Modulus)
    }

    pub fn real_part(self) -> Self {
        self.stage(Stage::RealPart)
    }

    pub fn pass(self) -> Self {
        self.stage(Stage::Pass)
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Runs every stage in order.
    pub fn run<T: Float + FloatConst + NumAssign>(
        &self,
        input: Array<Scalar<T>>,
    ) -> Result<Array<Scalar<T>>, McfftError> {
        let mut a = input;
        for stage in &self.stages {
            a = match stage {
                Stage::ZeroFill(axis) => zerofill(a, *axis)?,
                Stage::Transform(axis) => {
                    transform_axis(&mut a, *axis, Direction::Forward)?;
                    a
                }
                Stage::Invert(axis) => {
                    transform_axis(&mut a, *axis, Direction::Inverse)?;
                    a
                }
                Stage::Modulus => a.map(|z| Scalar::real(0, z.norm())),
                Stage::RealPart => a.map(|z| Scalar::real(0, z.coeff(0))),
                Stage::Pass => a,
            };
        }
        Ok(a)
    }
}

fn zerofill<T: Float + FloatConst + NumAssign>(
    a: Array<Scalar<T>>,
    axis: usize,
) -> Result<Array<Scalar<T>>, McfftError> {
    let ndims = a.extents().ndims();
    if axis >= ndims {
        return Err(McfftError::AxisOutOfRange(axis, ndims));
    }
    let mut sizes = a.extents().sizes().to_vec();
    sizes[axis] *= 2;
    let ext = Extents::new(&sizes)?;

    let depth = a[0].depth();
    let mut out = Array::fill(&ext, Scalar::zero(depth));
    let mut idx = MdIndex::new(a.extents());
    loop {
        let tgt = MdIndex::with_coords(&ext, idx.coords())?;
        out[&tgt] = a[&idx].clone();
        if !idx.incr() {
            break;
        }
    }
    Ok(out)
}
