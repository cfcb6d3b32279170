//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::array::Array;
use crate::err::McfftError;
use crate::index::MdIndex;
use crate::scalar::Scalar;
use num_traits::cast;
use num_traits::float::{Float, FloatConst};
use num_traits::NumAssign;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// Transform direction. The forward transform rotates by
/// `exp(-2 pi i k n / N)`, the inverse by the conjugate. Neither
/// normalizes; an inverse-after-forward round trip scales by `N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn sign<T: Float>(self) -> T {
        match self {
            Direction::Forward => -T::one(),
            Direction::Inverse => T::one(),
        }
    }
}

// Cycle-following swap lists for the in-place transposition that closes
// each composite stage. The lists depend only on (m1, m2, stride), so
// they are computed once per key and shared process-wide.
static SHUFFLE_CACHE: OnceLock<Mutex<HashMap<(usize, usize, usize), Arc<Vec<(usize, usize)>>>>> =
    OnceLock::new();

fn shuffle_swaps(m1: usize, m2: usize, stride: usize) -> Arc<Vec<(usize, usize)>> {
    let cache = SHUFFLE_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = cache.lock().unwrap();
    map.entry((m1, m2, stride))
        .or_insert_with(|| Arc::new(compute_shuffle_swaps(m1, m2, stride)))
        .clone()
}

/// Swap list that transposes an `m1`-by-`m2` matrix into an `m2`-by-`m1`
/// matrix in place, with every index scaled by `stride`.
fn compute_shuffle_swaps(m1: usize, m2: usize, stride: usize) -> Vec<(usize, usize)> {
    let n = m1 * m2;
    let mut a = vec![0usize; n];
    for i in 0..m1 {
        for j in 0..m2 {
            a[i * m2 + j] = j * m1 + i;
        }
    }
    let mut swaps = Vec::new();
    for i in 0..n {
        if a[i] == i {
            continue;
        }
        let mut j = i + 1;
        while j < n && a[j] != i {
            j += 1;
        }
        swaps.push((stride * i, stride * j));
        a[j] = a[i];
    }
    swaps
}

/// One node of the factorization tree. Base cases handle the supported
/// prime lengths directly; every other length splits into its smallest
/// supported factor `n1` and the remainder `n2`.
enum Block<T> {
    Radix2 {
        stride: usize,
    },
    Radix3 {
        stride: usize,
        w: [Scalar<T>; 3],
    },
    Radix5 {
        stride: usize,
        w: [Scalar<T>; 9],
    },
    Composite {
        n1: usize,
        n2: usize,
        stride: usize,
        dw: Vec<Scalar<T>>,
        unit: Scalar<T>,
        blk1: Box<Block<T>>,
        blk2: Box<Block<T>>,
        swaps: Arc<Vec<(usize, usize)>>,
    },
}

impl<T: Float + FloatConst + NumAssign> Block<T> {
    fn build(
        n: usize,
        stride: usize,
        depth: usize,
        phase: usize,
        dir: Direction,
    ) -> Result<Block<T>, McfftError> {
        // Twiddle constants live at the phase level and are promoted to
        // the full buffer depth, so each transform axis rotates about its
        // own imaginary unit.
        let tw = |m: usize, den: usize| match dir {
            Direction::Forward => Scalar::expmi(depth, phase, m, den),
            Direction::Inverse => Scalar::expi(depth, phase, m, den),
        };
        match n {
            2 => Ok(Block::Radix2 { stride }),
            3 => Ok(Block::Radix3 {
                stride,
                w: [tw(2, 3), tw(4, 3), tw(8, 3)],
            }),
            5 => Ok(Block::Radix5 {
                stride,
                w: [
                    tw(2, 5),
                    tw(4, 5),
                    tw(6, 5),
                    tw(8, 5),
                    tw(12, 5),
                    tw(16, 5),
                    tw(18, 5),
                    tw(24, 5),
                    tw(32, 5),
                ],
            }),
            _ => {
                let n1 = [2, 3, 5]
                    .iter()
                    .copied()
                    .find(|f| n % f == 0)
                    .ok_or(McfftError::NotSmooth(n))?;
                let n2 = n / n1;
                let blk1 = Box::new(Block::build(n1, stride, depth, phase, dir)?);
                let blk2 = Box::new(Block::build(n2, n1 * stride, depth, phase, dir)?);
                let sign: T = dir.sign();
                let mut dw = Vec::with_capacity(n1);
                for k in 0..n1 {
                    let sp2 = sign * crate::trig::sin_pi_frac::<T>(k, n);
                    let beta = sign * crate::trig::sin_pi_frac::<T>(2 * k, n);
                    let alpha = (T::one() + T::one()) * sp2 * sp2;
                    let mut d = Scalar::real(depth, alpha);
                    *d.coeff_mut(1 << (phase - 1)) = -beta;
                    dw.push(d);
                }
                Ok(Block::Composite {
                    n1,
                    n2,
                    stride,
                    dw,
                    unit: Scalar::unit_real(depth),
                    blk1,
                    blk2,
                    swaps: shuffle_swaps(n2, n1, stride),
                })
            }
        }
    }

    fn apply(&self, x: &mut [Scalar<T>], base: usize) {
        match self {
            Block::Radix2 { stride } => {
                let s = *stride;
                let xd = &x[base] - &x[base + s];
                x[base] = &x[base] + &x[base + s];
                x[base + s] = xd;
            }
            Block::Radix3 { stride, w } => {
                let s = *stride;
                let [w1, w2, w4] = w;
                let x0 = x[base].clone();
                let x1 = x[base + s].clone();
                let x2 = x[base + 2 * s].clone();
                x[base + s] = &(&x0 + &(&x1 * w1)) + &(&x2 * w2);
                x[base + 2 * s] = &(&x0 + &(&x1 * w2)) + &(&x2 * w4);
                x[base] = &(&x0 + &x1) + &x2;
            }
            Block::Radix5 { stride, w } => {
                let s = *stride;
                let [w1, w2, w3, w4, w6, w8, w9, w12, w16] = w;
                let x0 = x[base].clone();
                let x1 = x[base + s].clone();
                let x2 = x[base + 2 * s].clone();
                let x3 = x[base + 3 * s].clone();
                let x4 = x[base + 4 * s].clone();
                x[base + s] =
                    &(&(&(&x0 + &(&x1 * w1)) + &(&x2 * w2)) + &(&x3 * w3)) + &(&x4 * w4);
                x[base + 2 * s] =
                    &(&(&(&x0 + &(&x1 * w2)) + &(&x2 * w4)) + &(&x3 * w6)) + &(&x4 * w8);
                x[base + 3 * s] =
                    &(&(&(&x0 + &(&x1 * w3)) + &(&x2 * w6)) + &(&x3 * w9)) + &(&x4 * w12);
                x[base + 4 * s] =
                    &(&(&(&x0 + &(&x1 * w4)) + &(&x2 * w8)) + &(&x3 * w12)) + &(&x4 * w16);
                x[base] = &(&(&(&x0 + &x1) + &x2) + &x3) + &x4;
            }
            Block::Composite {
                n1,
                n2,
                stride,
                dw,
                unit,
                blk1,
                blk2,
                swaps,
            } => {
                let (n1, n2, s) = (*n1, *n2, *stride);

                // n1 transforms of size n2.
                for i in 0..n1 {
                    blk2.apply(x, base + s * i);
                }

                // Twiddle factors by trigonometric recurrence.
                for k1 in 1..n1 {
                    let d = &dw[k1];
                    let mut w = unit.clone();
                    for k2 in 0..n2 {
                        let idx = base + s * (k1 + n1 * k2);
                        x[idx] = &x[idx] * &w;
                        w = &w - &(d * &w);
                    }
                }

                // n2 strided transforms of size n1.
                for i in 0..n2 {
                    blk1.apply(x, base + n1 * s * i);
                }

                // Reorder into natural output order.
                for &(a, b) in swaps.iter() {
                    x.swap(base + a, base + b);
                }
            }
        }
    }
}

/// A reusable plan for one transform length, stride, scalar depth, phase
/// level and direction.
///
/// # Example
///
/// ```rust
/// use mcfft::{Scalar, Transform};
///
/// let n = 4;
/// let plan = Transform::<f64>::forward(n, 1).unwrap();
/// let mut x = vec![Scalar::unit_real(1); n];
/// plan.apply(&mut x, 0);
/// assert!((x[0].coeff(0) - 4.0).abs() < 1e-12);
/// assert!(x[1].norm() < 1e-12);
/// ```
pub struct Transform<T> {
    n: usize,
    stride: usize,
    depth: usize,
    phase: usize,
    dir: Direction,
    root: Block<T>,
}

impl<T: Float + FloatConst + NumAssign> Transform<T> {
    /// Builds a plan with phase level 1, the common one-dimensional case.
    pub fn new(
        n: usize,
        stride: usize,
        depth: usize,
        dir: Direction,
    ) -> Result<Self, McfftError> {
        Self::with_phase(n, stride, depth, 1, dir)
    }

    /// Builds a plan rotating about the imaginary unit of level `phase`.
    /// Fails when `n` is not 2/3/5-smooth, or when the scalar depth
    /// cannot hold the phase level.
    pub fn with_phase(
        n: usize,
        stride: usize,
        depth: usize,
        phase: usize,
        dir: Direction,
    ) -> Result<Self, McfftError> {
        if phase == 0 || phase > depth {
            return Err(McfftError::DepthTooShallow(depth, phase));
        }
        if n < 2 {
            return Err(McfftError::NotSmooth(n));
        }
        Ok(Transform {
            n,
            stride,
            depth,
            phase,
            dir,
            root: Block::build(n, stride, depth, phase, dir)?,
        })
    }

    /// A unit-stride forward plan over depth-`depth` scalars.
    pub fn forward(n: usize, depth: usize) -> Result<Self, McfftError> {
        Self::new(n, 1, depth, Direction::Forward)
    }

    /// A unit-stride inverse plan. Not normalized.
    pub fn inverse(n: usize, depth: usize) -> Result<Self, McfftError> {
        Self::new(n, 1, depth, Direction::Inverse)
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Transforms `n` elements of `x` in place, starting at `base` and
    /// stepping by the plan stride. Every touched element must have the
    /// plan's scalar depth.
    pub fn apply(&self, x: &mut [Scalar<T>], base: usize) {
        self.root.apply(x, base);
    }
}

/// Applies a one-dimensional transform along `axis` of a dense array, one
/// strided vector at a time. The phase level is `axis + 1`, so an array
/// of depth-`D` scalars supports transforms along its first `D` axes.
pub fn transform_axis<T: Float + FloatConst + NumAssign>(
    x: &mut Array<Scalar<T>>,
    axis: usize,
    dir: Direction,
) -> Result<(), McfftError> {
    let ndims = x.extents().ndims();
    if axis >= ndims {
        return Err(McfftError::AxisOutOfRange(axis, ndims));
    }
    let n = x.extents().get(axis);
    let stride = x.extents().stride(axis);
    let depth = x[0].depth();
    let plan = Transform::with_phase(n, stride, depth, axis + 1, dir)?;

    let mut idx = MdIndex::new(x.extents());
    let data = x.data_mut();
    loop {
        plan.apply(data, idx.pack_right());
        if !idx.incr_skip(axis) {
            break;
        }
    }
    Ok(())
}

/// Divides every element by the transform length of `axis`, the
/// normalization an inverse round trip needs.
pub fn normalize_axis<T: Float + FloatConst + NumAssign>(
    x: &mut Array<Scalar<T>>,
    axis: usize,
) -> Result<(), McfftError> {
    let ndims = x.extents().ndims();
    if axis >= ndims {
        return Err(McfftError::AxisOutOfRange(axis, ndims));
    }
    let n: T = cast(x.extents().get(axis)).unwrap();
    x.for_each(|v| *v /= n);
    Ok(())
}
