//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::array::Array;
use crate::err::McfftError;
use crate::fft::Transform;
use crate::scalar::Scalar;
use crate::schedule::Schedule;
use num_traits::cast;
use num_traits::float::{Float, FloatConst};
use num_traits::NumAssign;

/// Iterative soft-thresholding reconstruction of a nonuniformly sampled
/// signal.
///
/// `y` holds one measured value per schedule entry, in schedule order;
/// `sched` samples a one-dimensional grid of 2/3/5-smooth length. Each
/// iteration masks the residual onto the sampled positions, transforms
/// it, accumulates the spectrum, shrinks every spectral point toward zero
/// by the current threshold, and back-transforms the rescaled spectrum
/// into the next time-domain estimate. The threshold decays by `mu` per
/// iteration from `mu` times the largest initial spectral norm.
///
/// Returns the spectral estimate, the forward transform of the converged
/// time-domain signal.
pub fn reconstruct<T: Float + FloatConst + NumAssign>(
    y: &Array<Scalar<T>>,
    sched: &Schedule,
    iters: usize,
    mu: T,
) -> Result<Array<Scalar<T>>, McfftError> {
    if sched.extents().ndims() != 1 {
        return Err(McfftError::RankMismatch(1, sched.extents().ndims()));
    }
    let n = sched.extents().get(0);
    let nf: T = cast(n).unwrap();
    let depth = y[0].depth();
    let fwd = Transform::forward(n, depth)?;
    let inv = Transform::inverse(n, depth)?;

    let b = y.insert_into(sched)?;

    // Initial threshold from the spectrum of the raw insertion.
    let mut dx = b.clone();
    fwd.apply(dx.data_mut(), 0);
    let mut thresh = mu * dx.max().norm();

    let zero = Scalar::zero(depth);
    let mut x = Array::fill(b.extents(), zero.clone());
    let mut fx = Array::fill(b.extents(), zero);

    for _ in 0..iters {
        // Masked residual between the measurements and the estimate.
        let mut dx = &b - &x;
        dx *= sched;
        fwd.apply(dx.data_mut(), 0);
        fx = &fx + &dx;

        // Soft thresholding of the accumulated spectrum.
        fx.for_each(|z| {
            let znrm = z.norm();
            let scale = if znrm > thresh {
                T::one() - thresh / znrm
            } else {
                T::zero()
            };
            *z *= scale;
        });

        // Next time-domain estimate from the rescaled spectrum.
        x = fx.map(|z| z / nf);
        inv.apply(x.data_mut(), 0);

        thresh *= mu;
    }

    fwd.apply(x.data_mut(), 0);
    Ok(x)
}
