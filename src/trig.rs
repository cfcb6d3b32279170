//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use num_traits::cast;
use num_traits::float::{Float, FloatConst};
use num_traits::NumAssign;

// Series order. Terms past this contribute below f64 precision once the
// argument has been folded into [0, pi].
const ORDER: usize = 32;

/// Computes \\(\cos x\\) by Taylor series after folding \\(|x|\\)
/// into \\([0, \pi]\\).
pub fn cos<T: Float + FloatConst + NumAssign>(x: T) -> T {
    let mut t = x.abs();
    let mut sign = T::one();
    while t > T::PI() {
        t -= T::PI();
        sign = -sign;
    }
    let tsq = t * t;
    let mut term = T::one();
    let mut sum = T::one();
    let mut k = T::zero();
    for _ in (2..=ORDER).step_by(2) {
        let k1 = k + T::one();
        let k2 = k + cast(2).unwrap();
        term *= -tsq / (k1 * k2);
        sum += term;
        k = k2;
    }
    sum * sign
}

/// Computes \\(\sin x\\) by Taylor series after folding \\(|x|\\)
/// into \\([0, \pi]\\).
pub fn sin<T: Float + FloatConst + NumAssign>(x: T) -> T {
    let mut t = x.abs();
    let mut sign = if x < T::zero() { -T::one() } else { T::one() };
    while t > T::PI() {
        t -= T::PI();
        sign = -sign;
    }
    let tsq = t * t;
    let mut term = t;
    let mut sum = t;
    let mut k = T::one();
    for _ in (3..=ORDER).step_by(2) {
        let k1 = k + T::one();
        let k2 = k + cast(2).unwrap();
        term *= -tsq / (k1 * k2);
        sum += term;
        k = k2;
    }
    sum * sign
}

/// Returns \\(\cos(m \pi / n)\\).
pub fn cos_pi_frac<T: Float + FloatConst + NumAssign>(m: usize, n: usize) -> T {
    cos(T::PI() * cast::<_, T>(m).unwrap() / cast(n).unwrap())
}

/// Returns \\(\sin(m \pi / n)\\).
pub fn sin_pi_frac<T: Float + FloatConst + NumAssign>(m: usize, n: usize) -> T {
    sin(T::PI() * cast::<_, T>(m).unwrap() / cast(n).unwrap())
}
