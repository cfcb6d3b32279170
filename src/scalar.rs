//! Multicomplex mixed-radix Fourier transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::err::McfftError;
use crate::trig;
use num_complex::Complex;
use num_traits::float::{Float, FloatConst};
use num_traits::NumAssign;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Four-way comparison result for multicomplex values.
///
/// `Equivalent` marks values with equal norms but different coefficients,
/// which carry no meaningful order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarCmp {
    Less,
    Equal,
    Equivalent,
    Greater,
}

/// A multicomplex number of runtime depth `D`, stored as `2^D` real
/// coefficients.
///
/// Depth 0 is a real number, depth 1 an ordinary complex number, and each
/// further level adjoins one more imaginary unit: a depth-`D` value is a
/// pair `(re, im)` of depth-`D-1` values. The flat coefficient vector
/// concatenates the real half before the imaginary half at every level, so
/// the imaginary unit of level `p` sits at flat position `2^(p-1)`.
///
/// # Example
///
/// ```rust
/// use mcfft::Scalar;
///
/// let x = Scalar::from_coeffs(vec![3.0, 4.0]).unwrap();
/// let y = &x * &x.conj();
/// assert_eq!(y.coeff(0), 25.0);
/// assert_eq!(x.squared_norm(), 25.0);
/// ```
#[derive(Clone, Debug)]
pub struct Scalar<T> {
    coeffs: Vec<T>,
}

impl<T> Scalar<T> {
    /// Returns the algebraic depth, `log2` of the coefficient count.
    pub fn depth(&self) -> usize {
        self.coeffs.len().trailing_zeros() as usize
    }

    /// Returns the flat coefficient slice.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }
}

impl<T: Float + FloatConst + NumAssign> Scalar<T> {
    /// Returns the additive identity at the given depth.
    pub fn zero(depth: usize) -> Self {
        Scalar {
            coeffs: vec![T::zero(); 1 << depth],
        }
    }

    /// Returns a purely real value at the given depth.
    pub fn real(depth: usize, value: T) -> Self {
        let mut s = Self::zero(depth);
        s.coeffs[0] = value;
        s
    }

    /// Builds a value from its flat coefficients. The count must be a
    /// power of two.
    pub fn from_coeffs(coeffs: Vec<T>) -> Result<Self, McfftError> {
        if coeffs.is_empty() || !coeffs.len().is_power_of_two() {
            return Err(McfftError::BadCoefficientCount(coeffs.len()));
        }
        Ok(Scalar { coeffs })
    }

    /// Builds a depth-`D+1` value from two depth-`D` halves.
    pub fn from_parts(re: &Scalar<T>, im: &Scalar<T>) -> Self {
        assert_eq!(re.coeffs.len(), im.coeffs.len());
        let mut coeffs = Vec::with_capacity(re.coeffs.len() * 2);
        coeffs.extend_from_slice(&re.coeffs);
        coeffs.extend_from_slice(&im.coeffs);
        Scalar { coeffs }
    }

    /// The multiplicative identity `R` at the given depth.
    pub fn unit_real(depth: usize) -> Self {
        Self::real(depth, T::one())
    }

    /// The outermost imaginary unit at the given depth. Requires
    /// `depth >= 1`.
    pub fn unit_imag(depth: usize) -> Self {
        Self::phase_unit(depth, depth)
    }

    /// The imaginary unit of level `phase` (`1 <= phase <= depth`),
    /// promoted to the given depth. Its flat position is `2^(phase-1)`.
    pub fn phase_unit(depth: usize, phase: usize) -> Self {
        assert!(phase >= 1 && phase <= depth);
        let mut s = Self::zero(depth);
        s.coeffs[1 << (phase - 1)] = T::one();
        s
    }

    /// Returns `cos(m pi/n) R + sin(m pi/n) I_phase` at the given depth.
    pub fn expi(depth: usize, phase: usize, m: usize, n: usize) -> Self {
        assert!(phase >= 1 && phase <= depth);
        let mut s = Self::zero(depth);
        s.coeffs[0] = trig::cos_pi_frac(m, n);
        s.coeffs[1 << (phase - 1)] = trig::sin_pi_frac(m, n);
        s
    }

    /// Returns `cos(m pi/n) R - sin(m pi/n) I_phase` at the given depth.
    pub fn expmi(depth: usize, phase: usize, m: usize, n: usize) -> Self {
        let mut s = Self::expi(depth, phase, m, n);
        let i = 1 << (phase - 1);
        s.coeffs[i] = -s.coeffs[i];
        s
    }

    /// Zero-extends into a deeper algebra. Every existing coefficient
    /// keeps its flat position.
    pub fn promote(&self, depth: usize) -> Self {
        assert!(depth >= self.depth());
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(1 << depth, T::zero());
        Scalar { coeffs }
    }

    /// The real half, one level down. Requires `depth >= 1`.
    pub fn re(&self) -> Scalar<T> {
        let half = self.coeffs.len() / 2;
        Scalar {
            coeffs: self.coeffs[..half].to_vec(),
        }
    }

    /// The imaginary half, one level down. Requires `depth >= 1`.
    pub fn im(&self) -> Scalar<T> {
        let half = self.coeffs.len() / 2;
        Scalar {
            coeffs: self.coeffs[half..].to_vec(),
        }
    }

    pub fn coeff(&self, i: usize) -> T {
        self.coeffs[i]
    }

    pub fn coeff_mut(&mut self, i: usize) -> &mut T {
        &mut self.coeffs[i]
    }

    /// The multicomplex conjugate: `(re, -im)` at depth 1 and
    /// `(conj re, -conj im)` at deeper levels. Depth 0 is the identity.
    pub fn conj(&self) -> Scalar<T> {
        let mut coeffs = self.coeffs.clone();
        conj_in_place(&mut coeffs);
        Scalar { coeffs }
    }

    /// The multiplicative inverse, `(re k, -im k)` with
    /// `k = (re^2 + im^2)^-1` taken one level down. Singular inputs are
    /// an unchecked precondition.
    pub fn inverse(&self) -> Scalar<T> {
        Scalar {
            coeffs: inv_slices(&self.coeffs),
        }
    }

    /// Coefficient 0 of `x * conj(x)`. The product itself is not real in
    /// general; only its leading coefficient is taken.
    pub fn squared_norm(&self) -> T {
        let c = self.conj();
        mul_slices(&self.coeffs, &c.coeffs)[0]
    }

    /// Square root of [`squared_norm`](Self::squared_norm).
    pub fn norm(&self) -> T {
        self.squared_norm().sqrt()
    }

    /// Four-way comparison by squared norm, refined to `Equal` only on
    /// exact coefficient equality.
    pub fn compare(&self, other: &Scalar<T>) -> ScalarCmp {
        let a = self.squared_norm();
        let b = other.squared_norm();
        if a < b {
            ScalarCmp::Less
        } else if a > b {
            ScalarCmp::Greater
        } else if self.coeffs.len() == other.coeffs.len()
            && self.coeffs.iter().zip(&other.coeffs).all(|(x, y)| x == y)
        {
            ScalarCmp::Equal
        } else {
            ScalarCmp::Equivalent
        }
    }
}

// Recursive slice routines for the levelled product rules. Slices always
// hold a power-of-two count of coefficients.

fn conj_in_place<T: Float + NumAssign>(a: &mut [T]) {
    if a.len() == 1 {
        return;
    }
    let half = a.len() / 2;
    let (re, im) = a.split_at_mut(half);
    conj_in_place(re);
    conj_in_place(im);
    for v in im.iter_mut() {
        *v = -*v;
    }
}

fn mul_slices<T: Float + NumAssign>(a: &[T], b: &[T]) -> Vec<T> {
    assert_eq!(a.len(), b.len());
    if a.len() == 1 {
        return vec![a[0] * b[0]];
    }
    let half = a.len() / 2;
    let (ar, ai) = a.split_at(half);
    let (br, bi) = b.split_at(half);
    // (ar + ai u)(br + bi u) = (ar br - ai bi) + (ar bi + ai br) u
    let mut out = sub_slices(&mul_slices(ar, br), &mul_slices(ai, bi));
    out.extend(add_slices(&mul_slices(ar, bi), &mul_slices(ai, br)));
    out
}

fn add_slices<T: Float + NumAssign>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().zip(b).map(|(&x, &y)| x + y).collect()
}

fn sub_slices<T: Float + NumAssign>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().zip(b).map(|(&x, &y)| x - y).collect()
}

fn inv_slices<T: Float + NumAssign>(a: &[T]) -> Vec<T> {
    if a.len() == 1 {
        return vec![a[0].recip()];
    }
    let half = a.len() / 2;
    let (re, im) = a.split_at(half);
    let den = add_slices(&mul_slices(re, re), &mul_slices(im, im));
    let k = inv_slices(&den);
    let mut out = mul_slices(re, &k);
    out.extend(mul_slices(im, &k).into_iter().map(|v| -v));
    out
}

impl<'a, 'b, T: Float + FloatConst + NumAssign> Add<&'b Scalar<T>> for &'a Scalar<T> {
    type Output = Scalar<T>;
    fn add(self, rhs: &'b Scalar<T>) -> Scalar<T> {
        assert_eq!(self.coeffs.len(), rhs.coeffs.len());
        Scalar {
            coeffs: add_slices(&self.coeffs, &rhs.coeffs),
        }
    }
}

impl<'a, 'b, T: Float + FloatConst + NumAssign> Sub<&'b Scalar<T>> for &'a Scalar<T> {
    type Output = Scalar<T>;
    fn sub(self, rhs: &'b Scalar<T>) -> Scalar<T> {
        assert_eq!(self.coeffs.len(), rhs.coeffs.len());
        Scalar {
            coeffs: sub_slices(&self.coeffs, &rhs.coeffs),
        }
    }
}

impl<'a, 'b, T: Float + FloatConst + NumAssign> Mul<&'b Scalar<T>> for &'a Scalar<T> {
    type Output = Scalar<T>;
    fn mul(self, rhs: &'b Scalar<T>) -> Scalar<T> {
        Scalar {
            coeffs: mul_slices(&self.coeffs, &rhs.coeffs),
        }
    }
}

impl<'a, 'b, T: Float + FloatConst + NumAssign> Div<&'b Scalar<T>> for &'a Scalar<T> {
    type Output = Scalar<T>;
    fn div(self, rhs: &'b Scalar<T>) -> Scalar<T> {
        self * &rhs.inverse()
    }
}

impl<'a, T: Float + FloatConst + NumAssign> Neg for &'a Scalar<T> {
    type Output = Scalar<T>;
    fn neg(self) -> Scalar<T> {
        Scalar {
            coeffs: self.coeffs.iter().map(|&v| -v).collect(),
        }
    }
}

impl<'a, T: Float + FloatConst + NumAssign> Mul<T> for &'a Scalar<T> {
    type Output = Scalar<T>;
    fn mul(self, rhs: T) -> Scalar<T> {
        Scalar {
            coeffs: self.coeffs.iter().map(|&v| v * rhs).collect(),
        }
    }
}

impl<'a, T: Float + FloatConst + NumAssign> Div<T> for &'a Scalar<T> {
    type Output = Scalar<T>;
    fn div(self, rhs: T) -> Scalar<T> {
        Scalar {
            coeffs: self.coeffs.iter().map(|&v| v / rhs).collect(),
        }
    }
}

impl<'a, T: Float + FloatConst + NumAssign> Add<T> for &'a Scalar<T> {
    type Output = Scalar<T>;
    fn add(self, rhs: T) -> Scalar<T> {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] += rhs;
        Scalar { coeffs }
    }
}

impl<'a, T: Float + FloatConst + NumAssign> Sub<T> for &'a Scalar<T> {
    type Output = Scalar<T>;
    fn sub(self, rhs: T) -> Scalar<T> {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] -= rhs;
        Scalar { coeffs }
    }
}

// Owned-operand forms delegate to the reference forms so that generic code
// over `T: Add<Output = T> + Mul<Output = T>` can hold `Scalar` elements.

impl<T: Float + FloatConst + NumAssign> Add for Scalar<T> {
    type Output = Scalar<T>;
    fn add(self, rhs: Scalar<T>) -> Scalar<T> {
        &self + &rhs
    }
}

impl<T: Float + FloatConst + NumAssign> Sub for Scalar<T> {
    type Output = Scalar<T>;
    fn sub(self, rhs: Scalar<T>) -> Scalar<T> {
        &self - &rhs
    }
}

impl<T: Float + FloatConst + NumAssign> Mul for Scalar<T> {
    type Output = Scalar<T>;
    fn mul(self, rhs: Scalar<T>) -> Scalar<T> {
        &self * &rhs
    }
}

impl<T: Float + FloatConst + NumAssign> Div for Scalar<T> {
    type Output = Scalar<T>;
    fn div(self, rhs: Scalar<T>) -> Scalar<T> {
        &self / &rhs
    }
}

impl<T: Float + FloatConst + NumAssign> Neg for Scalar<T> {
    type Output = Scalar<T>;
    fn neg(self) -> Scalar<T> {
        -&self
    }
}

impl<'b, T: Float + FloatConst + NumAssign> AddAssign<&'b Scalar<T>> for Scalar<T> {
    fn add_assign(&mut self, rhs: &'b Scalar<T>) {
        assert_eq!(self.coeffs.len(), rhs.coeffs.len());
        for (x, y) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *x += *y;
        }
    }
}

impl<'b, T: Float + FloatConst + NumAssign> SubAssign<&'b Scalar<T>> for Scalar<T> {
    fn sub_assign(&mut self, rhs: &'b Scalar<T>) {
        assert_eq!(self.coeffs.len(), rhs.coeffs.len());
        for (x, y) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *x -= *y;
        }
    }
}

impl<'b, T: Float + FloatConst + NumAssign> MulAssign<&'b Scalar<T>> for Scalar<T> {
    fn mul_assign(&mut self, rhs: &'b Scalar<T>) {
        self.coeffs = mul_slices(&self.coeffs, &rhs.coeffs);
    }
}

impl<T: Float + FloatConst + NumAssign> MulAssign<T> for Scalar<T> {
    fn mul_assign(&mut self, rhs: T) {
        for v in self.coeffs.iter_mut() {
            *v *= rhs;
        }
    }
}

impl<T: Float + FloatConst + NumAssign> DivAssign<T> for Scalar<T> {
    fn div_assign(&mut self, rhs: T) {
        for v in self.coeffs.iter_mut() {
            *v /= rhs;
        }
    }
}

impl<T: PartialEq> PartialEq for Scalar<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<T: Float + FloatConst + NumAssign> PartialOrd for Scalar<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other) {
            ScalarCmp::Less => Some(Ordering::Less),
            ScalarCmp::Greater => Some(Ordering::Greater),
            ScalarCmp::Equal => Some(Ordering::Equal),
            ScalarCmp::Equivalent => None,
        }
    }
}

impl<T: Float + FloatConst + NumAssign> From<T> for Scalar<T> {
    fn from(value: T) -> Self {
        Scalar {
            coeffs: vec![value],
        }
    }
}

impl<T: Float + FloatConst + NumAssign> From<Complex<T>> for Scalar<T> {
    fn from(value: Complex<T>) -> Self {
        Scalar {
            coeffs: vec![value.re, value.im],
        }
    }
}

impl<T: Float + FloatConst + NumAssign> From<Scalar<T>> for Complex<T> {
    /// Projects onto depth 1. Requires `depth == 1`.
    fn from(value: Scalar<T>) -> Self {
        assert_eq!(value.depth(), 1);
        Complex::new(value.coeffs[0], value.coeffs[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::{Distribution, Standard};
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn random_scalar<R: Rng>(rng: &mut R, depth: usize) -> Scalar<f64>
    where
        Standard: Distribution<f64>,
    {
        let coeffs = (0..1 << depth).map(|_| rng.gen::<f64>() - 0.5).collect();
        Scalar::from_coeffs(coeffs).unwrap()
    }

    #[test]
    fn construction_checks_counts() {
        assert!(Scalar::<f64>::from_coeffs(vec![]).is_err());
        assert!(Scalar::from_coeffs(vec![1.0, 2.0, 3.0]).is_err());
        assert!(Scalar::from_coeffs(vec![1.0, 2.0, 3.0, 4.0]).is_ok());
        assert_eq!(Scalar::<f64>::zero(3).depth(), 3);
    }

    #[test]
    fn units_sit_at_powers_of_two() {
        let i1 = Scalar::<f64>::phase_unit(2, 1);
        let i2 = Scalar::<f64>::phase_unit(2, 2);
        assert_eq!(i1.coeffs(), &[0.0, 1.0, 0.0, 0.0]);
        assert_eq!(i2.coeffs(), &[0.0, 0.0, 1.0, 0.0]);
        assert_eq!(Scalar::<f64>::unit_imag(2), i2);
    }

    #[test]
    fn depth_one_matches_complex_product() {
        let mut rng = XorShiftRng::from_seed([
            0xDA, 0xE1, 0x4B, 0x0B, 0xFF, 0xC2, 0xFE, 0x64, 0x23, 0xFE, 0x3F, 0x51, 0x6D, 0x3E,
            0xA2, 0xF3,
        ]);
        for _ in 0..100 {
            let a = random_scalar(&mut rng, 1);
            let b = random_scalar(&mut rng, 1);
            let ca = Complex::new(a.coeff(0), a.coeff(1));
            let cb = Complex::new(b.coeff(0), b.coeff(1));
            let p = &a * &b;
            let cp = ca * cb;
            assert_nearly_eq!(Complex::from(p), cp);
        }
    }

    #[test]
    fn phase_units_square_to_minus_one() {
        for depth in 1..4 {
            for phase in 1..=depth {
                let u = Scalar::<f64>::phase_unit(depth, phase);
                let sq = &u * &u;
                let minus_one = -&Scalar::<f64>::unit_real(depth);
                assert_eq!(sq, minus_one);
            }
        }
    }

    #[test]
    fn conjugation_is_an_involution() {
        let mut rng = XorShiftRng::from_seed([
            0x24, 0x8C, 0x3F, 0x70, 0x29, 0x99, 0x75, 0x5C, 0x26, 0x51, 0x8D, 0x42, 0x7A, 0xB1,
            0x30, 0x09,
        ]);
        for depth in 0..3 {
            let x = random_scalar(&mut rng, depth);
            assert_eq!(x.conj().conj(), x);
        }
    }

    #[test]
    fn conjugation_negates_every_imaginary_level() {
        let x = Scalar::from_coeffs(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(x.conj().coeffs(), &[1.0, -2.0, -3.0, 4.0]);
    }

    #[test]
    fn inverse_recovers_the_unit() {
        let mut rng = XorShiftRng::from_seed([
            0x11, 0x7E, 0xF8, 0x3A, 0xBD, 0x0C, 0x51, 0x22, 0x05, 0x9A, 0x6E, 0x4D, 0x28, 0x7F,
            0x13, 0x66,
        ]);
        for depth in 0..3 {
            for _ in 0..20 {
                let x = random_scalar(&mut rng, depth);
                let p = &x * &x.inverse();
                let unit = Scalar::<f64>::unit_real(depth);
                assert_nearly_eq!(p, unit, 1e-9);
            }
        }
    }

    #[test]
    fn squared_norm_takes_the_leading_coefficient() {
        let x = Scalar::from_coeffs(vec![3.0, 4.0]).unwrap();
        assert_nearly_eq!(x.squared_norm(), 25.0);
        let y = Scalar::from_coeffs(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_nearly_eq!(y.squared_norm(), 30.0);
        assert!(y.squared_norm() >= 0.0);
    }

    #[test]
    fn promote_keeps_flat_positions() {
        let x = Scalar::from_coeffs(vec![1.0, 2.0]).unwrap();
        let y = x.promote(3);
        assert_eq!(y.coeffs(), &[1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(y.re().re().coeffs(), x.coeffs());
    }

    #[test]
    fn comparison_distinguishes_equivalence() {
        let a = Scalar::from_coeffs(vec![3.0, 4.0]).unwrap();
        let b = Scalar::from_coeffs(vec![4.0, 3.0]).unwrap();
        let c = Scalar::from_coeffs(vec![0.0, 1.0]).unwrap();
        assert_eq!(a.compare(&b), ScalarCmp::Equivalent);
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(a.compare(&a.clone()), ScalarCmp::Equal);
        assert_eq!(c.compare(&a), ScalarCmp::Less);
        assert_eq!(a.compare(&c), ScalarCmp::Greater);
    }

    #[test]
    fn expi_and_expmi_are_conjugate() {
        let f = Scalar::<f64>::expmi(1, 1, 2, 3);
        let i = Scalar::<f64>::expi(1, 1, 2, 3);
        assert_eq!(f.conj(), i);
        let p = &f * &i;
        assert_nearly_eq!(p.coeff(0), 1.0, 1e-14);
        assert_nearly_eq!(p.coeff(1), 0.0, 1e-14);
    }
}
