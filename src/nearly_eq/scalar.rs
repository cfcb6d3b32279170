//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/.

use crate::array::Array;
use crate::nearly_eq::NearlyEq;
use crate::scalar::Scalar;
use num_complex::Complex;

impl<A, B, C: NearlyEq<A, B>> NearlyEq<Complex<A>, B> for Complex<C> {
    fn eps() -> B {
        C::eps()
    }

    fn eq(&self, other: &Complex<A>, eps: &B) -> bool {
        self.re.eq(&other.re, eps) && self.im.eq(&other.im, eps)
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<Scalar<A>, B> for Scalar<C> {
    fn eps() -> B {
        C::eps()
    }

    fn eq(&self, other: &Scalar<A>, eps: &B) -> bool {
        self.coeffs().eq(other.coeffs(), eps)
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<Array<A>, B> for Array<C> {
    fn eps() -> B {
        C::eps()
    }

    fn eq(&self, other: &Array<A>, eps: &B) -> bool {
        self.extents() == other.extents() && self.data().eq(other.data(), eps)
    }
}
