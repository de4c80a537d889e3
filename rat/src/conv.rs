// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use num_traits::{checked_pow, CheckedMul, Float, FromPrimitive, NumCast, ToPrimitive};

use crate::rational::{Integral, Rational};
use crate::rounding::Rounding;

impl<T: Integral> Rational<T> {
    /// Creates a rational from any primitive integer, if it fits in `T`.
    ///
    /// ```
    /// use rat::Rational32;
    /// assert_eq!(Rational32::from_integer_exact(7u64), Some(Rational32::from(7)));
    /// assert_eq!(Rational32::from_integer_exact(u64::MAX), None);
    /// ```
    pub fn from_integer_exact<I>(n: I) -> Option<Rational<T>>
    where
        I: ToPrimitive,
        T: NumCast,
    {
        Some(Rational::from_integer(<T as NumCast>::from(n)?))
    }

    /// Converts the rational to an integer, truncating toward zero.
    ///
    /// Round first to use a different rule.
    pub fn to_integer(&self) -> T {
        self.rounded(Rounding::TowardZero).numerator
    }

    /// Converts the rational to an integer if it has no fractional part.
    ///
    /// Returns `None` for values with a zero denominator.
    pub fn to_integer_exact(&self) -> Option<T> {
        if self.is_nan() {
            return None;
        }
        let (integer_part, fractional_part) = self.mixed_fraction();
        if fractional_part.is_zero() {
            Some(integer_part)
        } else {
            None
        }
    }
}

/// Converts an integer field to a float, if the float represents it exactly.
fn field_to_float<T, F>(n: &T) -> Option<F>
where
    T: Integral + ToPrimitive + FromPrimitive,
    F: Float,
{
    let f = <F as NumCast>::from(n.clone())?;
    if !f.is_finite() {
        return None;
    }
    match f.to_f64().and_then(T::from_f64) {
        Some(back) if back == *n => Some(f),
        _ => None,
    }
}

/// Converts a finite float to the exact rational it denotes.
fn float_to_rational<T, F>(f: F) -> Option<Rational<T>>
where
    T: Integral + FromPrimitive + CheckedMul,
    F: Float,
{
    if !f.is_finite() {
        return None;
    }
    let (mut mantissa, mut exponent, sign) = f.integer_decode();
    if mantissa == 0 {
        return Some(Rational::zero());
    }
    // Strip factors of two so that the power of two stays as small as
    // possible.
    while mantissa & 1 == 0 && exponent < 0 {
        mantissa >>= 1;
        exponent += 1;
    }
    let two = T::one() + T::one();
    let scale: T = checked_pow(two, <usize as From<u16>>::from(exponent.unsigned_abs()))?;
    let mut mantissa = T::from_u64(mantissa)?;
    if sign < 0 {
        mantissa = -mantissa;
    }
    if exponent >= 0 {
        Some(Rational::from_integer(mantissa.checked_mul(&scale)?))
    } else {
        Some(Rational::new(mantissa, scale))
    }
}

macro_rules! float_bridge {
    ($($f:ident),*) => {
        paste::paste! {
            impl<T: Integral> Rational<T> {
                $(
                    #[doc = concat!(
                        "Converts the rational to an `", stringify!($f), "`.\n\n",
                        "Returns `None` unless the numerator and denominator are both ",
                        "exactly representable as `", stringify!($f), "`.",
                    )]
                    pub fn [<to_ $f>](&self) -> Option<$f>
                    where
                        T: ToPrimitive + FromPrimitive,
                    {
                        let numerator: $f = field_to_float(&self.numerator)?;
                        let denominator: $f = field_to_float(&self.denominator)?;
                        Some(numerator / denominator)
                    }

                    #[doc = concat!(
                        "Creates the rational exactly equal to an `", stringify!($f), "`.\n\n",
                        "Returns `None` for NaN and infinities, and when the result does ",
                        "not fit in `T`.",
                    )]
                    pub fn [<from_ $f>](f: $f) -> Option<Rational<T>>
                    where
                        T: FromPrimitive + CheckedMul,
                    {
                        float_to_rational(f)
                    }
                )*
            }
        }
    };
}

float_bridge!(f32, f64);

/// Lossy conversions. Integers are truncated toward zero and floats are the
/// quotient of the converted fields. Values with a zero denominator convert
/// to `None`.
impl<T> ToPrimitive for Rational<T>
where
    T: Integral + ToPrimitive,
{
    fn to_i64(&self) -> Option<i64> {
        self.to_integer_lossy().and_then(|n| n.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer_lossy().and_then(|n| n.to_u64())
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_integer_lossy().and_then(|n| n.to_i128())
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_integer_lossy().and_then(|n| n.to_u128())
    }

    fn to_f64(&self) -> Option<f64> {
        if self.is_nan() {
            return None;
        }
        Some(self.numerator.to_f64()? / self.denominator.to_f64()?)
    }
}

impl<T: Integral> Rational<T> {
    fn to_integer_lossy(&self) -> Option<T> {
        if self.is_nan() {
            None
        } else {
            Some(self.to_integer())
        }
    }
}
