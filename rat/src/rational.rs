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

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_traits::Signed;
use static_assertions::{assert_eq_size, assert_impl_all};

/// The signed integer types a [`Rational`] can be built on.
///
/// Any type with the four arithmetic operators, remainder, negation, and
/// comparison qualifies, including the primitive signed integers and
/// arbitrary-precision integers such as `num_bigint::BigInt`.
pub trait Integral: Clone + Signed + PartialOrd {}

impl<T> Integral for T where T: Clone + Signed + PartialOrd {}

/// An exact rational number, the ratio of two signed integers.
///
/// Values built with [`Rational::new`] or produced by arithmetic are always
/// reduced: the numerator and denominator share no common factor and the
/// sign of the value is carried by the numerator.
///
/// ```
/// use rat::Rat;
/// let a = Rat::new(1, 2);
/// let b = Rat::new(1, 3);
/// assert_eq!(a + b, Rat::new(5, 6));
/// ```
///
/// A zero denominator is never checked. Such a value stands in for both NaN
/// and infinity (see [`Rational::is_nan`]) and the results of arithmetic on
/// it are unspecified. Dividing by a zero value produces one.
#[derive(Clone, Copy)]
pub struct Rational<T> {
    /// The numerator. Carries the sign of a reduced value.
    pub numerator: T,
    /// The denominator. Non-negative in a reduced value.
    pub denominator: T,
}

assert_eq_size!(Rational<i64>, [i64; 2]);
assert_impl_all!(Rational<i64>: Copy, Send, Sync, Hash, Ord);

/// The sign of a rational number.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Sign {
    /// Zero or greater.
    Plus,
    /// Less than zero.
    Minus,
}

impl<T> Rational<T> {
    /// Creates a rational from its fields verbatim, without reducing.
    ///
    /// Equality and ordering do not depend on the fields being reduced, but
    /// hashing and display do.
    pub const fn new_raw(numerator: T, denominator: T) -> Rational<T> {
        Rational {
            numerator,
            denominator,
        }
    }
}

impl<T: Integral> Rational<T> {
    /// Creates a rational `numerator / denominator` in reduced form.
    pub fn new(numerator: T, denominator: T) -> Rational<T> {
        let mut r = Rational::new_raw(numerator, denominator);
        r.reduce();
        r
    }

    /// Creates a rational with the integer value `n`.
    pub fn from_integer(n: T) -> Rational<T> {
        Rational::new_raw(n, T::one())
    }

    /// Creates the rational `integer_part + numerator / denominator` in
    /// reduced form.
    ///
    /// This is the inverse of [`Rational::mixed_fraction`].
    pub fn from_mixed_fraction(integer_part: T, numerator: T, denominator: T) -> Rational<T> {
        Rational::new(integer_part * denominator.clone() + numerator, denominator)
    }

    /// Returns zero.
    pub fn zero() -> Rational<T> {
        Rational::from_integer(T::zero())
    }

    /// Returns one.
    pub fn one() -> Rational<T> {
        Rational::from_integer(T::one())
    }

    /// Returns negative one.
    pub fn negative_one() -> Rational<T> {
        Rational::from_integer(-T::one())
    }

    /// Returns one half.
    pub fn half() -> Rational<T> {
        Rational::new_raw(T::one(), T::one() + T::one())
    }

    /// Reduces the rational in place.
    ///
    /// Afterwards the numerator and denominator are coprime and the
    /// denominator is non-negative. Only needed after assigning the fields
    /// directly. A zero denominator is left as is.
    pub fn reduce(&mut self) {
        if self.denominator.is_zero() {
            return;
        }
        let mut divisor = gcd(self.numerator.clone(), self.denominator.clone());
        if self.denominator.is_negative() {
            divisor = -divisor;
        }
        self.numerator = self.numerator.clone() / divisor.clone();
        self.denominator = self.denominator.clone() / divisor;
    }

    /// Returns a reduced copy of the rational.
    pub fn reduced(&self) -> Rational<T> {
        let mut r = self.clone();
        r.reduce();
        r
    }

    /// Returns `1 / self`.
    pub fn reciprocal(&self) -> Rational<T> {
        Rational::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Negates the rational in place.
    pub fn negate(&mut self) {
        self.numerator = -self.numerator.clone();
    }

    /// Returns the absolute value of the rational.
    ///
    /// Both fields are taken into account, so an unreduced value with a
    /// negative denominator is handled too.
    pub fn magnitude(&self) -> Rational<T> {
        if self.is_negative() {
            Rational::new(-self.numerator.clone(), self.denominator.clone())
        } else {
            self.clone()
        }
    }

    /// Reports the sign of the numerator.
    pub fn sign(&self) -> Sign {
        if self.numerator.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    /// Returns zero, one, or negative one according to the sign of the value.
    pub fn signum(&self) -> Rational<T> {
        if self.is_zero() {
            Rational::zero()
        } else if self.numerator.signum() == self.denominator.signum() {
            Rational::one()
        } else {
            Rational::negative_one()
        }
    }

    /// Reports whether the value is less than zero.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.numerator.is_negative() != self.denominator.is_negative()
    }

    /// Reports whether the value is greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.numerator.is_negative() == self.denominator.is_negative()
    }

    /// Reports whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Reports whether the denominator is zero.
    ///
    /// Rationals do not distinguish NaN from infinity; this is always equal
    /// to [`Rational::is_infinite`].
    pub fn is_nan(&self) -> bool {
        self.denominator.is_zero()
    }

    /// Reports whether the denominator is zero.
    pub fn is_infinite(&self) -> bool {
        self.denominator.is_zero()
    }

    /// Splits the rational into its integer part and fractional part,
    /// truncating toward zero.
    ///
    /// `Rational::from(integer_part) + fractional_part == self` always holds,
    /// and both parts have the sign of `self`.
    ///
    /// ```
    /// use rat::Rat;
    /// assert_eq!(Rat::new(-7, 2).mixed_fraction(), (-3, Rat::new(-1, 2)));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero and `T` panics on division by zero.
    pub fn mixed_fraction(&self) -> (T, Rational<T>) {
        let integer_part = self.numerator.clone() / self.denominator.clone();
        let remainder = self.numerator.clone() % self.denominator.clone();
        (integer_part, Rational::new(remainder, self.denominator.clone()))
    }

    /// Divides by `rhs`, returning an integer quotient and a rational
    /// remainder.
    ///
    /// `Rational::from(quotient) * rhs + remainder == self` holds for any
    /// nonzero `rhs`. A zero `self` yields `(0, 0)` and a zero `rhs` yields
    /// `(0, self)`.
    ///
    /// # Panics
    ///
    /// Panics if `self` has a zero denominator and `T` panics on division by
    /// zero.
    pub fn quotient_and_remainder(&self, rhs: &Rational<T>) -> (T, Rational<T>) {
        if self.is_zero() {
            return (T::zero(), Rational::zero());
        }
        if rhs.is_zero() {
            return (T::zero(), self.clone());
        }
        let (quotient, fractional_part) = (self * &rhs.reciprocal()).mixed_fraction();
        (quotient, &fractional_part * rhs)
    }

    /// Returns the remainder of dividing by `rhs`.
    ///
    /// See [`Rational::quotient_and_remainder`].
    ///
    /// # Panics
    ///
    /// Panics if `self` has a zero denominator and `T` panics on division by
    /// zero.
    pub fn remainder(&self, rhs: &Rational<T>) -> Rational<T> {
        self.quotient_and_remainder(rhs).1
    }

    /// Replaces the rational with the remainder of dividing it by `rhs`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Rational::remainder`].
    pub fn form_remainder(&mut self, rhs: &Rational<T>) {
        *self = self.remainder(rhs);
    }

    /// Cross-multiplies `self` and `other`, returning the two products to
    /// compare and whether their order must be reversed to account for
    /// negative denominators.
    fn cross(&self, other: &Rational<T>) -> (T, T, bool) {
        let lhs = self.numerator.clone() * other.denominator.clone();
        let rhs = other.numerator.clone() * self.denominator.clone();
        let flip = self.denominator.is_negative() != other.denominator.is_negative();
        (lhs, rhs, flip)
    }
}

/// Computes the greatest common divisor of `a` and `b` with Euclid's
/// algorithm. The result is non-negative.
fn gcd<T: Integral>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let r = a % b.clone();
        a = b;
        b = r;
    }
    a.abs()
}

impl<T: Integral> Default for Rational<T> {
    fn default() -> Rational<T> {
        Rational::zero()
    }
}

impl<T: Integral> From<T> for Rational<T> {
    fn from(n: T) -> Rational<T> {
        Rational::from_integer(n)
    }
}

impl<T: fmt::Display> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<T: fmt::Debug> fmt::Debug for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.numerator, self.denominator)
    }
}

impl<T: Integral> PartialEq for Rational<T> {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs, _) = self.cross(other);
        lhs == rhs
    }
}

impl<T: Integral + Eq> Eq for Rational<T> {}

impl<T: Integral> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (lhs, rhs, flip) = self.cross(other);
        let ordering = lhs.partial_cmp(&rhs)?;
        Some(if flip { ordering.reverse() } else { ordering })
    }
}

impl<T: Integral + Ord> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs, flip) = self.cross(other);
        let ordering = lhs.cmp(&rhs);
        if flip {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl<T: Integral + Hash> Hash for Rational<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        let r = self.reduced();
        r.numerator.hash(state);
        r.denominator.hash(state);
    }
}
