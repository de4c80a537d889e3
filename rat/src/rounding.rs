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

use crate::rational::{Integral, Rational};

/// Rules for rounding a rational number to an integer.
///
/// Rounding never passes through floating point; every rule works directly on
/// the numerator and denominator.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Rounding {
    /// Round towards zero (truncation).
    TowardZero,
    /// Round away from zero.
    AwayFromZero,
    /// Round towards negative infinity.
    Down,
    /// Round towards positive infinity.
    Up,
    /// Round to nearest; if equidistant, round away from zero.
    ToNearestOrAwayFromZero,
    /// Round to nearest; if equidistant, round so that the result is even.
    ToNearestOrEven,
}

impl Default for Rounding {
    fn default() -> Rounding {
        Rounding::ToNearestOrAwayFromZero
    }
}

impl<T: Integral> Rational<T> {
    /// Rounds the rational in place to an integer value using `rounding`.
    ///
    /// The result keeps the `Rational` type with a denominator of one.
    /// Values that are already integers, and values with a zero denominator,
    /// are left untouched.
    ///
    /// ```
    /// use rat::{Rat, Rounding};
    /// let mut r = Rat::new(5, 2);
    /// r.round(Rounding::ToNearestOrEven);
    /// assert_eq!(r, Rat::from(2));
    /// ```
    pub fn round(&mut self, rounding: Rounding) {
        if self.denominator.is_one() || self.denominator.is_zero() {
            return;
        }
        let negative = self.is_negative();
        let quotient = self.numerator.clone() / self.denominator.clone();

        // Distances from the value to the integers on either side of it,
        // in units of 1/denominator.
        let toward_zero =
            (self.numerator.clone() - quotient.clone() * self.denominator.clone()).abs();
        let away_from_zero = self.denominator.abs() - toward_zero.clone();
        let inexact = !toward_zero.is_zero();

        let step = match rounding {
            Rounding::TowardZero => false,
            Rounding::AwayFromZero => inexact,
            Rounding::Down => negative && inexact,
            Rounding::Up => !negative && inexact,
            Rounding::ToNearestOrAwayFromZero => away_from_zero <= toward_zero,
            Rounding::ToNearestOrEven => {
                if away_from_zero == toward_zero {
                    !(quotient.clone() % (T::one() + T::one())).is_zero()
                } else {
                    away_from_zero < toward_zero
                }
            }
        };

        self.numerator = if step {
            if negative {
                quotient - T::one()
            } else {
                quotient + T::one()
            }
        } else {
            quotient
        };
        self.denominator = T::one();
    }

    /// Returns a copy of the rational rounded to an integer value using
    /// `rounding`.
    ///
    /// See [`Rational::round`].
    pub fn rounded(&self, rounding: Rounding) -> Rational<T> {
        let mut r = self.clone();
        r.round(rounding);
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Rounding::*;

    #[test]
    fn test_rounding_table() {
        // value, TowardZero, AwayFromZero, Down, Up, ToNearestOrAwayFromZero, ToNearestOrEven
        const TESTS: &[((i64, i64), [i64; 6])] = &[
            ((3, 2), [1, 2, 1, 2, 2, 2]),
            ((5, 2), [2, 3, 2, 3, 3, 2]),
            ((-3, 2), [-1, -2, -2, -1, -2, -2]),
            ((-5, 2), [-2, -3, -3, -2, -3, -2]),
            ((4, 3), [1, 2, 1, 2, 1, 1]),
            ((5, 3), [1, 2, 1, 2, 2, 2]),
            ((-4, 3), [-1, -2, -2, -1, -1, -1]),
            ((-5, 3), [-1, -2, -2, -1, -2, -2]),
            ((1, 7), [0, 1, 0, 1, 0, 0]),
            ((-1, 7), [0, -1, -1, 0, 0, 0]),
            ((7, 1), [7, 7, 7, 7, 7, 7]),
            ((0, 1), [0, 0, 0, 0, 0, 0]),
        ];
        let rules = [
            TowardZero,
            AwayFromZero,
            Down,
            Up,
            ToNearestOrAwayFromZero,
            ToNearestOrEven,
        ];
        for &((n, d), expected) in TESTS {
            for (rule, expected) in rules.iter().zip(expected.iter()) {
                let r = Rational::new(n, d).rounded(*rule);
                assert_eq!(
                    (r.numerator, r.denominator),
                    (*expected, 1),
                    "{}/{} rounded {:?}",
                    n,
                    d,
                    rule
                );
            }
        }
    }

    #[test]
    fn test_round_unreduced() {
        let r = Rational::new_raw(6i32, 4).rounded(TowardZero);
        assert_eq!((r.numerator, r.denominator), (1, 1));

        let r = Rational::new_raw(3i32, -2).rounded(ToNearestOrAwayFromZero);
        assert_eq!((r.numerator, r.denominator), (-2, 1));
    }

    #[test]
    fn test_round_zero_denominator() {
        let r = Rational::new_raw(3i32, 0).rounded(Up);
        assert_eq!((r.numerator, r.denominator), (3, 0));
    }

    #[test]
    fn test_default_rounding() {
        assert_eq!(Rounding::default(), ToNearestOrAwayFromZero);
    }
}
