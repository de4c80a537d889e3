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

//! Operator overloading for [`Rational`].
//!
//! Each operator is implemented once on a pair of references. The by-value
//! and mixed forms, and the in-place forms, forward to it.

use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use num_traits::{One, Zero};

use crate::rational::{Integral, Rational};

/// Derives the by-value and mixed reference forms of a binary operator, plus
/// its in-place counterparts, from the `&Rational op &Rational` impl.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl<T: Integral> $imp<Rational<T>> for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: Rational<T>) -> Rational<T> {
                (&self).$method(&rhs)
            }
        }

        impl<'a, T: Integral> $imp<&'a Rational<T>> for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: &'a Rational<T>) -> Rational<T> {
                (&self).$method(rhs)
            }
        }

        impl<'a, T: Integral> $imp<Rational<T>> for &'a Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: Rational<T>) -> Rational<T> {
                self.$method(&rhs)
            }
        }

        impl<T: Integral> $imp_assign<Rational<T>> for Rational<T> {
            fn $method_assign(&mut self, rhs: Rational<T>) {
                *self = (&*self).$method(&rhs);
            }
        }

        impl<'a, T: Integral> $imp_assign<&'a Rational<T>> for Rational<T> {
            fn $method_assign(&mut self, rhs: &'a Rational<T>) {
                *self = (&*self).$method(rhs);
            }
        }
    };
}

impl<'a, 'b, T: Integral> Add<&'b Rational<T>> for &'a Rational<T> {
    type Output = Rational<T>;

    fn add(self, rhs: &'b Rational<T>) -> Rational<T> {
        Rational::new(
            self.numerator.clone() * rhs.denominator.clone()
                + rhs.numerator.clone() * self.denominator.clone(),
            self.denominator.clone() * rhs.denominator.clone(),
        )
    }
}

impl<'a, 'b, T: Integral> Sub<&'b Rational<T>> for &'a Rational<T> {
    type Output = Rational<T>;

    fn sub(self, rhs: &'b Rational<T>) -> Rational<T> {
        Rational::new(
            self.numerator.clone() * rhs.denominator.clone()
                - rhs.numerator.clone() * self.denominator.clone(),
            self.denominator.clone() * rhs.denominator.clone(),
        )
    }
}

impl<'a, 'b, T: Integral> Mul<&'b Rational<T>> for &'a Rational<T> {
    type Output = Rational<T>;

    fn mul(self, rhs: &'b Rational<T>) -> Rational<T> {
        Rational::new(
            self.numerator.clone() * rhs.numerator.clone(),
            self.denominator.clone() * rhs.denominator.clone(),
        )
    }
}

impl<'a, 'b, T: Integral> Div<&'b Rational<T>> for &'a Rational<T> {
    type Output = Rational<T>;

    // Dividing by zero leaves a zero denominator, which `new` does not reduce.
    fn div(self, rhs: &'b Rational<T>) -> Rational<T> {
        Rational::new(
            self.numerator.clone() * rhs.denominator.clone(),
            self.denominator.clone() * rhs.numerator.clone(),
        )
    }
}

/// Computes [`Rational::remainder`].
///
/// # Panics
///
/// Panics if the dividend has a zero denominator and `T` panics on division
/// by zero.
impl<'a, 'b, T: Integral> Rem<&'b Rational<T>> for &'a Rational<T> {
    type Output = Rational<T>;

    fn rem(self, rhs: &'b Rational<T>) -> Rational<T> {
        self.remainder(rhs)
    }
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

impl<T: Integral> Neg for Rational<T> {
    type Output = Rational<T>;

    fn neg(mut self) -> Rational<T> {
        self.negate();
        self
    }
}

impl<'a, T: Integral> Neg for &'a Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Rational<T> {
        -self.clone()
    }
}

impl<T: Integral> Sum for Rational<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Rational<T>>,
    {
        iter.fold(Rational::zero(), |sum, r| sum + r)
    }
}

impl<'a, T: Integral> Sum<&'a Rational<T>> for Rational<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Rational<T>>,
    {
        iter.fold(Rational::zero(), |sum, r| sum + r)
    }
}

impl<T: Integral> Product for Rational<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Rational<T>>,
    {
        iter.fold(Rational::one(), |product, r| product * r)
    }
}

impl<'a, T: Integral> Product<&'a Rational<T>> for Rational<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Rational<T>>,
    {
        iter.fold(Rational::one(), |product, r| product * r)
    }
}

impl<T: Integral> Zero for Rational<T> {
    fn zero() -> Rational<T> {
        Rational::from_integer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<T: Integral> One for Rational<T> {
    fn one() -> Rational<T> {
        Rational::from_integer(T::one())
    }
}
