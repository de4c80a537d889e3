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

//! rat is an exact rational arithmetic library for Rust.
//!
//! # Introduction
//!
//! Binary floating-point numbers cannot represent most fractions exactly:
//! `0.1 + 0.2 != 0.3`. A rational number stores a fraction as the ratio of
//! two integers instead, so sums, differences, products, and quotients are
//! always exact.
//!
//! # Details
//!
//! The main type exposed by this library is [`Rational`], a numerator and a
//! denominator of some signed integer type `T`. Any type implementing
//! [`Integral`] will do, so the same code runs on `i32`, `i64`, or an
//! arbitrary-precision integer. Several aliases are provided:
//!
//!  * [`Rat`], backed by `i64`.
//!
//!  * [`Rational32`] and [`Rational64`], backed by `i32` and `i64`.
//!
//!  * `BigRational`, backed by `num_bigint::BigInt`, when the `num-bigint`
//!    feature is enabled.
//!
//! Every constructor and every arithmetic operator returns a reduced value.
//! Overflow is whatever the backing integer type does on overflow; use an
//! arbitrary-precision integer when operands can grow without bound.
//!
//! Values can be rounded to integers with any of the rules in [`Rounding`],
//! split into integer and fractional parts, and, with the `serde` feature,
//! serialized as `[numerator, denominator]`.
//!
//! # Examples
//!
//! The following example demonstrates the basic usage of the library:
//!
//! ```
//! use rat::{Rat, Rounding};
//!
//! let x = Rat::new(1, 10);
//! let y = Rat::new(2, 10);
//! let z = Rat::new(3, 10);
//!
//! assert_eq!(x + y, z);
//! assert_eq!((x + y + z).to_string(), "3/5");
//! assert_eq!(Rat::new(3, 2).rounded(Rounding::TowardZero), Rat::from(1));
//! ```
//!
//! # Division by zero
//!
//! A zero denominator is never rejected. [`Rational::new`] accepts one, and
//! dividing by a zero value produces one. Such values report
//! [`Rational::is_nan`] and arithmetic on them is unspecified.

#![deny(missing_debug_implementations, missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "serde")]
mod codec;
mod conv;
mod error;
#[macro_use]
mod macros;
mod ops;
mod rational;
mod rounding;

pub use error::InvalidRepresentationError;
pub use rational::{Integral, Rational, Sign};
pub use rounding::Rounding;

/// A rational backed by `i64`.
pub type Rat = Rational<i64>;

/// A rational backed by `i32`.
pub type Rational32 = Rational<i32>;

/// A rational backed by `i64`.
pub type Rational64 = Rational<i64>;

/// An arbitrary-precision rational backed by `num_bigint::BigInt`.
#[cfg(feature = "num-bigint")]
#[cfg_attr(docsrs, doc(cfg(feature = "num-bigint")))]
pub type BigRational = Rational<num_bigint::BigInt>;
