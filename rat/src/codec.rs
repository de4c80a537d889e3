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

//! Serialization of [`Rational`] as a sequence of integers.
//!
//! A rational always serializes as `[numerator, denominator]`. To make values
//! easy to write by hand, human-readable formats accept three shapes:
//!
//!  * `[n]`, the integer `n`.
//!  * `[n, d]`, the fraction `n / d`, stored as given.
//!  * `[i, [n, d]]`, the mixed fraction `i + n / d`, stored reduced.
//!
//! Telling the last two apart requires a self-describing format, so compact
//! formats only accept `[n, d]`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, IntoDeserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidRepresentationError;
use crate::rational::{Integral, Rational};

impl<T> Serialize for Rational<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.numerator)?;
        seq.serialize_element(&self.denominator)?;
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Rational<T>
where
    T: Integral + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let shorthand = deserializer.is_human_readable();
        deserializer.deserialize_seq(RationalVisitor {
            shorthand,
            _phantom: PhantomData,
        })
    }
}

fn invalid<E: de::Error>() -> E {
    E::custom(InvalidRepresentationError)
}

struct RationalVisitor<T> {
    shorthand: bool,
    _phantom: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for RationalVisitor<T>
where
    T: Integral + Deserialize<'de>,
{
    type Value = Rational<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a rational number as a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Rational<T>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let numerator: T = seq.next_element()?.ok_or_else(invalid)?;
        if !self.shorthand {
            let denominator: T = seq.next_element()?.ok_or_else(invalid)?;
            return Ok(Rational::new_raw(numerator, denominator));
        }

        let tail = match seq.next_element::<Tail<T>>()? {
            Some(tail) => tail,
            None => return Ok(Rational::new_raw(numerator, T::one())),
        };
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(invalid());
        }

        match tail {
            Tail::Denominator(denominator) => Ok(Rational::new_raw(numerator, denominator)),
            Tail::Fraction(n, d) => Ok(Rational::from_mixed_fraction(numerator, n, d)),
        }
    }
}

/// The second element of a serialized rational: a denominator, or the
/// fractional part of a mixed fraction.
enum Tail<T> {
    Denominator(T),
    Fraction(T, T),
}

impl<'de, T> Deserialize<'de> for Tail<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TailVisitor(PhantomData))
    }
}

struct TailVisitor<T>(PhantomData<T>);

/// Hands an integer seen by `deserialize_any` to `T`'s own deserializer, so
/// that `T` applies its usual range checks.
macro_rules! visit_integer {
    ($($method:ident: $ty:ty),*) => {
        $(
            fn $method<E>(self, v: $ty) -> Result<Tail<T>, E>
            where
                E: de::Error,
            {
                T::deserialize(v.into_deserializer()).map(Tail::Denominator)
            }
        )*
    };
}

/// Rejects a value that is neither an integer nor a sequence.
macro_rules! visit_invalid {
    ($($method:ident: $ty:ty),*) => {
        $(
            fn $method<E>(self, _: $ty) -> Result<Tail<T>, E>
            where
                E: de::Error,
            {
                Err(invalid())
            }
        )*
    };
}

impl<'de, T> Visitor<'de> for TailVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Tail<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a denominator or a fraction")
    }

    visit_integer!(visit_i64: i64, visit_u64: u64, visit_i128: i128, visit_u128: u128);
    visit_invalid!(visit_bool: bool, visit_f64: f64, visit_str: &str, visit_bytes: &[u8]);

    fn visit_unit<E>(self) -> Result<Tail<T>, E>
    where
        E: de::Error,
    {
        Err(invalid())
    }

    fn visit_map<A>(self, _: A) -> Result<Tail<T>, A::Error>
    where
        A: MapAccess<'de>,
    {
        Err(invalid())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Tail<T>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let numerator: T = seq.next_element()?.ok_or_else(invalid)?;
        let denominator: T = seq.next_element()?.ok_or_else(invalid)?;
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(invalid());
        }
        Ok(Tail::Fraction(numerator, denominator))
    }
}
