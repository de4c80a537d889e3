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

use std::error::Error;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rat::{BigRational, Rational, Rounding};

fn big(n: i64, d: i64) -> BigRational {
    Rational::new(BigInt::from(n), BigInt::from(d))
}

#[test]
fn test_arithmetic() -> Result<(), Box<dyn Error>> {
    assert_eq!(big(1, 2) + big(1, 3), big(5, 6));
    assert_eq!(big(1, 2) - big(1, 3), big(1, 6));
    assert_eq!(&big(2, 3) * &big(3, 4), big(1, 2));
    assert_eq!(big(1, 2) / big(1, 4), big(2, 1));
    assert_eq!(big(10, 1) % big(3, 1), big(1, 1));
    assert_eq!(-big(1, 2), big(-1, 2));

    let mut x = big(1, 2);
    x += big(1, 2);
    x *= &big(3, 1);
    assert_eq!(x, big(3, 1));

    assert_eq!(
        vec![big(1, 2), big(1, 3), big(1, 6)]
            .into_iter()
            .sum::<BigRational>(),
        big(1, 1)
    );
    assert_eq!(
        [big(2, 3), big(3, 4)].iter().product::<BigRational>(),
        big(1, 2)
    );
    Ok(())
}

#[test]
fn test_beyond_i64() -> Result<(), Box<dyn Error>> {
    let square = BigInt::from(u64::MAX) * BigInt::from(u64::MAX);
    let r = Rational::new(square.clone(), BigInt::from(2));
    assert_eq!(r.to_string(), format!("{}/2", square));

    let (integer_part, fractional_part) = r.mixed_fraction();
    assert_eq!(integer_part, &square / BigInt::from(2));
    assert_eq!(fractional_part, big(1, 2));

    assert_eq!(
        r.rounded(Rounding::ToNearestOrAwayFromZero).numerator,
        &square / BigInt::from(2) + BigInt::from(1)
    );
    assert_eq!(
        r.rounded(Rounding::ToNearestOrEven).numerator,
        &square / BigInt::from(2)
    );
    assert_eq!(r.to_integer(), &square / BigInt::from(2));
    assert_eq!(r.to_integer_exact(), None);

    // Reduction cancels a factor wider than any machine integer.
    let wide = Rational::new(square.clone() * BigInt::from(3), square * BigInt::from(7));
    assert_eq!(
        (wide.numerator, wide.denominator),
        (BigInt::from(3), BigInt::from(7))
    );
    Ok(())
}

#[test]
fn test_lossy_float() -> Result<(), Box<dyn Error>> {
    assert_eq!(ToPrimitive::to_f64(&big(1, 4)), Some(0.25));
    assert_eq!(ToPrimitive::to_i64(&big(-7, 2)), Some(-3));
    assert_eq!(ToPrimitive::to_f64(&big(1, 0)), None);

    // The exact bridge refuses a numerator wider than the float mantissa; the
    // lossy one rounds it.
    let square = BigInt::from(u64::MAX) * BigInt::from(u64::MAX);
    let r = Rational::new(square, BigInt::from(2));
    assert_eq!(r.to_f64(), None);
    assert_eq!(ToPrimitive::to_f64(&r), Some(2f64.powi(127)));
    assert_eq!(ToPrimitive::to_i64(&r), None);
    Ok(())
}

#[test]
fn test_laws() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(0xb16);
    for _ in 0..200 {
        let mut draw = || {
            let n: i64 = rng.gen_range(1, i64::MAX);
            let sign: i64 = if rng.gen::<bool>() { 1 } else { -1 };
            BigInt::from(n) * BigInt::from(n) * BigInt::from(sign)
        };
        let r: BigRational = Rational::new(draw(), draw());
        let s: BigRational = Rational::new(draw(), draw());

        assert_eq!(&r + &BigRational::zero(), r);
        assert_eq!(&r + &(-&r), BigRational::zero());
        assert_eq!(&(&r / &s) * &s, r);

        let (integer_part, fractional_part) = r.mixed_fraction();
        assert_eq!(BigRational::from(integer_part) + fractional_part, r);

        let (quotient, remainder) = r.quotient_and_remainder(&s);
        assert_eq!(BigRational::from(quotient) * &s + remainder, r);
    }
    Ok(())
}
