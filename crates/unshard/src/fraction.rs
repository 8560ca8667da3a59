//! exact rational arithmetic for lagrange interpolation
//!
//! every share value and basis coefficient is lifted into `Fraction` so the
//! whole interpolation sum is computed without floating-point error. values
//! are immutable: each operation returns a fresh normalized fraction.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{Error, Result};

/// a rational number in lowest terms with a strictly positive denominator
///
/// the sign lives in the numerator. invariants hold from construction on:
/// `gcd(num, den) == 1` and `den > 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// build `num / den`, failing on a zero denominator
    pub fn new(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self::normalized(num, den))
    }

    /// lift an integer (denominator 1)
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            num: n,
            den: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    // den must be nonzero here
    fn normalized(mut num: BigInt, mut den: BigInt) -> Self {
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        // gcd(0, d) = d, so 0/d collapses to 0/1
        let g = num.gcd(&den);
        Self {
            num: num / &g,
            den: den / g,
        }
    }

    /// `a/b + c/d = (a*d + c*b) / (b*d)`
    ///
    /// infallible: both denominators are positive, so their product is too.
    pub fn add(&self, other: &Self) -> Self {
        Self::normalized(
            &self.num * &other.den + &other.num * &self.den,
            &self.den * &other.den,
        )
    }

    /// `a/b * c/d = (a*c) / (b*d)`
    pub fn mul(&self, other: &Self) -> Self {
        Self::normalized(&self.num * &other.num, &self.den * &other.den)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// extract the numerator of an integral fraction
    ///
    /// a non-unit denominator means the accumulated sum does not describe an
    /// integer secret; that is surfaced, never truncated.
    pub fn into_integer(self) -> Result<BigInt> {
        if self.den.is_one() {
            Ok(self.num)
        } else {
            Err(Error::NonIntegerSecret {
                numerator: self.num,
                denominator: self.den,
            })
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
